// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATABASE_PATH: &str = "safehome.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
pub const DEFAULT_REALTOR_BASE_URL: &str = "https://realtor.p.rapidapi.com";
pub const DEFAULT_REALTOR_HOST: &str = "realtor.p.rapidapi.com";
pub const DEFAULT_GREATSCHOOLS_BASE_URL: &str = "https://api.greatschools.org";
pub const DEFAULT_CRIME_YEAR: i32 = 2020;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Settings for the listing provider (RapidAPI realtor endpoints).
#[derive(Debug, Clone)]
pub struct RealtorConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SchoolsConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

/// Municipal open-data crime dataset. The dataset URL differs per city,
/// so there is no default.
#[derive(Debug, Clone)]
pub struct CrimeConfig {
    pub dataset_url: Option<String>,
    pub app_token: Option<String>,
    /// Year shown in the chart title.
    pub year: i32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub schema_path: String,
    pub http_timeout: Duration,
    pub realtor: RealtorConfig,
    pub schools: SchoolsConfig,
    pub crime: CrimeConfig,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Missing API keys are not an error here; the affected client reports
    /// it when it is called.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| format!("invalid BIND_ADDR: {e}"))?;

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .map_err(|e| format!("invalid HTTP_TIMEOUT_SECS: {e}"))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let year = match get("CRIME_YEAR") {
            Some(v) => v
                .parse::<i32>()
                .map_err(|e| format!("invalid CRIME_YEAR: {e}"))?,
            None => DEFAULT_CRIME_YEAR,
        };

        Ok(Self {
            bind_addr,
            database_path: get("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            schema_path: get("SCHEMA_PATH").unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
            http_timeout: Duration::from_secs(http_timeout),
            realtor: RealtorConfig {
                base_url: get("REALTOR_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_REALTOR_BASE_URL.to_string()),
                host: get("REALTOR_HOST").unwrap_or_else(|| DEFAULT_REALTOR_HOST.to_string()),
                api_key: get("RAPIDAPI_KEY"),
            },
            schools: SchoolsConfig {
                base_url: get("GREATSCHOOLS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GREATSCHOOLS_BASE_URL.to_string()),
                api_key: get("GREATSCHOOLS_API_KEY"),
            },
            crime: CrimeConfig {
                dataset_url: get("SOCRATA_CRIMES_URL"),
                app_token: get("SOCRATA_APP_TOKEN"),
                year,
            },
        })
    }
}
