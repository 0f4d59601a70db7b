mod models;
mod provider_error;
mod realtor;
mod schools;
mod socrata;

pub use models::{
    Address, ComparableProperty, Coordinate, HomeDetailResponse, IncidentRecord, Location,
    SchoolsResponse, SimilarHomesResponse,
};
pub use provider_error::ProviderError;
pub use realtor::RealtorClient;
pub use schools::GreatSchoolsClient;
pub use socrata::SocrataClient;

use crate::config::AppConfig;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("safe_home_finder/", env!("CARGO_PKG_VERSION"));

/// Comparable listings and property details, keyed by the provider's
/// property ID.
pub trait ListingProvider: Send + Sync {
    fn similar_homes(&self, property_id: &str) -> Result<SimilarHomesResponse, ProviderError>;
    fn home_detail(&self, property_id: &str) -> Result<HomeDetailResponse, ProviderError>;
}

pub trait SchoolProvider: Send + Sync {
    fn nearby_schools(
        &self,
        state: &str,
        lat: f64,
        lon: f64,
    ) -> Result<SchoolsResponse, ProviderError>;
}

/// Returns every recent incident for the municipality; filtering happens
/// on our side.
pub trait CrimeProvider: Send + Sync {
    fn incidents(&self) -> Result<Vec<IncidentRecord>, ProviderError>;
}

/// The three data sources a details page draws on.
pub struct Providers {
    pub listings: Box<dyn ListingProvider>,
    pub schools: Box<dyn SchoolProvider>,
    pub crimes: Box<dyn CrimeProvider>,
}

impl Providers {
    pub fn from_config(cfg: &AppConfig) -> Result<Self, ProviderError> {
        let client = build_client(cfg.http_timeout)?;

        Ok(Self {
            listings: Box::new(RealtorClient::new(client.clone(), cfg.realtor.clone())),
            schools: Box::new(GreatSchoolsClient::new(client.clone(), cfg.schools.clone())),
            crimes: Box::new(SocrataClient::new(client, cfg.crime.clone())),
        })
    }
}

pub fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Network(e.to_string()))
}

/// Sends the request and decodes a JSON body, turning non-2xx answers into
/// `ProviderError::Status`.
fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ProviderError> {
    let resp = request
        .send()
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    let status = resp.status();
    let text = resp
        .text()
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ProviderError::Status {
            code: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|e| ProviderError::JsonParse(e.to_string()))
}

fn require_key(key: &Option<String>, name: &str) -> Result<String, ProviderError> {
    key.clone()
        .ok_or_else(|| ProviderError::Config(format!("{name} environment variable not set")))
}
