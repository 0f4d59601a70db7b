use crate::config::CrimeConfig;
use crate::providers::{fetch_json, CrimeProvider, IncidentRecord, ProviderError};
use reqwest::blocking::Client;

/// Socrata open-data (SODA) client for a city's crime incident dataset.
pub struct SocrataClient {
    client: Client,
    cfg: CrimeConfig,
}

impl SocrataClient {
    pub fn new(client: Client, cfg: CrimeConfig) -> Self {
        Self { client, cfg }
    }
}

impl CrimeProvider for SocrataClient {
    fn incidents(&self) -> Result<Vec<IncidentRecord>, ProviderError> {
        let url = self.cfg.dataset_url.as_deref().ok_or_else(|| {
            ProviderError::Config("SOCRATA_CRIMES_URL environment variable not set".into())
        })?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.cfg.app_token {
            request = request.header("X-App-Token", token);
        }

        fetch_json(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::build_client;
    use std::time::Duration;

    #[test]
    fn unconfigured_dataset_is_a_config_error() {
        let client = build_client(Duration::from_secs(1)).unwrap();
        let socrata = SocrataClient::new(
            client,
            CrimeConfig {
                dataset_url: None,
                app_token: None,
                year: 2020,
            },
        );

        assert!(matches!(socrata.incidents(), Err(ProviderError::Config(_))));
    }
}
