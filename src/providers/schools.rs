use crate::config::SchoolsConfig;
use crate::providers::{fetch_json, require_key, ProviderError, SchoolProvider, SchoolsResponse};
use reqwest::blocking::Client;

pub struct GreatSchoolsClient {
    client: Client,
    cfg: SchoolsConfig,
}

impl GreatSchoolsClient {
    pub fn new(client: Client, cfg: SchoolsConfig) -> Self {
        Self { client, cfg }
    }
}

impl SchoolProvider for GreatSchoolsClient {
    fn nearby_schools(
        &self,
        state: &str,
        lat: f64,
        lon: f64,
    ) -> Result<SchoolsResponse, ProviderError> {
        let api_key = require_key(&self.cfg.api_key, "GREATSCHOOLS_API_KEY")?;
        let url = format!("{}/schools/nearby", self.cfg.base_url.trim_end_matches('/'));

        let request = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(&[
                ("key", api_key),
                ("state", state.to_string()),
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
            ]);

        fetch_json(request)
    }
}
