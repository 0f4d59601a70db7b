// realtor.rs
use crate::config::RealtorConfig;
use crate::providers::{
    fetch_json, require_key, HomeDetailResponse, ListingProvider, ProviderError,
    SimilarHomesResponse,
};
use reqwest::blocking::{Client, RequestBuilder};

pub struct RealtorClient {
    client: Client,
    cfg: RealtorConfig,
}

impl RealtorClient {
    pub fn new(client: Client, cfg: RealtorConfig) -> Self {
        Self { client, cfg }
    }

    fn get(&self, path: &str, property_id: &str) -> Result<RequestBuilder, ProviderError> {
        let api_key = require_key(&self.cfg.api_key, "RAPIDAPI_KEY")?;
        let url = format!("{}{}", self.cfg.base_url.trim_end_matches('/'), path);

        Ok(self
            .client
            .get(url)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.cfg.host)
            .query(&[("property_id", property_id)]))
    }
}

impl ListingProvider for RealtorClient {
    fn similar_homes(&self, property_id: &str) -> Result<SimilarHomesResponse, ProviderError> {
        fetch_json(self.get("/properties/v2/list-similar-homes", property_id)?)
    }

    fn home_detail(&self, property_id: &str) -> Result<HomeDetailResponse, ProviderError> {
        fetch_json(self.get("/properties/v2/detail", property_id)?)
    }
}
