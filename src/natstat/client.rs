use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use super::models::ForecastResponse;
use super::provider::ForecastProvider;
use crate::error::Result;

/// Client for the NatStat v3 statistics API.
///
/// One GET per (league, date); the API key is a path segment of the URL
/// template.
#[derive(Clone)]
pub struct NatStatClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NatStatClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(NatStatClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl ForecastProvider for NatStatClient {
    fn name(&self) -> &str {
        "NatStat"
    }

    async fn fetch_forecasts(&self, sport: &str, date: NaiveDate) -> Result<ForecastResponse> {
        let url = format!("{}/{}/forecasts/{}/{}", self.base_url, self.api_key, sport, date);
        debug!("Fetching forecasts for {sport} ({date})");

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let parsed = resp.json::<ForecastResponse>().await?;
        Ok(parsed)
    }
}
