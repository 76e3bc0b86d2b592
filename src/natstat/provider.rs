use async_trait::async_trait;
use chrono::NaiveDate;

use super::models::ForecastResponse;
use crate::error::Result;

/// Source of daily forecast data for one league.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecasts for `sport` on `date`.
    async fn fetch_forecasts(&self, sport: &str, date: NaiveDate) -> Result<ForecastResponse>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
