use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Envelope of one NatStat v3 forecasts response.
///
/// Only the envelope is typed; each game forecast stays a raw JSON value and
/// is traversed with the safe accessor, since its nesting is optional-field
/// heavy and varies by sport.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Upstream encodes failure as the literal string "0".
    #[serde(default)]
    pub success: Value,
    pub error: Option<ApiError>,
    /// Forecasts keyed by game id. BTreeMap keeps iteration order stable
    /// across runs.
    pub forecasts: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub detail: String,
}

impl ForecastResponse {
    /// Whether upstream flagged the request as failed.
    pub fn is_failure(&self) -> bool {
        self.success.as_str() == Some("0")
    }
}
