pub mod client;
pub mod models;
pub mod provider;

pub use client::NatStatClient;
pub use models::{ApiError, ForecastResponse};
pub use provider::ForecastProvider;
