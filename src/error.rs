//! Error taxonomy for the screener pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    /// Connection, timeout, non-2xx status, or body decode failure.
    /// Isolated per league: the run continues without that league's rows.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream reported a failure that is not the NO_DATA case.
    #[error("NatStat API error: {0}")]
    Api(String),

    /// The payload broke the expected nesting contract (a primitive where an
    /// object was expected). Surfaced loudly rather than masked.
    #[error("malformed forecast payload at '{path}': expected object, found {found}")]
    Shape { path: String, found: &'static str },

    #[error("history file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScreenerError {
    /// Whether this failure should skip the current league instead of
    /// aborting the whole run.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScreenerError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
