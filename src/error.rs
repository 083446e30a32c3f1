//! Error and outcome types shared by the weather, Spotify and recommendation
//! layers.

use serde::Serialize;

/// Errors raised by the library layers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Rate limited by Spotify, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("Response from {endpoint} is missing field `{field}`")]
    MissingField {
        endpoint: String,
        field: &'static str,
    },

    #[error("No forecast available for {0}")]
    NoForecast(String),

    #[error("No artists available")]
    NoArtists,

    #[error("Unrecognized weather condition: {0}")]
    UnrecognizedWeather(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal result of an operation, classified so callers can branch on the
/// failure kind without matching error variants.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Success(T),
    Retryable { retry_after_secs: u64 },
    Fatal { reason: String },
    EmptyResult { reason: String },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(Error::RateLimited { retry_after }) => Outcome::Retryable {
                retry_after_secs: retry_after,
            },
            Err(e @ Error::NoArtists) => Outcome::EmptyResult {
                reason: e.to_string(),
            },
            Err(e) => Outcome::Fatal {
                reason: e.to_string(),
            },
        }
    }
}
