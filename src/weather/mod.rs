//! # Weather Module
//!
//! Resolves a free-text place name to the short forecast of the nearest
//! forecast period, using Nominatim (OpenStreetMap) for geocoding and the
//! National Weather Service API for forecasts.
//!
//! ```text
//! place name
//!     ↓  geocode      GET {geocode}/search?q=<place>&format=json&limit=1
//! coordinates
//!     ↓  gridpoint    GET {nws}/points/{lat},{lon}  -> properties.forecast
//! forecast url
//!     ↓  forecast     GET <forecast url>            -> properties.periods[]
//! "light rain"
//! ```
//!
//! Geocoding failures (transport or non-2xx) propagate as errors. Everything
//! past geocoding is best effort: failures are logged as warnings and turn
//! into `None` ("no data"), which callers must treat as terminal for that
//! request.

mod forecast;
mod geocode;

use std::time::Duration;

use reqwest::Client;

use crate::{config, error::Result};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the geocoding and forecast services.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    geocode_url: String,
    nws_url: String,
}

impl WeatherClient {
    /// Client pointing at the configured Nominatim and NWS endpoints.
    pub fn new() -> Result<Self> {
        Self::with_base_urls(&config::geocode_apiurl(), &config::weather_apiurl())
    }

    pub fn with_base_urls(geocode_url: &str, nws_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(config::weather_user_agent())
            .build()?;

        Ok(Self {
            client,
            geocode_url: geocode_url.trim_end_matches('/').to_string(),
            nws_url: nws_url.trim_end_matches('/').to_string(),
        })
    }
}
