//! Configuration management for Forecast Player.
//!
//! Values come from environment variables, optionally loaded from a `.env`
//! file. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)
//!
//! Only the Spotify client id has no default.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_SCOPE: &str = "user-top-read playlist-read-private playlist-read-collaborative playlist-modify-private playlist-modify-public";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_GEOCODE_API_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.weather.gov";
pub const DEFAULT_WEATHER_USER_AGENT: &str = "Forecast Player";

/// Loads environment variables from `.env` files.
///
/// The working directory `.env` is read first, then the one in the platform
/// specific local data directory:
/// - Linux: `~/.local/share/forecast-player/.env`
/// - macOS: `~/Library/Application Support/forecast-player/.env`
/// - Windows: `%LOCALAPPDATA%/forecast-player/.env`
///
/// Variables already present in the environment are never overwritten. A
/// missing file is not an error; a file that cannot be parsed is.
pub async fn load_env() -> Result<()> {
    dotenv::dotenv().ok();

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| Error::Config(e.to_string()))?;
    }
    Ok(())
}

/// Root directory for everything the application stores locally.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("forecast-player");
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required(key: &str) -> Result<String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("{} must be set", key)))
}

/// Address the HTTP server binds to, e.g. `127.0.0.1:5000`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client id of the registered Spotify application.
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Callback URL registered with the Spotify application. Defaults to the
/// `/callback` route of the local server.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| format!("http://{}/callback", server_addr()))
}

pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL)
}

pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Base URL of the versioned Spotify Web API.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Market used for top-track lookups.
pub fn spotify_market() -> String {
    var_or("SPOTIFY_MARKET", DEFAULT_MARKET)
}

pub fn geocode_apiurl() -> String {
    var_or("GEOCODE_API_URL", DEFAULT_GEOCODE_API_URL)
}

pub fn weather_apiurl() -> String {
    var_or("WEATHER_API_URL", DEFAULT_WEATHER_API_URL)
}

/// Both Nominatim and the NWS reject requests without a `User-Agent`.
pub fn weather_user_agent() -> String {
    var_or("WEATHER_USER_AGENT", DEFAULT_WEATHER_USER_AGENT)
}
