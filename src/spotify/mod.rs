//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API that Forecast Player
//! needs. Every call is bearer-authenticated with the access token the
//! [`SpotifyClient`] was built with; the token is passed in explicitly by the
//! caller rather than read from any global session.
//!
//! ## API Coverage
//!
//! - `GET me` - current user id ([`profile`])
//! - `GET me/top/artists` - top artists ([`profile`])
//! - `GET artists/{id}/top-tracks` - top tracks per artist ([`artists`])
//! - `POST users/{user_id}/playlists` - create playlist ([`playlist`])
//! - `POST playlists/{id}/tracks` - add tracks ([`playlist`])
//! - `GET me/playlists` - playlists listing ([`playlist`])
//! - `POST /api/token` - code exchange and refresh ([`auth`])
//!
//! ## Rate Limiting
//!
//! A `429 Too Many Requests` from any endpoint is surfaced as
//! [`Error::RateLimited`] carrying the `Retry-After` value in seconds. It is
//! never retried here.

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod profile;

use reqwest::{Client, RequestBuilder, Response, StatusCode, header::RETRY_AFTER};
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config,
    error::{Error, Result},
};

/// Spotify Web API client bound to one access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
    token: String,
}

impl SpotifyClient {
    pub fn new(token: &str) -> Self {
        Self::with_api_url(&config::spotify_apiurl(), token)
    }

    pub fn with_api_url(api_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let request = self.client.get(self.url(path)).query(query);
        self.send(path, request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.client.post(self.url(path)).json(body);
        self.send(path, request).await
    }

    async fn send<T: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<T> {
        let response = request.bearer_auth(&self.token).send().await?;
        let response = check_status(path, response)?;
        Ok(response.json::<T>().await?)
    }
}

/// Maps a non-success response to an error, pulling `Retry-After` out of 429s.
fn check_status(endpoint: &str, response: Response) -> Result<Response> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);
        return Err(Error::RateLimited { retry_after });
    }

    if !status.is_success() {
        return Err(Error::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
