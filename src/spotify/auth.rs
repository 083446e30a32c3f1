use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};

use crate::{
    config,
    error::{Error, Result},
    server::start_api_server,
    types::{PkceToken, SessionState, Token, TokenResponse},
    utils, warning,
};

/// Builds the Spotify authorization URL for a PKCE code challenge.
pub fn authorize_url(code_challenge: &str) -> Result<String> {
    let client_id = config::spotify_client_id()?;
    let url = Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config::spotify_redirect_uri().as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", config::spotify_scope().as_str()),
        ],
    )
    .map_err(|e| Error::Config(format!("Invalid SPOTIFY_API_AUTH_URL: {}", e)))?;

    Ok(url.to_string())
}

/// Starts a fresh PKCE flow: stores a new verifier in the session slot and
/// returns the authorization URL to send the user to.
pub async fn begin(shared_state: &SessionState) -> Result<String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let auth_url = authorize_url(&code_challenge)?;

    let mut lock = shared_state.lock().await;
    *lock = Some(PkceToken {
        code_verifier,
        token: None,
    });

    Ok(auth_url)
}

/// Runs the complete OAuth 2.0 PKCE flow from the command line.
///
/// 1. Generates the PKCE verifier and challenge
/// 2. Starts the local server, whose `/callback` route completes the exchange
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to store a token
///
/// The callback handler persists the token, so later CLI commands and server
/// runs can reuse it.
pub async fn auth(shared_state: SessionState) -> Result<Token> {
    let auth_url = begin(&shared_state).await?;

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    wait_for_token(shared_state)
        .await
        .ok_or_else(|| Error::Auth("authentication failed or timed out".to_string()))
}

/// Polls the session slot once a second for up to 60 seconds.
async fn wait_for_token(shared_state: SessionState) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may omit the refresh token from the response, in which case the
/// one passed in is kept.
pub async fn refresh_token(refresh_token: &str) -> Result<Token> {
    let client_id = config::spotify_client_id()?;
    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::Auth(format!(
            "token refresh failed with status {}",
            res.status().as_u16()
        )));
    }

    let json: TokenResponse = res.json().await?;
    Ok(into_token(json, Some(refresh_token)))
}

/// Exchanges an authorization code for an access token using the PKCE
/// verifier generated at the start of the flow.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri();

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::Auth(format!(
            "code exchange failed with status {}",
            res.status().as_u16()
        )));
    }

    let json: TokenResponse = res.json().await?;
    Ok(into_token(json, None))
}

fn into_token(response: TokenResponse, previous_refresh: Option<&str>) -> Token {
    Token {
        access_token: response.access_token,
        refresh_token: response
            .refresh_token
            .or_else(|| previous_refresh.map(str::to_string))
            .unwrap_or_default(),
        scope: response.scope.unwrap_or_default(),
        expires_in: response.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_keeps_previous_refresh_token() {
        let response = TokenResponse {
            access_token: "new_access".to_string(),
            refresh_token: None,
            scope: Some("user-top-read".to_string()),
            expires_in: Some(3600),
        };

        let token = into_token(response, Some("old_refresh"));
        assert_eq!(token.access_token, "new_access");
        assert_eq!(token.refresh_token, "old_refresh");
        assert_eq!(token.scope, "user-top-read");
    }

    #[test]
    fn test_rotated_refresh_token_wins() {
        let response = TokenResponse {
            access_token: "new_access".to_string(),
            refresh_token: Some("rotated".to_string()),
            scope: None,
            expires_in: None,
        };

        let token = into_token(response, Some("old_refresh"));
        assert_eq!(token.refresh_token, "rotated");
        assert_eq!(token.expires_in, 3600);
    }
}
