use std::collections::HashMap;

use axum::{Extension, extract::Query, response::Html};

use crate::{management::TokenManager, spotify, types::SessionState, warning};

/// Completes the PKCE flow started by `/login` or `forecast-player auth`.
///
/// Exchanges the authorization code, stores the token in the session slot
/// and persists it for later runs.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<SessionState>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        warning!("Authorization denied: {}", error);
        return Html("<h4>Login failed.</h4><p><a href=\"/login\">Try again</a></p>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(pkce_state) = state.as_mut() else {
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    let verifier = pkce_state.code_verifier.clone();

    match spotify::auth::exchange_code_pkce(code, &verifier).await {
        Ok(token) => {
            if let Err(e) = TokenManager::new(token.clone()).persist().await {
                warning!("Failed to save token to cache: {}", e);
            }
            pkce_state.token = Some(token);
            Html(
                "<h2>Authentication successful.</h2>\
                 <p><a href=\"/\">Continue</a> or close this browser window.</p>",
            )
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4><p><a href=\"/login\">Try again</a></p>")
        }
    }
}
