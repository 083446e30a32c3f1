use axum::{
    Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{spotify, types::SessionState, warning};

/// Starts a PKCE flow and redirects the browser to Spotify.
pub async fn login(Extension(shared_state): Extension<SessionState>) -> Response {
    match spotify::auth::begin(&shared_state).await {
        Ok(auth_url) => Redirect::to(&auth_url).into_response(),
        Err(e) => {
            warning!("Cannot start login: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h4>Login is not configured.</h4>"),
            )
                .into_response()
        }
    }
}
