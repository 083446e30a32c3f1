use axum::{
    Extension, Form,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    Outcome, recommend, spotify::SpotifyClient, types::SessionState, utils::escape_html, warning,
};

use super::session::access_token;

#[derive(Debug, Deserialize)]
pub struct ResultsForm {
    pub place: String,
}

/// Lists the user's playlists, or sends them to `/login` first.
pub async fn index(Extension(shared_state): Extension<SessionState>) -> Response {
    let Some(token) = access_token(&shared_state).await else {
        return Redirect::to("/login").into_response();
    };

    let playlists = match SpotifyClient::new(&token).list_playlists().await {
        Ok(playlists) => playlists,
        Err(e) => {
            warning!("Failed to load playlists: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Html("<h4>Could not load your playlists.</h4><p><a href=\"/login\">Log in again</a></p>".to_string()),
            )
                .into_response();
        }
    };

    let rows: String = playlists
        .iter()
        .map(|p| {
            format!(
                "<li>{} <small>({} tracks)</small></li>",
                escape_html(&p.name),
                p.tracks.as_ref().map(|t| t.total).unwrap_or(0)
            )
        })
        .collect();

    Html(format!(
        "<h2>Your playlists</h2><ul>{}</ul><p><a href=\"/results\">Make a weather playlist</a></p>",
        rows
    ))
    .into_response()
}

pub async fn results_form() -> Html<&'static str> {
    Html(
        "<h2>Weather playlist</h2>\
         <form method=\"post\" action=\"/results\">\
         <input name=\"place\" placeholder=\"Seattle, WA\" required>\
         <button type=\"submit\">Create playlist</button>\
         </form>",
    )
}

/// Runs the weather playlist for the submitted place and returns the
/// outcome as JSON.
pub async fn results(
    Extension(shared_state): Extension<SessionState>,
    Form(form): Form<ResultsForm>,
) -> Response {
    let place = form.place.trim();
    if place.is_empty() {
        return (StatusCode::BAD_REQUEST, "place must not be empty").into_response();
    }

    let Some(token) = access_token(&shared_state).await else {
        return Redirect::to("/login").into_response();
    };

    let outcome = recommend::weather_playlist(&token, place).await;
    let status = match &outcome {
        Outcome::Success(_) => StatusCode::CREATED,
        Outcome::Retryable { .. } => StatusCode::TOO_MANY_REQUESTS,
        Outcome::EmptyResult { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Outcome::Fatal { .. } => StatusCode::BAD_GATEWAY,
    };

    (status, Json(outcome)).into_response()
}
