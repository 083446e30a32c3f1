//! # API Module
//!
//! HTTP handlers for the Forecast Player web server.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, the user's playlists (redirects to `/login` without
//!   a session)
//! - [`login`] - `GET /login`, starts the Spotify OAuth 2.0 PKCE flow
//! - [`callback`] - `GET /callback`, exchanges the authorization code for a
//!   token
//! - [`results_form`] / [`results`] - `GET`/`POST /results`, asks for a place
//!   and builds the weather playlist, answering with the JSON outcome
//! - [`health`] - `GET /health`, status and version
//!
//! All handlers share one session slot (`Extension<SessionState>`). The
//! access token is read from it per request and passed explicitly to the
//! recommendation code.

mod callback;
mod health;
mod login;
mod session;
mod views;

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use session::access_token;
pub use views::{ResultsForm, index, results, results_form};
