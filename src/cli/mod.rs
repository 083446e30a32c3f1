//! # CLI Module
//!
//! Command implementations for the `forecast-player` binary.
//!
//! - [`auth`] - OAuth 2.0 PKCE login through the browser
//! - [`serve`] - run the web server
//! - [`forecast`] - show the forecast periods for a place
//! - [`artists`] - show top artists with popularity and the current mean
//! - [`playlists`] - list the user's playlists
//! - [`playlist`] - build a weather playlist for a place
//!
//! Commands that talk to Spotify load the persisted token (refreshing it when
//! needed) and exit with an error pointing at `forecast-player auth` when
//! there is none.

mod artists;
mod auth;
mod forecast;
mod playlist;
mod playlists;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::TokenManager};

pub use artists::artists;
pub use auth::auth;
pub use forecast::forecast;
pub use playlist::playlist;
pub use playlists::playlists;
pub use serve::serve;

async fn load_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run forecast-player auth\n Error: {}",
                e
            );
        }
    };
    token_mgr.get_valid_token().await
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
