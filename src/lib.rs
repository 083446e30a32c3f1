//! Forecast Player Library
//!
//! Builds Spotify playlists from a user's top artists, picking lower- or
//! higher-popularity artists depending on the weather forecast for a place.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the web server (login, callback, views)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error and outcome types
//! - `management` - Local token storage
//! - `recommend` - The weather playlist decision and orchestration
//! - `server` - axum server wiring
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `weather` - Geocoding and National Weather Service forecasts

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod recommend;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod weather;

pub use error::{Error, Outcome};

/// A convenient Result type alias for the binary and CLI layers.
///
/// Uses a boxed dynamic error so command handlers can mix library errors with
/// IO and parsing errors while keeping `Send + Sync` for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// ```
/// info!("Fetching forecast for {}", place);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// ```
/// success!("Playlist {} created", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable errors in the binary and CLI layers. Code after
/// this macro does not run.
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. an unreachable weather service or an
/// empty artist selection that falls back to all artists.
///
/// ```
/// warning!("Failed to reach NWS server: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
