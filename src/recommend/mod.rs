//! # Recommendation Module
//!
//! Turns a place name and a Spotify access token into a new playlist:
//!
//! ```text
//! forecast for place ──┐
//!                      ├─> classify (cold / hot) ─> threshold on mean popularity
//! top artists ─────────┘                                   ↓
//!                                   top tracks per artist, every 5th track
//!                                                          ↓
//!                                        create playlist + add tracks (one call)
//! ```
//!
//! All calls run one after another. Nothing is rolled back: when adding tracks
//! fails the created playlist stays behind, and calling twice creates two
//! playlists.

mod rules;

pub use rules::{
    COLD_KEYWORDS, HOT_KEYWORDS, Mood, TRACK_STEP, WeatherRules, mean_popularity,
    subsample_tracks,
};

use serde::Serialize;

use crate::{
    config,
    error::{Error, Outcome, Result},
    info,
    spotify::SpotifyClient,
    types::Playlist,
    warning,
    weather::WeatherClient,
};

/// Result of one weather playlist run.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherPlaylist {
    pub playlist: Playlist,
    pub place: String,
    pub forecast: String,
    pub mood: Mood,
    pub mean_popularity: f64,
    pub artists: Vec<String>,
    /// The threshold selected nobody, so every top artist was used.
    pub fell_back: bool,
    pub track_uris: Vec<String>,
    /// Snapshot returned by the add-tracks call; `None` when there were no
    /// tracks to add.
    pub snapshot_id: Option<String>,
}

pub struct Recommender {
    spotify: SpotifyClient,
    weather: WeatherClient,
    rules: WeatherRules,
    market: String,
}

impl Recommender {
    pub fn new(spotify: SpotifyClient, weather: WeatherClient) -> Self {
        Self {
            spotify,
            weather,
            rules: WeatherRules::default(),
            market: config::spotify_market(),
        }
    }

    pub fn with_rules(mut self, rules: WeatherRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_market(mut self, market: &str) -> Self {
        self.market = market.to_string();
        self
    }

    /// Builds a weather playlist for `place`.
    ///
    /// # Errors
    ///
    /// - `Error::NoArtists` when the user has no top artists; no playlist is
    ///   created
    /// - `Error::NoForecast` when the weather service has no data for `place`
    /// - `Error::UnrecognizedWeather` with the raw forecast when neither
    ///   keyword set matches
    /// - `Error::RateLimited` and other Spotify errors from any step
    pub async fn generate(&self, place: &str) -> Result<WeatherPlaylist> {
        let forecast = self.weather.short_forecast(place).await?;
        let artists = self.spotify.top_artists().await?;

        if artists.is_empty() {
            return Err(Error::NoArtists);
        }

        let mean = mean_popularity(&artists).ok_or(Error::NoArtists)?;
        let forecast = forecast.ok_or_else(|| Error::NoForecast(place.to_string()))?;
        let mood = self.rules.classify(&forecast)?;

        let (selected, fell_back) = self.rules.select_artists(&artists, mood);
        if fell_back {
            warning!(
                "No artists on the {:?} side of mean popularity {:.1}, using all {} top artists",
                mood,
                mean,
                artists.len()
            );
        }

        info!(
            "Forecast for {} is \"{}\", picking {} of {} artists",
            place,
            forecast,
            selected.len(),
            artists.len()
        );

        let user_id = self.spotify.current_user_id().await?;
        let playlist = self
            .spotify
            .create_playlist(
                &user_id,
                mood.playlist_name(),
                mood.playlist_description(),
                false,
            )
            .await?;

        let mut track_uris = Vec::new();
        for artist in &selected {
            let tracks = self.spotify.top_tracks(&artist.id, &self.market).await?;
            track_uris.extend(subsample_tracks(&tracks, self.rules.track_step));
        }

        let snapshot_id = if track_uris.is_empty() {
            warning!("No tracks found for playlist {}", playlist.name);
            None
        } else {
            let added = self
                .spotify
                .add_tracks(&playlist.id, track_uris.clone())
                .await?;
            Some(added.snapshot_id)
        };

        Ok(WeatherPlaylist {
            playlist,
            place: place.to_string(),
            forecast,
            mood,
            mean_popularity: mean,
            artists: selected.into_iter().map(|a| a.name).collect(),
            fell_back,
            track_uris,
            snapshot_id,
        })
    }

    /// Same as [`Recommender::generate`], classified into an [`Outcome`].
    pub async fn run(&self, place: &str) -> Outcome<WeatherPlaylist> {
        self.generate(place).await.into()
    }
}

/// Builds a weather playlist for `place` with the configured endpoints and
/// the caller's access token.
pub async fn weather_playlist(token: &str, place: &str) -> Outcome<WeatherPlaylist> {
    let weather = match WeatherClient::new() {
        Ok(w) => w,
        Err(e) => return Err::<WeatherPlaylist, _>(e).into(),
    };
    Recommender::new(SpotifyClient::new(token), weather)
        .run(place)
        .await
}
