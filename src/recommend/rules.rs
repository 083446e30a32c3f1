//! Weather classification and the popularity threshold.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{ArtistProfile, TopArtists, Track},
};

pub const COLD_KEYWORDS: [&str; 4] = ["rain", "snow", "showers", "drizzle"];
pub const HOT_KEYWORDS: [&str; 4] = ["sunny", "cloud", "cloudy", "clear"];

/// Every n-th top track of an artist ends up in the playlist.
pub const TRACK_STEP: usize = 5;

/// Which side of the mean popularity a forecast asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Subdued weather: artists below the mean.
    Cold,
    /// Bright weather: artists at or above the mean.
    Hot,
}

impl Mood {
    pub fn playlist_name(&self) -> &'static str {
        match self {
            Mood::Cold => "Forecast Player: Grey Skies",
            Mood::Hot => "Forecast Player: Bright Skies",
        }
    }

    pub fn playlist_description(&self) -> &'static str {
        match self {
            Mood::Cold => "Lower-key picks from your top artists for rainy and snowy weather.",
            Mood::Hot => "Your biggest top artists for sunny and clear weather.",
        }
    }
}

/// Keyword sets and threshold comparison used to turn a forecast into an
/// artist selection. Defaults to the production rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRules {
    pub cold_keywords: Vec<String>,
    pub hot_keywords: Vec<String>,
    /// When set, the cold side also keeps artists exactly at the mean, so
    /// they land in both selections.
    pub cold_includes_mean: bool,
    pub track_step: usize,
}

impl Default for WeatherRules {
    fn default() -> Self {
        Self {
            cold_keywords: COLD_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            hot_keywords: HOT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            cold_includes_mean: false,
            track_step: TRACK_STEP,
        }
    }
}

impl WeatherRules {
    /// Classifies a forecast by case-sensitive substring match. Cold keywords
    /// are checked first and win when both sets match.
    pub fn classify(&self, forecast: &str) -> Result<Mood> {
        if self.cold_keywords.iter().any(|k| forecast.contains(k.as_str())) {
            return Ok(Mood::Cold);
        }
        if self.hot_keywords.iter().any(|k| forecast.contains(k.as_str())) {
            return Ok(Mood::Hot);
        }
        Err(Error::UnrecognizedWeather(forecast.to_string()))
    }

    fn keeps(&self, mood: Mood, popularity: u32, mean: f64) -> bool {
        let popularity = f64::from(popularity);
        match mood {
            Mood::Cold if self.cold_includes_mean => popularity <= mean,
            Mood::Cold => popularity < mean,
            Mood::Hot => popularity >= mean,
        }
    }

    /// Picks the artists on the mood's side of the mean.
    ///
    /// Returns the selection and whether it fell back to every artist because
    /// nothing passed the threshold.
    pub fn select_artists(&self, artists: &TopArtists, mood: Mood) -> (Vec<ArtistProfile>, bool) {
        let Some(mean) = mean_popularity(artists) else {
            return (Vec::new(), false);
        };

        let selected: Vec<ArtistProfile> = artists
            .values()
            .filter(|a| self.keeps(mood, a.popularity, mean))
            .cloned()
            .collect();

        if selected.is_empty() {
            (artists.values().cloned().collect(), true)
        } else {
            (selected, false)
        }
    }
}

/// Arithmetic mean of the artists' popularity, `None` for no artists.
pub fn mean_popularity(artists: &TopArtists) -> Option<f64> {
    if artists.is_empty() {
        return None;
    }
    let sum: u64 = artists.values().map(|a| u64::from(a.popularity)).sum();
    Some(sum as f64 / artists.len() as f64)
}

/// URIs of the tracks at positions 0, step, 2*step, ... of an artist's top
/// tracks. A step of 0 is treated as 1.
pub fn subsample_tracks(tracks: &[Track], step: usize) -> Vec<String> {
    tracks
        .iter()
        .step_by(step.max(1))
        .map(|t| t.uri.clone())
        .collect()
}
