use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Session slot shared between the HTTP handlers and the CLI auth flow.
pub type SessionState = Arc<Mutex<Option<PkceToken>>>;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

// Weather

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsProperties {
    pub forecast: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    #[serde(default)]
    pub name: Option<String>,
    pub short_forecast: String,
}

#[derive(Tabled)]
pub struct ForecastTableRow {
    pub period: String,
    pub forecast: String,
}

// Spotify

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopArtistsResponse {
    #[serde(default)]
    pub items: Option<Vec<TopArtistItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopArtistItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Option<Followers>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub followers: u64,
}

impl From<TopArtistItem> for ArtistProfile {
    fn from(item: TopArtistItem) -> Self {
        ArtistProfile {
            id: item.id,
            name: item.name,
            popularity: item.popularity,
            followers: item.followers.map(|f| f.total).unwrap_or(0),
        }
    }
}

/// Top artists keyed by artist name.
pub type TopArtists = BTreeMap<String, ArtistProfile>;

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub popularity: u32,
    pub followers: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetUserPlaylistsResponse {
    #[serde(default)]
    pub items: Vec<UserPlaylist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub tracks: Option<PlaylistTracksRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
    pub public: String,
}
