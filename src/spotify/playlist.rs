use crate::{
    error::Result,
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        GetUserPlaylistsResponse, Playlist, UserPlaylist,
    },
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Creates a new playlist under the given user's account.
    ///
    /// Every call creates a new playlist; existing playlists with the same
    /// name are left alone.
    pub async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<Playlist> {
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
        };
        self.post(&format!("users/{}/playlists", user_id), &body)
            .await
    }

    /// Appends track URIs to a playlist in a single request and returns the
    /// new snapshot id.
    pub async fn add_tracks(
        &self,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<AddTrackToPlaylistResponse> {
        let body = AddTrackToPlaylistRequest { uris };
        self.post(&format!("playlists/{}/tracks", playlist_id), &body)
            .await
    }

    /// Lists the current user's playlists (first page).
    pub async fn list_playlists(&self) -> Result<Vec<UserPlaylist>> {
        let response: GetUserPlaylistsResponse =
            self.get("me/playlists", &[("limit", "50")]).await?;
        Ok(response.items)
    }
}
