use crate::{
    error::{Error, Result},
    types::{ArtistProfile, MeResponse, TopArtists, TopArtistsResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves the Spotify user id of the token owner.
    ///
    /// Unlike the weather lookups, failures here are never swallowed: a
    /// playlist cannot be created without the id.
    ///
    /// # Errors
    ///
    /// - `Error::RateLimited` on 429
    /// - `Error::Status` on any other non-success response
    /// - `Error::MissingField` if the body has no `id`
    pub async fn current_user_id(&self) -> Result<String> {
        let me: MeResponse = self.get("me", &[]).await?;
        me.id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::MissingField {
                endpoint: "me".to_string(),
                field: "id",
            })
    }

    /// Retrieves the user's top artists (Spotify's default window of 20),
    /// keyed by artist name.
    ///
    /// A missing or empty `items` list yields an empty map, not an error. If
    /// two artists share a name the later entry wins.
    pub async fn top_artists(&self) -> Result<TopArtists> {
        let response: TopArtistsResponse = self.get("me/top/artists", &[]).await?;

        Ok(response
            .items
            .unwrap_or_default()
            .into_iter()
            .map(ArtistProfile::from)
            .map(|artist| (artist.name.clone(), artist))
            .collect())
    }
}
