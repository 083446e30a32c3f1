use crate::{
    error::Result,
    types::{TopTracksResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves an artist's top tracks for a market, in Spotify's order.
    ///
    /// # Arguments
    ///
    /// * `artist_id` - Spotify ID of the artist
    /// * `market` - ISO 3166-1 alpha-2 country code, e.g. `US`
    ///
    /// # Example
    ///
    /// ```
    /// let tracks = client.top_tracks("4NHQUGzhtTLFvgF5SZesLK", "US").await?;
    /// println!("Found {} tracks", tracks.len());
    /// ```
    pub async fn top_tracks(&self, artist_id: &str, market: &str) -> Result<Vec<Track>> {
        let path = format!("artists/{}/top-tracks", artist_id);
        let response: TopTracksResponse = self.get(&path, &[("market", market)]).await?;
        Ok(response.tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_top_tracks_for_market() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artists/a1/top-tracks"))
            .and(query_param("market", "US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tracks": [
                    {"id": "t1", "name": "Habits", "uri": "spotify:track:t1"},
                    {"id": "t2", "name": "Talking Body", "uri": "spotify:track:t2"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::with_api_url(&mock_server.uri(), "test_token");
        let tracks = client.top_tracks("a1", "US").await.unwrap();

        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].uri, "spotify:track:t1");
    }

    #[tokio::test]
    async fn test_top_tracks_unknown_artist() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artists/missing/top-tracks"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = SpotifyClient::with_api_url(&mock_server.uri(), "test_token");
        let result = client.top_tracks("missing", "US").await;
        assert!(matches!(result, Err(Error::Status { status: 404, .. })));
    }
}
