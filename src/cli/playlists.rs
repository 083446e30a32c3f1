use tabled::Table;

use crate::{error, spotify::SpotifyClient, types::PlaylistTableRow};

use super::{load_token, spinner};

pub async fn playlists() {
    let token = load_token().await;

    let pb = spinner("Fetching playlists...");
    let result = SpotifyClient::new(&token).list_playlists().await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => {
            let rows: Vec<PlaylistTableRow> = playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    name: p.name,
                    tracks: p.tracks.map(|t| t.total).unwrap_or(0),
                    public: match p.public {
                        Some(true) => "yes".to_string(),
                        Some(false) => "no".to_string(),
                        None => "-".to_string(),
                    },
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to fetch playlists. Err: {}", e),
    }
}
