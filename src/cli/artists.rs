use tabled::Table;

use crate::{
    error, info, recommend::mean_popularity, spotify::SpotifyClient, types::ArtistTableRow,
    warning,
};

use super::{load_token, spinner};

/// Shows the user's top artists, most popular first, and their mean
/// popularity.
pub async fn artists() {
    let token = load_token().await;

    let pb = spinner("Fetching top artists...");
    let result = SpotifyClient::new(&token).top_artists().await;
    pb.finish_and_clear();

    let artists = match result {
        Ok(a) => a,
        Err(e) => error!("Failed to fetch top artists. Err: {}", e),
    };

    let Some(mean) = mean_popularity(&artists) else {
        warning!("Spotify returned no top artists.");
        return;
    };

    let mut sorted: Vec<_> = artists.into_values().collect();
    sorted.sort_by(|a, b| b.popularity.cmp(&a.popularity).then(a.name.cmp(&b.name)));

    let rows: Vec<ArtistTableRow> = sorted
        .into_iter()
        .map(|a| ArtistTableRow {
            name: a.name,
            popularity: a.popularity,
            followers: a.followers,
        })
        .collect();

    println!("{}", Table::new(rows));
    info!("Mean popularity: {:.1}", mean);
}
