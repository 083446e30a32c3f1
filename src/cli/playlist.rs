use crate::{Outcome, error, info, recommend, success, warning};

use super::{load_token, spinner};

pub async fn playlist(place: String) {
    let token = load_token().await;

    info!("Building weather playlist for {}", place);
    let pb = spinner("Checking the weather and your top artists...");
    let outcome = recommend::weather_playlist(&token, &place).await;
    pb.finish_and_clear();

    match outcome {
        Outcome::Success(result) => {
            if result.fell_back {
                warning!("Threshold matched no artists, all top artists were used.");
            }
            success!(
                "Created \"{}\" with {} tracks from {} ({:?} weather: \"{}\")",
                result.playlist.name,
                result.track_uris.len(),
                result.artists.join(", "),
                result.mood,
                result.forecast
            );
        }
        Outcome::Retryable { retry_after_secs } => {
            error!(
                "Spotify rate limit reached. Try again in {} seconds.",
                retry_after_secs
            )
        }
        Outcome::EmptyResult { reason } => warning!("{}", reason),
        Outcome::Fatal { reason } => error!("{}", reason),
    }
}
