use forecast_player::Error;
use forecast_player::recommend::*;
use forecast_player::types::{ArtistProfile, TopArtists, Track};

// Helper function to build a top-artist map from (name, popularity) pairs
fn create_artists(entries: &[(&str, u32)]) -> TopArtists {
    entries
        .iter()
        .enumerate()
        .map(|(i, (name, popularity))| {
            (
                name.to_string(),
                ArtistProfile {
                    id: format!("artist{}", i),
                    name: name.to_string(),
                    popularity: *popularity,
                    followers: 1000,
                },
            )
        })
        .collect()
}

fn create_tracks(count: usize) -> Vec<Track> {
    (0..count)
        .map(|i| Track {
            id: Some(format!("t{}", i)),
            name: format!("Track {}", i),
            uri: format!("spotify:track:t{}", i),
        })
        .collect()
}

fn names(artists: &[ArtistProfile]) -> Vec<&str> {
    artists.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn test_mean_popularity() {
    let artists = create_artists(&[("A", 40), ("B", 60), ("C", 80)]);
    assert_eq!(mean_popularity(&artists), Some(60.0));

    let artists = create_artists(&[("A", 1), ("B", 2)]);
    assert_eq!(mean_popularity(&artists), Some(1.5));

    assert_eq!(mean_popularity(&TopArtists::new()), None);
}

#[test]
fn test_classify_cold() {
    let rules = WeatherRules::default();
    assert_eq!(rules.classify("light rain and wind").unwrap(), Mood::Cold);
    assert_eq!(rules.classify("chance snow showers").unwrap(), Mood::Cold);
    assert_eq!(rules.classify("patchy drizzle").unwrap(), Mood::Cold);
}

#[test]
fn test_classify_hot() {
    let rules = WeatherRules::default();
    assert_eq!(rules.classify("mostly sunny").unwrap(), Mood::Hot);
    assert_eq!(rules.classify("partly cloudy").unwrap(), Mood::Hot);
    assert_eq!(rules.classify("clear").unwrap(), Mood::Hot);
}

#[test]
fn test_classify_cold_wins_over_hot() {
    let rules = WeatherRules::default();
    assert_eq!(
        rules.classify("rain showers then mostly sunny").unwrap(),
        Mood::Cold
    );
}

#[test]
fn test_classify_unrecognized_keeps_forecast() {
    let rules = WeatherRules::default();
    match rules.classify("foggy") {
        Err(Error::UnrecognizedWeather(forecast)) => assert_eq!(forecast, "foggy"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_classify_is_case_sensitive() {
    let rules = WeatherRules::default();
    assert!(rules.classify("Light Rain").is_err());
}

#[test]
fn test_classify_with_custom_keywords() {
    let rules = WeatherRules {
        cold_keywords: vec!["fog".to_string()],
        hot_keywords: vec!["haze".to_string()],
        ..WeatherRules::default()
    };
    assert_eq!(rules.classify("areas of fog").unwrap(), Mood::Cold);
    assert_eq!(rules.classify("haze").unwrap(), Mood::Hot);
    assert!(rules.classify("light rain").is_err());
}

#[test]
fn test_cold_selects_strictly_below_mean() {
    let rules = WeatherRules::default();
    let artists = create_artists(&[("A", 40), ("B", 60), ("C", 80)]);

    let (selected, fell_back) = rules.select_artists(&artists, Mood::Cold);
    assert_eq!(names(&selected), vec!["A"]);
    assert!(!fell_back);
}

#[test]
fn test_hot_selects_at_or_above_mean() {
    let rules = WeatherRules::default();
    let artists = create_artists(&[("A", 40), ("B", 60), ("C", 80)]);

    let (selected, fell_back) = rules.select_artists(&artists, Mood::Hot);
    assert_eq!(names(&selected), vec!["B", "C"]);
    assert!(!fell_back);
}

#[test]
fn test_selections_partition_artists() {
    let rules = WeatherRules::default();
    let artists = create_artists(&[("A", 12), ("B", 55), ("C", 55), ("D", 91), ("E", 30)]);

    let (cold, _) = rules.select_artists(&artists, Mood::Cold);
    let (hot, _) = rules.select_artists(&artists, Mood::Hot);

    assert_eq!(cold.len() + hot.len(), artists.len());
    assert!(cold.iter().all(|a| !hot.contains(a)));
}

#[test]
fn test_cold_including_mean() {
    let rules = WeatherRules {
        cold_includes_mean: true,
        ..WeatherRules::default()
    };
    let artists = create_artists(&[("A", 40), ("B", 60), ("C", 80)]);

    let (selected, _) = rules.select_artists(&artists, Mood::Cold);
    assert_eq!(names(&selected), vec!["A", "B"]);
}

#[test]
fn test_empty_selection_falls_back_to_all_artists() {
    let rules = WeatherRules::default();
    let artists = create_artists(&[("A", 50), ("B", 50), ("C", 50)]);

    let (selected, fell_back) = rules.select_artists(&artists, Mood::Cold);
    assert!(fell_back);
    assert_eq!(names(&selected), vec!["A", "B", "C"]);
}

#[test]
fn test_select_from_no_artists() {
    let rules = WeatherRules::default();
    let (selected, fell_back) = rules.select_artists(&TopArtists::new(), Mood::Hot);
    assert!(selected.is_empty());
    assert!(!fell_back);
}

#[test]
fn test_subsample_every_fifth_track() {
    let uris = subsample_tracks(&create_tracks(10), TRACK_STEP);
    assert_eq!(uris, vec!["spotify:track:t0", "spotify:track:t5"]);

    let uris = subsample_tracks(&create_tracks(11), TRACK_STEP);
    assert_eq!(
        uris,
        vec!["spotify:track:t0", "spotify:track:t5", "spotify:track:t10"]
    );
}

#[test]
fn test_subsample_short_and_empty_lists() {
    assert_eq!(
        subsample_tracks(&create_tracks(3), TRACK_STEP),
        vec!["spotify:track:t0"]
    );
    assert!(subsample_tracks(&create_tracks(0), TRACK_STEP).is_empty());
}

#[test]
fn test_subsample_zero_step_keeps_everything() {
    assert_eq!(subsample_tracks(&create_tracks(3), 0).len(), 3);
}

#[test]
fn test_playlist_names_differ_by_mood() {
    assert_ne!(Mood::Cold.playlist_name(), Mood::Hot.playlist_name());
    assert_ne!(
        Mood::Cold.playlist_description(),
        Mood::Hot.playlist_description()
    );
}
