//! Catalog aggregation: raw item sequence in, `{tracks, artists}` out.

use crate::types::{Artist, Catalog, RawItem, Track};
use crate::{genre, title, views};
use std::collections::HashMap;

/// Fixed values substituted into generated tracks and artists.
///
/// These were constants in earlier revisions; carrying them as configuration
/// lets callers and tests swap them without touching the aggregation logic.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Tempo assigned to every track; audio is never analyzed here
    pub default_bpm: u32,
    /// Biography text for every artist entry
    pub biography: String,
    /// Profile image URL for every artist entry
    pub image_url: String,
    /// Avatar image URL for every artist entry
    pub avatar_url: String,
    /// Country label for every artist entry
    pub country: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_bpm: 128,
            biography: "Electronic music producer signed to World Studio Records.".to_string(),
            image_url: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400"
                .to_string(),
            avatar_url: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=200"
                .to_string(),
            country: "🌍 Global".to_string(),
        }
    }
}

/// Number of genre labels kept per artist.
const GENRE_LIMIT: usize = 2;

#[derive(Debug, Default)]
struct ArtistAccumulator {
    track_count: u32,
    // First-appearance order, deduplicated. Truncated to GENRE_LIMIT at
    // conversion time.
    genres: Vec<String>,
    total_views: u64,
}

/// Build the catalog from an ordered raw item sequence.
///
/// Items are processed in extraction order: each becomes a [`Track`] with a
/// 1-based `number`, and its parsed artist accumulates a track count, a
/// genre set, and a running view total. Artists appear in the output in
/// order of first appearance. The whole pass is a pure function of the item
/// sequence and the fixed lookup tables; running it twice on the same input
/// yields identical output.
#[must_use]
pub fn build_catalog(items: &[RawItem], config: &CatalogConfig) -> Catalog {
    let mut tracks = Vec::with_capacity(items.len());
    let mut order: Vec<String> = Vec::new();
    let mut accumulators: HashMap<String, ArtistAccumulator> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        let (artist, track_title) = title::split_artist_title(&item.title);
        let track_genre = genre::classify(&item.title);
        let (view_count, plays) = views::normalize(&item.view_count_text);

        tracks.push(Track {
            number: index as u32 + 1,
            title: track_title,
            artist: artist.clone(),
            genre: track_genre.to_string(),
            date: text_or(&item.published_time, "Unknown"),
            plays,
            duration: text_or(&item.duration_text, "0:00"),
            bpm: config.default_bpm,
            artwork: item.thumbnail_url.clone(),
            video_id: item.video_id.clone(),
        });

        if !accumulators.contains_key(&artist) {
            order.push(artist.clone());
        }
        let accumulator = accumulators.entry(artist).or_default();
        accumulator.track_count += 1;
        if !accumulator.genres.iter().any(|g| g == track_genre) {
            accumulator.genres.push(track_genre.to_string());
        }
        // A view count that failed to parse contributes 0 to the total.
        accumulator.total_views += view_count;
    }

    let artists = order
        .into_iter()
        .map(|name| {
            let mut accumulator = accumulators.remove(&name).unwrap_or_default();
            accumulator.genres.truncate(GENRE_LIMIT);
            Artist {
                name,
                genres: accumulator.genres,
                bio: config.biography.clone(),
                image: config.image_url.clone(),
                avatar: config.avatar_url.clone(),
                tracks: accumulator.track_count,
                followers: format_followers(accumulator.total_views),
                streams: format_streams(accumulator.total_views),
                country: config.country.clone(),
            }
        })
        .collect();

    Catalog { tracks, artists }
}

fn text_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

// The artist-level counters scale differently from the per-track display
// rule, and the two branches below differ from each other as well. The
// factors are part of the published document; do not unify them with
// `views::format_play_count`.
fn format_followers(total_views: u64) -> String {
    if total_views >= 1_000_000 {
        format!("{:.0}K", total_views as f64 / 1_000_000.0)
    } else {
        format!("{:.0}K", total_views as f64 / 1_000.0)
    }
}

fn format_streams(total_views: u64) -> String {
    if total_views >= 1_000_000 {
        format!("{:.0}M", total_views as f64 / 100_000.0)
    } else {
        format!("{:.0}M", total_views as f64 / 10_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, views: &str) -> RawItem {
        RawItem {
            title: title.to_string(),
            video_id: "vid".to_string(),
            published_time: "1 week ago".to_string(),
            view_count_text: views.to_string(),
            thumbnail_url: "https://example.com/t.jpg".to_string(),
            duration_text: "3:45".to_string(),
        }
    }

    #[test]
    fn test_tracks_numbered_in_order() {
        let items = vec![
            item("A - One", "10 views"),
            item("B - Two", "20 views"),
            item("C - Three", "30 views"),
        ];
        let catalog = build_catalog(&items, &CatalogConfig::default());

        let numbers: Vec<u32> = catalog.tracks.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(catalog.tracks[1].title, "Two");
        assert_eq!(catalog.tracks[1].artist, "B");
    }

    #[test]
    fn test_artist_aggregation_below_million() {
        let items = vec![
            item("Same Artist - One", "100,000 views"),
            item("Same Artist - Two", "200,000 views"),
            item("Same Artist - Three", "50,000 views"),
        ];
        let catalog = build_catalog(&items, &CatalogConfig::default());

        assert_eq!(catalog.artists.len(), 1);
        let artist = &catalog.artists[0];
        assert_eq!(artist.name, "Same Artist");
        assert_eq!(artist.tracks, 3);
        // Total 350,000 is below the million threshold: /1e3 and /1e4.
        assert_eq!(artist.followers, "350K");
        assert_eq!(artist.streams, "35M");
    }

    #[test]
    fn test_artist_aggregation_above_million() {
        let items = vec![
            item("Big Artist - One", "2,000,000 views"),
            item("Big Artist - Two", "1,000,000 views"),
        ];
        let catalog = build_catalog(&items, &CatalogConfig::default());

        let artist = &catalog.artists[0];
        // Total 3,000,000 crosses the threshold: /1e6 and /1e5.
        assert_eq!(artist.followers, "3K");
        assert_eq!(artist.streams, "30M");
    }

    #[test]
    fn test_unparseable_views_contribute_zero() {
        let items = vec![
            item("Artist - One", "5,000 views"),
            item("Artist - Two", "No views"),
        ];
        let catalog = build_catalog(&items, &CatalogConfig::default());

        assert_eq!(catalog.tracks[1].plays, "0");
        assert_eq!(catalog.artists[0].followers, "5K");
    }

    #[test]
    fn test_genre_set_keeps_first_two_in_accumulation_order() {
        let items = vec![
            item("Artist - Dawn Techno Cut", "1 views"),
            item("Artist - Uplifting Trance Anthem", "1 views"),
            item("Artist - Deep House Roller", "1 views"),
            item("Artist - Another Techno Cut", "1 views"),
        ];
        let catalog = build_catalog(&items, &CatalogConfig::default());

        assert_eq!(
            catalog.artists[0].genres,
            vec!["Techno".to_string(), "Trance".to_string()]
        );
    }

    #[test]
    fn test_artists_listed_in_first_seen_order() {
        let items = vec![
            item("Zeta - One", "1 views"),
            item("Alpha - Two", "1 views"),
            item("Zeta - Three", "1 views"),
        ];
        let catalog = build_catalog(&items, &CatalogConfig::default());

        let names: Vec<&str> = catalog.artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(catalog.artists[0].tracks, 2);
    }

    #[test]
    fn test_config_values_flow_through() {
        let config = CatalogConfig {
            default_bpm: 140,
            biography: "Test bio".to_string(),
            image_url: "img".to_string(),
            avatar_url: "av".to_string(),
            country: "Nowhere".to_string(),
        };
        let items = vec![item("Artist - Song", "10 views")];
        let catalog = build_catalog(&items, &config);

        assert_eq!(catalog.tracks[0].bpm, 140);
        let artist = &catalog.artists[0];
        assert_eq!(artist.bio, "Test bio");
        assert_eq!(artist.image, "img");
        assert_eq!(artist.avatar, "av");
        assert_eq!(artist.country, "Nowhere");
    }

    #[test]
    fn test_missing_date_and_duration_defaults() {
        let mut raw = item("Artist - Song", "10 views");
        raw.published_time = String::new();
        raw.duration_text = String::new();
        let catalog = build_catalog(&[raw], &CatalogConfig::default());

        assert_eq!(catalog.tracks[0].date, "Unknown");
        assert_eq!(catalog.tracks[0].duration, "0:00");
    }

    #[test]
    fn test_empty_input_yields_empty_catalog() {
        let catalog = build_catalog(&[], &CatalogConfig::default());
        assert!(catalog.is_empty());
        assert!(catalog.artists.is_empty());
    }
}
