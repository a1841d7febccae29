//! Data types for the scraped music catalog.
//!
//! This module contains the core data structures used throughout the crate:
//! the raw per-video record recovered from the channel page, the finished
//! track and artist records, and the two-key catalog document that other
//! tooling consumes.

use serde::{Deserialize, Serialize};

/// A single video entry as recovered from the channel page's embedded data.
///
/// Raw items carry the page's text fields verbatim; nothing is parsed or
/// normalized at this stage. Fields that are missing from a grid entry are
/// defaulted (empty string, or `"Unknown"` for the title) rather than
/// failing the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    /// The full video title as displayed on the page
    pub title: String,
    /// YouTube video identifier
    pub video_id: String,
    /// Relative publish time text (e.g. "3 weeks ago")
    pub published_time: String,
    /// View count text (e.g. "1,500,000 views")
    pub view_count_text: String,
    /// URL of the largest available thumbnail
    pub thumbnail_url: String,
    /// Duration text (e.g. "3:45")
    pub duration_text: String,
}

/// A catalog track built from one [`RawItem`].
///
/// Tracks are numbered in page order and carry the parsed artist/title split,
/// the classified genre, and the display form of the view count.
///
/// # Examples
///
/// ```rust
/// use youtube_catalog::Track;
///
/// let track = Track {
///     number: 1,
///     title: "Midnight Dreams".to_string(),
///     artist: "Aurora Skies".to_string(),
///     genre: "Progressive House".to_string(),
///     date: "2 weeks ago".to_string(),
///     plays: "1.5M".to_string(),
///     duration: "3:45".to_string(),
///     bpm: 128,
///     artwork: "https://i.ytimg.com/vi/abc123/hqdefault.jpg".to_string(),
///     video_id: "abc123".to_string(),
/// };
///
/// println!("{}. {} - {} ({})", track.number, track.artist, track.title, track.genre);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// 1-based position in page order
    pub number: u32,
    /// Track title with separator and trailing annotations removed
    pub title: String,
    /// Parsed artist name
    pub artist: String,
    /// Genre label from keyword classification
    pub genre: String,
    /// Publish time text as shown on the page
    pub date: String,
    /// Abbreviated play count for display (e.g. "1.5M")
    pub plays: String,
    /// Duration text as shown on the page
    pub duration: String,
    /// Tempo placeholder; not derived from audio
    pub bpm: u32,
    /// Thumbnail URL used as artwork
    pub artwork: String,
    /// YouTube video identifier
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// An artist entry aggregated across all of their tracks.
///
/// Artists are keyed by parsed name and listed in order of first appearance.
/// The `followers` and `streams` counters are display strings derived from
/// the artist's total view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist name as parsed from video titles (unique key)
    pub name: String,
    /// Up to two genre labels, in order of first appearance
    pub genres: Vec<String>,
    /// Biography text
    pub bio: String,
    /// Profile image URL
    pub image: String,
    /// Avatar image URL
    pub avatar: String,
    /// Number of catalog tracks referencing this artist
    pub tracks: u32,
    /// Follower counter for display (e.g. "350K")
    pub followers: String,
    /// Stream counter for display (e.g. "35M")
    pub streams: String,
    /// Country label
    pub country: String,
}

/// The complete scraped catalog: ordered tracks plus the aggregated artist
/// roster.
///
/// This structure is the entire outward-facing artifact of a scrape run.
/// When persisted it serializes as a single JSON document with the two
/// top-level keys `tracks` and `artists`, both preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Tracks in page order, at most one per discovered video
    pub tracks: Vec<Track>,
    /// Artists in order of first appearance
    pub artists: Vec<Artist>,
}

impl Catalog {
    /// Whether the scrape produced no items.
    ///
    /// An empty catalog is a valid, reportable outcome (the page had no
    /// recognizable data blob, or the channel has no videos), not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
