use regex::Regex;

/// Artist label used when no separator heuristic matches a video title.
pub const FALLBACK_ARTIST: &str = "Unknown Artist";

// Separator heuristics, most specific first. The first pattern that matches
// wins; later patterns are never consulted. Order matters: a hyphenated
// title with a remix tag must not fall through to the plain-colon rule.
const SEPARATOR_PATTERNS: [&str; 3] = [
    // Artist - Title, optionally with a trailing [..] or (..) annotation
    r"^(.+?)\s*[-–—]\s*(.+?)(?:\s*\[.*?\]|\s*\(.*?\))?$",
    // Artist – Title (en/em dash only)
    r"^(.+?)\s*[–—]\s*(.+?)$",
    // Artist : Title
    r"^(.+?)\s*:\s*(.+?)$",
];

/// Split a video title into `(artist, track_title)`.
///
/// Tries the separator heuristics in order and stops at the first match.
/// After a match, one trailing bracketed group and one trailing
/// parenthesized group are stripped from the title half. A title that
/// matches no heuristic yields [`FALLBACK_ARTIST`] and the original title
/// unchanged; this function never fails.
///
/// # Examples
///
/// ```rust
/// use youtube_catalog::title::split_artist_title;
///
/// let (artist, title) = split_artist_title("Aurora Skies - Midnight Dreams [Extended Mix]");
/// assert_eq!(artist, "Aurora Skies");
/// assert_eq!(title, "Midnight Dreams");
/// ```
#[must_use]
pub fn split_artist_title(video_title: &str) -> (String, String) {
    for pattern in SEPARATOR_PATTERNS {
        let separator = Regex::new(pattern).unwrap();
        if let Some(captures) = separator.captures(video_title) {
            let artist = captures[1].trim().to_string();
            let title = strip_trailing_annotations(captures[2].trim());
            return (artist, title);
        }
    }

    (FALLBACK_ARTIST.to_string(), video_title.to_string())
}

/// Remove one trailing `[..]` group and one trailing `(..)` group.
fn strip_trailing_annotations(title: &str) -> String {
    let bracketed = Regex::new(r"\s*\[.*?\]$").unwrap();
    let parenthesized = Regex::new(r"\s*\(.*?\)$").unwrap();

    let stripped = bracketed.replace(title, "");
    parenthesized.replace(&stripped, "").trim().to_string()
}
