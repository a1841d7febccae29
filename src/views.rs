//! View-count normalization: raw page text to an integer count and an
//! abbreviated display form.

/// Parse a view-count text like `"1,500,000 views"` into an integer.
///
/// A `" views"` suffix and thousands separators are removed before parsing.
/// Anything that still fails to parse yields 0; this function never fails.
#[must_use]
pub fn parse_view_count(text: &str) -> u64 {
    let cleaned = text.replace(" views", "").replace(',', "");
    cleaned.trim().parse::<u64>().unwrap_or(0)
}

/// Render a count in abbreviated form: one decimal with an `M` suffix from a
/// million up, one decimal with a `K` suffix from a thousand up, the bare
/// integer below that.
#[must_use]
pub fn format_play_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Normalize a raw view-count text into `(count, display)`.
///
/// Unparseable input yields `(0, "0")`.
///
/// # Examples
///
/// ```rust
/// use youtube_catalog::views::normalize;
///
/// assert_eq!(normalize("1500000 views"), (1_500_000, "1.5M".to_string()));
/// assert_eq!(normalize("No views"), (0, "0".to_string()));
/// ```
#[must_use]
pub fn normalize(text: &str) -> (u64, String) {
    let count = parse_view_count(text);
    (count, format_play_count(count))
}
