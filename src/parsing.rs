//! Embedded-data parsing for YouTube channel pages.
//!
//! Channel listing pages carry their video grid in a `ytInitialData` script
//! assignment rather than in the served markup. This module locates that
//! blob, parses it, and walks its nested renderer structure to recover one
//! [`RawItem`] per video. The walk is deliberately defensive: the structure
//! is undocumented and shifts without notice, so every lookup is fallible
//! and a surprise at any step degrades the result instead of failing it.

use crate::types::RawItem;
use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;

/// Maximum number of items recovered from a page.
///
/// The cap is applied during extraction, before any parsing or aggregation
/// sees the items.
pub const MAX_ITEMS: usize = 30;

/// Parser for the `ytInitialData` blob embedded in channel pages.
///
/// Stateless; it holds the extraction logic that turns raw page text into a
/// flat, ordered item sequence.
#[derive(Debug, Clone)]
pub struct InitialDataParser;

impl InitialDataParser {
    /// Create a new parser instance.
    pub fn new() -> Self {
        Self
    }

    /// Extract raw video items from channel page text.
    ///
    /// Returns at most [`MAX_ITEMS`] items in page order. An empty vector is
    /// a valid outcome, produced when the page carries no recognizable data
    /// blob, when the blob fails to parse, or when the channel simply has no
    /// videos. Callers must treat it as "no items found", not as an error.
    pub fn extract_items(&self, page: &str) -> Vec<RawItem> {
        let Some(blob) = self.find_initial_data(page) else {
            log::debug!("no ytInitialData assignment found in page text");
            return Vec::new();
        };

        let data: Value = match serde_json::from_str(&blob) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to parse initial data blob: {e}");
                return Vec::new();
            }
        };

        let items = self.collect_items(&data);
        log::debug!("extracted {} items from initial data", items.len());
        items
    }

    /// Locate the `var ytInitialData = {...};` assignment in page text.
    fn find_initial_data(&self, page: &str) -> Option<String> {
        let assignment = Regex::new(r"(?s)var ytInitialData\s*=\s*(\{.*?\});").unwrap();
        assignment
            .captures(page)
            .map(|captures| captures[1].to_string())
    }

    /// Walk the tab structure down to the video grid and collect items.
    ///
    /// Grid entries that are not video renderers (continuations, shelf
    /// items, entries of unexpected shape) are skipped; a malformed entry
    /// never aborts extraction of the rest.
    fn collect_items(&self, data: &Value) -> Vec<RawItem> {
        let mut items = Vec::new();

        let Some(tabs) = walk(data, &["contents", "twoColumnBrowseResultsRenderer", "tabs"])
            .and_then(Value::as_array)
        else {
            return items;
        };

        for tab in tabs {
            let Some(contents) = walk(tab, &["tabRenderer", "content", "richGridRenderer", "contents"])
                .and_then(Value::as_array)
            else {
                // Not every tab carries a grid; only the videos tab does.
                continue;
            };

            for entry in contents {
                match walk(entry, &["richItemRenderer", "content", "videoRenderer"]) {
                    Some(renderer) => items.push(self.parse_video_renderer(renderer)),
                    None => continue,
                }
            }
        }

        items.truncate(MAX_ITEMS);
        items
    }

    /// Build a [`RawItem`] from a single `videoRenderer` object.
    ///
    /// Missing fields are defaulted, never fatal: a grid entry that made it
    /// this far always yields an item.
    fn parse_video_renderer(&self, renderer: &Value) -> RawItem {
        let title = walk(renderer, &["title", "runs"])
            .and_then(|runs| runs.get(0))
            .and_then(|run| run.get("text"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();

        // The thumbnails array is ordered small to large; take the largest.
        let thumbnail_url = walk(renderer, &["thumbnail", "thumbnails"])
            .and_then(Value::as_array)
            .and_then(|thumbnails| thumbnails.last())
            .and_then(|thumbnail| thumbnail.get("url"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        RawItem {
            title,
            video_id: string_at(renderer, &["videoId"]),
            published_time: string_at(renderer, &["publishedTimeText", "simpleText"]),
            view_count_text: string_at(renderer, &["viewCountText", "simpleText"]),
            thumbnail_url,
            duration_text: string_at(renderer, &["lengthText", "simpleText"]),
        }
    }
}

impl Default for InitialDataParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow a key path through untyped JSON, one fallible lookup at a time.
///
/// Returns `None` at the first missing or mistyped step and logs which step
/// failed, so structure drift shows up in debug output instead of as a
/// silent empty result.
fn walk<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        match current.get(key) {
            Some(next) => current = next,
            None => {
                log::debug!(
                    "initial data walk stopped at '{}' (step {} of {})",
                    key,
                    depth + 1,
                    path.len()
                );
                return None;
            }
        }
    }
    Some(current)
}

/// String leaf lookup with an empty-string default.
fn string_at(value: &Value, path: &[&str]) -> String {
    walk(value, path)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Read the channel's display title from the page's `og:title` meta tag.
///
/// Used for reporting only; the catalog document does not carry it.
pub fn parse_channel_title(page: &str) -> Option<String> {
    let document = Html::parse_document(page);
    let selector = Selector::parse("meta[property=\"og:title\"]").unwrap();

    let title = document
        .select(&selector)
        .next()?
        .value()
        .attr("content")?
        .trim()
        .to_string();

    (!title.is_empty()).then_some(title)
}
