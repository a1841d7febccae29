use thiserror::Error;

/// Error types for catalog scraping operations.
///
/// This enum covers the failures that can occur when fetching a channel page
/// and assembling the catalog: network issues, throttling, parse problems,
/// and beat-tracking failures from the BPM utility.
///
/// Note that most of the extraction pipeline deliberately does *not* produce
/// errors: a page without a recognizable data blob yields an empty item list,
/// a malformed grid entry is skipped, and an unreadable view count becomes
/// zero. Only the outer collaborators (HTTP fetch, persistence, BPM
/// estimation) surface failures through this type.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP/network related errors.
    ///
    /// This includes connection failures, timeouts, DNS errors, and
    /// non-success status codes from the channel page request.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Throttling detected in the response body.
    ///
    /// YouTube serves an interstitial ("unusual traffic", captcha) instead of
    /// the channel page when requests come too quickly. The `retry_after`
    /// field indicates how many seconds to wait before the next attempt.
    #[error("Rate limited, retry after {retry_after} seconds")]
    RateLimit {
        /// Number of seconds to wait before retrying
        retry_after: u64,
    },

    /// Failed to parse fetched or persisted data.
    ///
    /// This covers malformed catalog JSON on disk and invalid channel URLs.
    /// Page-structure surprises inside the extractor are handled softly and
    /// never produce this error.
    #[error("Failed to parse: {0}")]
    Parse(String),

    /// Beat-tracking estimation failed.
    ///
    /// Returned by the BPM utility when the external estimator cannot be
    /// run, reports failure, or produces a tempo that cannot be folded into
    /// the accepted range.
    #[error("Beat tracking failed: {0}")]
    BeatTrack(String),

    /// File system I/O errors.
    ///
    /// This can occur when saving or loading the catalog document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
