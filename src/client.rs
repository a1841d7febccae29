use crate::catalog::{build_catalog, CatalogConfig};
use crate::parsing::{parse_channel_title, InitialDataParser};
use crate::retry::{retry_operation, RetryConfig};
use crate::types::Catalog;
use crate::{headers, CatalogError, Result};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};

/// Interface the catalog pipeline needs from the page-fetch layer.
///
/// The pipeline only ever observes two outcomes from a fetch: the page text,
/// or a failure. Retries, headers, and throttling policy all live behind
/// this trait.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides
/// `MockChannelPageSource` that implements this trait using the `mockall`
/// library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait ChannelPageSource {
    /// Fetch the raw text of the channel's videos listing page.
    async fn fetch_videos_page(&self, handle: &str) -> Result<String>;
}

/// Run the full pipeline against any page source.
///
/// Fetches the page, extracts the raw item sequence, and aggregates it into
/// a catalog. A fetch failure is logged and yields an empty catalog rather
/// than an error: "no items found" is the reportable outcome, and callers
/// that need the underlying failure can fetch through the source directly.
pub async fn scrape_catalog(
    source: &dyn ChannelPageSource,
    handle: &str,
    config: &CatalogConfig,
) -> Catalog {
    let page = match source.fetch_videos_page(handle).await {
        Ok(page) => page,
        Err(e) => {
            log::warn!("channel page fetch failed: {e}");
            return Catalog::default();
        }
    };

    if let Some(channel_title) = parse_channel_title(&page) {
        log::info!("scraping channel '{channel_title}'");
    }

    let items = InitialDataParser::new().extract_items(&page);
    log::info!("extracted {} video items for '{handle}'", items.len());

    build_catalog(&items, config)
}

/// HTTP client for fetching YouTube channel listing pages.
///
/// Wraps any [`HttpClient`] implementation with browser-impersonation
/// headers, throttling detection, and retry with backoff.
///
/// # Examples
///
/// ```rust,no_run
/// # use youtube_catalog::{CatalogConfig, ChannelClient};
/// # tokio_test::block_on(async {
/// let http_client = http_client::native::NativeClient::new();
/// let client = ChannelClient::new(Box::new(http_client));
///
/// let catalog = client
///     .scrape_channel("@worldstudiorecords", &CatalogConfig::default())
///     .await;
/// println!("{} tracks", catalog.tracks.len());
/// # });
/// ```
pub struct ChannelClient {
    client: Box<dyn HttpClient + Send + Sync>,
    base_url: String,
    rate_limit_patterns: Vec<String>,
    retry_config: RetryConfig,
}

impl ChannelClient {
    /// Create a new [`ChannelClient`] with the default YouTube URL.
    pub fn new(client: Box<dyn HttpClient + Send + Sync>) -> Self {
        Self::with_base_url(client, "https://www.youtube.com".to_string())
    }

    /// Create a new [`ChannelClient`] with a custom base URL.
    ///
    /// This is useful for testing against a local fixture server.
    pub fn with_base_url(client: Box<dyn HttpClient + Send + Sync>, base_url: String) -> Self {
        Self::with_rate_limit_patterns(
            client,
            base_url,
            vec![
                "unusual traffic".to_string(),
                "automated queries".to_string(),
                "captcha".to_string(),
                "verify you're human".to_string(),
            ],
        )
    }

    /// Create a new [`ChannelClient`] with custom rate limit detection
    /// patterns.
    ///
    /// Patterns are matched case-insensitively against response bodies;
    /// YouTube serves its throttling interstitial with a 200 status, so the
    /// status code alone is not enough.
    pub fn with_rate_limit_patterns(
        client: Box<dyn HttpClient + Send + Sync>,
        base_url: String,
        rate_limit_patterns: Vec<String>,
    ) -> Self {
        Self {
            client,
            base_url,
            rate_limit_patterns,
            retry_config: RetryConfig::default(),
        }
    }

    /// Override retry behavior for throttled fetches.
    pub fn set_retry_config(&mut self, config: RetryConfig) {
        self.retry_config = config;
    }

    /// Fetch, extract, and aggregate in one call.
    ///
    /// See [`scrape_catalog`] for the failure semantics.
    pub async fn scrape_channel(&self, handle: &str, config: &CatalogConfig) -> Catalog {
        scrape_catalog(self, handle, config).await
    }

    /// Build the videos listing URL for a channel handle.
    ///
    /// Handles are normalized to `@`-form and the name portion is
    /// percent-encoded.
    fn videos_url(&self, handle: &str) -> String {
        let name = handle.strip_prefix('@').unwrap_or(handle);
        format!("{}/@{}/videos", self.base_url, urlencoding::encode(name))
    }

    async fn get(&self, url: &str) -> Result<String> {
        let parsed = url
            .parse::<Url>()
            .map_err(|e| CatalogError::Parse(format!("invalid url {url}: {e}")))?;

        let mut request = Request::new(Method::Get, parsed);
        headers::add_page_headers(&mut request);

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Http(format!(
                "status {} fetching {url}",
                response.status()
            )));
        }

        let body = response
            .body_string()
            .await
            .map_err(|e| CatalogError::Http(e.to_string()))?;

        self.check_rate_limit(&body)?;
        Ok(body)
    }

    fn check_rate_limit(&self, body: &str) -> Result<()> {
        let lowered = body.to_lowercase();
        for pattern in &self.rate_limit_patterns {
            if lowered.contains(pattern.as_str()) {
                log::warn!("rate limit pattern '{pattern}' found in response body");
                return Err(CatalogError::RateLimit { retry_after: 60 });
            }
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ChannelPageSource for ChannelClient {
    async fn fetch_videos_page(&self, handle: &str) -> Result<String> {
        let url = self.videos_url(handle);
        let retried = retry_operation(self.retry_config.clone(), "channel page fetch", || {
            self.get(&url)
        })
        .await?;
        Ok(retried.result)
    }
}
