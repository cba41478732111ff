//! arXiv API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Retry middleware with exponential backoff
//! - Advisory rate limiting (arXiv asks for one request every 3 seconds)
//! - Response caching with 5-minute TTL
//! - Size-bounded PDF downloads

pub mod atom;

use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use moka::future::Cache;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{ArxivId, Paper, SortBy};

pub use atom::{FeedPage, parse_feed};

/// Parameters of an arXiv search.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Free-text query matched against all fields.
    pub query: String,
    /// Author name.
    pub author: Option<String>,
    /// Category code.
    pub category: Option<String>,
    /// Number of results to request.
    pub max_results: u32,
    /// Sort order.
    pub sort_by: SortBy,
}

impl SearchQuery {
    /// Build the `search_query` parameter (`all:… AND au:… AND cat:…`).
    ///
    /// Multi-word values are quoted so arXiv treats them as phrases.
    #[must_use]
    pub fn to_search_query(&self) -> String {
        let mut terms = Vec::with_capacity(3);

        if !self.query.trim().is_empty() {
            terms.push(format!("all:{}", field_value(&self.query)));
        }
        if let Some(author) = self.author.as_deref().filter(|a| !a.trim().is_empty()) {
            terms.push(format!("au:{}", field_value(author)));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            terms.push(format!("cat:{}", category.trim()));
        }

        terms.join(" AND ")
    }
}

fn field_value(raw: &str) -> String {
    let cleaned = crate::text::search_term(raw);
    if cleaned.contains(' ') { format!("\"{cleaned}\"") } else { cleaned }
}

/// arXiv API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Atom response cache.
    cache: Cache<String, String>,

    /// Advisory limiter; `None` when warnings are disabled.
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,

    /// Query endpoint.
    api_url: String,

    /// PDF base URL.
    pdf_base_url: String,

    /// Largest accepted PDF body.
    max_pdf_bytes: u64,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let cache = Cache::builder()
            .max_capacity(config.cache_max_size)
            .time_to_live(config.cache_ttl)
            .build();

        let rate_limiter = Quota::with_period(config.rate_limit_interval)
            .filter(|_| config.rate_limit_advisory())
            .map(|quota| Arc::new(RateLimiter::direct(quota)));

        Ok(Self {
            client,
            cache,
            rate_limiter,
            api_url: config.api_url,
            pdf_base_url: config.pdf_base_url.trim_end_matches('/').to_string(),
            max_pdf_bytes: config.max_pdf_bytes,
        })
    }

    /// Search for papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an undecodable feed.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<Vec<Paper>> {
        let params = vec![
            ("search_query".to_string(), query.to_search_query()),
            ("start".to_string(), "0".to_string()),
            ("max_results".to_string(), query.max_results.to_string()),
            ("sortBy".to_string(), query.sort_by.as_api_str().to_string()),
            ("sortOrder".to_string(), "descending".to_string()),
        ];

        tracing::debug!(search_query = %params[0].1, max_results = query.max_results, "arXiv search");

        Ok(self.get_feed(&params).await?.papers)
    }

    /// Get a single paper by ID. The version suffix is ignored, so the
    /// latest revision is returned.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an undecodable feed.
    pub async fn get_paper(&self, id: &ArxivId) -> ClientResult<Option<Paper>> {
        let params = vec![
            ("id_list".to_string(), id.base().to_string()),
            ("max_results".to_string(), "1".to_string()),
        ];

        Ok(self.get_feed(&params).await?.papers.into_iter().next())
    }

    /// URL of the PDF for a paper (latest revision).
    #[must_use]
    pub fn pdf_url(&self, id: &ArxivId) -> String {
        format!("{}/{}.pdf", self.pdf_base_url, id.base())
    }

    /// Download a paper's PDF.
    ///
    /// # Errors
    ///
    /// Returns error on HTTP failure or when the body exceeds the size limit.
    pub async fn download_pdf(&self, id: &ArxivId) -> ClientResult<Vec<u8>> {
        let url = self.pdf_url(id);
        self.advise_rate_limit();

        tracing::debug!(%url, "Downloading PDF");
        let response = self.client.get(&url).send().await?;
        let mut response = Self::check_status(response).await?;

        let limit = self.max_pdf_bytes;
        if let Some(len) = response.content_length() {
            if len > limit {
                return Err(ClientError::TooLarge { size: len, limit });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            if body.len() as u64 > limit {
                return Err(ClientError::TooLarge { size: body.len() as u64, limit });
            }
        }

        tracing::debug!(%url, bytes = body.len(), "PDF downloaded");
        Ok(body)
    }

    /// Number of cached API responses.
    #[must_use]
    pub fn cached_responses(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Fetch and decode a feed, serving repeated queries from cache.
    async fn get_feed(&self, params: &[(String, String)]) -> ClientResult<FeedPage> {
        let cache_key = self.cache_key("GET", &self.api_url, params);
        if let Some(cached) = self.cache.get(&cache_key).await {
            tracing::debug!("Serving arXiv response from cache");
            return parse_feed(&cached);
        }

        self.advise_rate_limit();

        let response = self.client.get(&self.api_url).query(params).send().await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;

        let page = parse_feed(&body)?;
        self.cache.insert(cache_key, body).await;

        Ok(page)
    }

    /// Warn when requests arrive faster than arXiv's published guidance.
    fn advise_rate_limit(&self) {
        if let Some(limiter) = &self.rate_limiter {
            if limiter.check().is_err() {
                tracing::warn!(
                    "arXiv requests are arriving faster than one every {}s; \
                     heavy use may get this client throttled",
                    api::RATE_LIMIT_INTERVAL.as_secs()
                );
            }
        }
    }

    /// Pass successful responses through and map the rest to [`ClientError`].
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .map_or(api::RATE_LIMIT_INTERVAL, Duration::from_secs);
            tracing::warn!(retry_after_secs = retry_after.as_secs(), "arXiv returned 429");
            return Err(ClientError::RateLimited { retry_after });
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %url, "arXiv request failed");
        Err(ClientError::from_status(status.as_u16(), body, &url))
    }

    /// Generate cache key.
    fn cache_key(&self, method: &str, url: &str, params: &[(String, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(method.as_bytes());
        hasher.update(b"|");
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient")
            .field("api_url", &self.api_url)
            .field("pdf_base_url", &self.pdf_base_url)
            .field("advisory_rate_limit", &self.rate_limiter.is_some())
            .finish()
    }
}
