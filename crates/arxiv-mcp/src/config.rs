//! Configuration for the arXiv MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const QUERY_API: &str = "https://export.arxiv.org/api/query";

    /// Base URL for PDF downloads (`{PDF_BASE}/{id}.pdf`).
    pub const PDF_BASE: &str = "https://arxiv.org/pdf";

    /// Base URL for abstract pages.
    pub const ABS_BASE: &str = "https://arxiv.org/abs";

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("arxiv-mcp/", env!("CARGO_PKG_VERSION"));

    /// Request timeout (PDF downloads can be slow).
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Interval arXiv asks clients to keep between API calls.
    pub const RATE_LIMIT_INTERVAL: Duration = Duration::from_secs(3);

    /// Maximum retries for transient failures.
    pub const MAX_RETRIES: u32 = 3;

    /// Metadata cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum number of cached API responses.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Extracted-content cache TTL (1 hour).
    pub const CONTENT_CACHE_TTL: Duration = Duration::from_secs(3600);

    /// Extracted-content cache capacity in bytes of text (64 MiB).
    pub const CONTENT_CACHE_BYTES: u64 = 64 * 1024 * 1024;

    /// Largest PDF body we are willing to download (50 MiB).
    pub const MAX_PDF_BYTES: u64 = 50 * 1024 * 1024;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Tool parameter bounds.
pub mod limits {
    /// Default number of search results.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// Hard cap imposed by the arXiv API on a single query.
    pub const MAX_RESULTS_LIMIT: u32 = 100;

    /// Default number of PDF pages to extract.
    pub const DEFAULT_MAX_PAGES: u32 = 20;

    /// Default upper bound on pages extracted per request.
    pub const MAX_PAGES_LIMIT: u32 = 100;

    /// Pages extracted when building a summary preview.
    pub const SUMMARY_PAGES: u32 = 3;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Atom query endpoint (overridable for mock servers).
    pub api_url: String,

    /// PDF download base URL.
    pub pdf_base_url: String,

    /// User agent header value.
    pub user_agent: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Retries for transient HTTP failures.
    pub max_retries: u32,

    /// Advisory interval between API calls. Zero disables the warnings.
    pub rate_limit_interval: Duration,

    /// API response cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cached API responses.
    pub cache_max_size: u64,

    /// Extracted-content cache TTL.
    pub content_cache_ttl: Duration,

    /// Extracted-content cache capacity, weighed in bytes of text.
    pub content_cache_bytes: u64,

    /// Largest accepted PDF body.
    pub max_pdf_bytes: u64,

    /// Upper bound for the `max_pages` tool argument.
    pub max_pages_limit: u32,
}

impl Config {
    /// Create a configuration pointing at the public arXiv endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::QUERY_API.to_string(),
            pdf_base_url: api::PDF_BASE.to_string(),
            user_agent: api::USER_AGENT.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            max_retries: api::MAX_RETRIES,
            rate_limit_interval: api::RATE_LIMIT_INTERVAL,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
            content_cache_ttl: api::CONTENT_CACHE_TTL,
            content_cache_bytes: api::CONTENT_CACHE_BYTES,
            max_pdf_bytes: api::MAX_PDF_BYTES,
            max_pages_limit: limits::MAX_PAGES_LIMIT,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    ///
    /// The API lives at `{base_url}/api/query` and PDFs under `{base_url}/pdf`.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url),
            pdf_base_url: format!("{}/pdf", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            max_retries: 0,
            rate_limit_interval: Duration::ZERO,
            cache_ttl: Duration::from_secs(0), // No response caching in tests
            cache_max_size: 0,
            ..Self::new()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognised variables: `ARXIV_API_URL`, `ARXIV_PDF_BASE_URL`,
    /// `ARXIV_MAX_PAGES_LIMIT`, `ARXIV_CONTENT_CACHE_MB`.
    ///
    /// # Errors
    ///
    /// Returns error if a URL or numeric variable cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config = config.with_api_url(&url)?;
        }
        if let Ok(url) = std::env::var("ARXIV_PDF_BASE_URL") {
            config = config.with_pdf_base_url(&url)?;
        }
        if let Ok(limit) = std::env::var("ARXIV_MAX_PAGES_LIMIT") {
            config = config.with_max_pages_limit(limit.parse()?);
        }
        if let Ok(mb) = std::env::var("ARXIV_CONTENT_CACHE_MB") {
            config = config.with_content_cache_mb(mb.parse()?);
        }

        Ok(config)
    }

    /// Point the client at a different query endpoint.
    ///
    /// # Errors
    ///
    /// Returns error unless `url` is an absolute http(s) URL.
    pub fn with_api_url(mut self, url: &str) -> anyhow::Result<Self> {
        self.api_url = http_url(url)?;
        Ok(self)
    }

    /// Fetch PDFs from a different base URL.
    ///
    /// # Errors
    ///
    /// Returns error unless `url` is an absolute http(s) URL.
    pub fn with_pdf_base_url(mut self, url: &str) -> anyhow::Result<Self> {
        self.pdf_base_url = http_url(url)?;
        Ok(self)
    }

    /// Override the page limit (at least one page is always allowed).
    #[must_use]
    pub fn with_max_pages_limit(mut self, limit: u32) -> Self {
        self.max_pages_limit = limit.max(1);
        self
    }

    /// Override the content cache capacity in mebibytes.
    #[must_use]
    pub fn with_content_cache_mb(mut self, mb: u64) -> Self {
        self.content_cache_bytes = mb.saturating_mul(1024 * 1024);
        self
    }

    /// Whether advisory rate-limit warnings are enabled.
    #[must_use]
    pub const fn rate_limit_advisory(&self) -> bool {
        !self.rate_limit_interval.is_zero()
    }
}

fn http_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let parsed = url::Url::parse(raw)?;
    anyhow::ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "unsupported URL scheme '{}' in {raw}",
        parsed.scheme()
    );
    Ok(raw.trim_end_matches('/').to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
