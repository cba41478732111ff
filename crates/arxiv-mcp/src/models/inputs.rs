//! Input models for MCP tool parameters.
//!
//! Numeric bounds are signed so out-of-range values reach validation
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};

use super::{ResponseFormat, SortBy};
use crate::config::limits;

/// Input for `search_papers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPapersInput {
    /// Search query (keywords, title, etc.).
    pub query: String,

    /// Author name.
    #[serde(default)]
    pub author: Option<String>,

    /// arXiv category (e.g. "cs.AI", "math.GT").
    #[serde(default)]
    pub category: Option<String>,

    /// Maximum number of results.
    #[serde(default = "default_max_results")]
    pub max_results: i64,

    /// Sort order.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_max_results() -> i64 {
    i64::from(limits::DEFAULT_MAX_RESULTS)
}

/// Input for `get_paper_details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperDetailsInput {
    /// arXiv paper ID (e.g. "2301.07041").
    pub arxiv_id: String,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for `get_paper_content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperContentInput {
    /// arXiv paper ID (e.g. "2301.07041").
    pub arxiv_id: String,

    /// Maximum number of pages to extract.
    #[serde(default = "default_max_pages")]
    pub max_pages: i64,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_max_pages() -> i64 {
    i64::from(limits::DEFAULT_MAX_PAGES)
}

/// Input for `summarize_paper`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizePaperInput {
    /// arXiv paper ID (e.g. "2301.07041").
    pub arxiv_id: String,
}
