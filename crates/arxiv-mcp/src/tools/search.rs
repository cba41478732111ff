//! `search_papers`: keyword search with author/category filters.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use super::{McpTool, ToolContext};
use crate::client::SearchQuery;
use crate::config::limits;
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{ResponseFormat, SearchPapersInput, category_name};
use crate::text::search_term;

/// `cs.AI`, `quant-ph`, `astro-ph.CO`, `physics.acc-ph`.
static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z\-]*(\.[A-Za-z][A-Za-z\-]*)?$").expect("valid category regex")
});

/// Paper search tool.
pub struct SearchPapersTool;

impl SearchPapersTool {
    /// Validate input and turn it into an API query.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty query, a malformed category,
    /// or `max_results < 1`.
    pub fn build_query(params: &SearchPapersInput) -> ToolResult<SearchQuery> {
        // Quotes are stripped when the query is built, so check what is left.
        let query = search_term(&params.query);
        if query.is_empty() {
            return Err(ToolError::validation("query", "cannot be empty"));
        }
        let author = params.author.as_deref().map(search_term).filter(|a| !a.is_empty());

        if params.max_results < 1 {
            return Err(ToolError::validation("max_results", "must be at least 1"));
        }
        let max_results = u32::try_from(params.max_results)
            .unwrap_or(u32::MAX)
            .min(limits::MAX_RESULTS_LIMIT);

        let category = match params.category.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(c) if CATEGORY_RE.is_match(c) => {
                if category_name(c).is_none() {
                    tracing::debug!(category = c, "Category not in the built-in table");
                }
                Some(c.to_string())
            }
            Some(c) => {
                return Err(ToolError::validation(
                    "category",
                    format!("'{c}' is not an arXiv category (expected e.g. 'cs.AI' or 'quant-ph')"),
                ));
            }
        };

        Ok(SearchQuery {
            query,
            author,
            category,
            max_results,
            sort_by: params.sort_by,
        })
    }
}

#[async_trait::async_trait]
impl McpTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "search_papers"
    }

    fn description(&self) -> &'static str {
        "Search for papers on arXiv by keywords, author, or category."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query (keywords, title, etc.)"
                },
                "author": {
                    "type": "string",
                    "description": "Author name (optional)"
                },
                "category": {
                    "type": "string",
                    "description": "arXiv category (e.g., 'cs.AI', 'math.GT') (optional)"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results (default: 10)",
                    "default": 10,
                    "minimum": 1,
                    "maximum": 100
                },
                "sort_by": {
                    "type": "string",
                    "enum": ["relevance", "lastUpdatedDate", "submittedDate"],
                    "description": "Sort order (default: relevance)",
                    "default": "relevance"
                },
                "response_format": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let query = Self::build_query(&params)?;

        let papers = ctx.client.search(&query).await?;
        tracing::debug!(tool = "search_papers", results = papers.len(), "Search complete");

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_search_markdown(&papers)),
            ResponseFormat::Json => {
                let compact = papers.iter().map(formatters::compact_paper).collect::<Vec<_>>();
                Ok(serde_json::to_string_pretty(&json!({
                    "total": compact.len(),
                    "papers": compact
                }))?)
            }
        }
    }
}
