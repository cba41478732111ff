//! MCP tool implementations.
//!
//! Each tool module provides a tool that:
//! 1. Parses and validates input parameters
//! 2. Calls the arXiv client (and the PDF extractor)
//! 3. Formats results as Markdown or JSON

mod content;
mod details;
mod search;
mod summarize;

pub use content::*;
pub use details::*;
pub use search::*;
pub use summarize::*;

use std::sync::Arc;

use crate::client::ArxivClient;
use crate::config::Config;
use crate::error::{ToolError, ToolResult};
use crate::models::ArxivId;
use crate::pdf::ContentCache;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<ArxivClient>,

    /// Extracted PDF text, shared by `get_paper_content` and `summarize_paper`.
    pub content_cache: ContentCache,

    /// Upper bound applied to `max_pages`.
    pub max_pages_limit: u32,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ArxivClient>, content_cache: ContentCache, max_pages_limit: u32) -> Self {
        Self { client, content_cache, max_pages_limit: max_pages_limit.max(1) }
    }

    /// Build the client and content cache from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let content_cache = ContentCache::from_config(&config);
        let max_pages_limit = config.max_pages_limit;
        let client = Arc::new(ArxivClient::new(config)?);
        Ok(Self::new(client, content_cache, max_pages_limit))
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_papers").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(search::SearchPapersTool),
        Box::new(details::PaperDetailsTool),
        Box::new(content::PaperContentTool),
        Box::new(summarize::SummarizePaperTool),
    ]
}

/// Parse a user-supplied arXiv id, reporting failures against `arxiv_id`.
pub(crate) fn parse_arxiv_id(raw: &str) -> ToolResult<ArxivId> {
    ArxivId::parse(raw).map_err(|e| ToolError::validation("arxiv_id", e.to_string()))
}
