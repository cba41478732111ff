//! `get_paper_content`: page-bounded PDF text with caching.

use std::sync::Arc;

use serde_json::json;

use super::{McpTool, ToolContext, parse_arxiv_id};
use crate::error::{ToolError, ToolResult};
use crate::formatters;
use crate::models::{ArxivId, PaperContent, PaperContentInput, ResponseFormat};
use crate::pdf;

/// Fetch the text of a paper's first `max_pages` pages.
///
/// Served from the content cache when possible; otherwise the PDF is
/// downloaded, extracted on the blocking pool and cached. Failures are
/// never cached.
///
/// # Errors
///
/// Returns error if the download or the extraction fails.
pub async fn load_paper_content(
    ctx: &ToolContext,
    id: &ArxivId,
    max_pages: u32,
) -> ToolResult<Arc<PaperContent>> {
    if let Some(cached) = ctx.content_cache.get(id, max_pages).await {
        tracing::debug!(arxiv_id = %id.base(), max_pages, cache_hit = true, "Content served from cache");
        return Ok(cached);
    }

    let bytes = ctx.client.download_pdf(id).await.map_err(ToolError::Download)?;
    let extracted = pdf::extract_pages_blocking(bytes, max_pages).await?;
    let content = Arc::new(extracted.into_content(id));

    tracing::info!(
        arxiv_id = %id.base(),
        max_pages,
        cache_hit = false,
        pages = content.extracted_pages(),
        total_pages = content.total_pages,
        "Extracted PDF text"
    );

    ctx.content_cache.insert(id, max_pages, Arc::clone(&content)).await;
    Ok(content)
}

/// PDF content tool.
pub struct PaperContentTool;

impl PaperContentTool {
    /// Validate `max_pages` and clamp it to the configured limit.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `max_pages < 1`.
    pub fn effective_max_pages(requested: i64, limit: u32) -> ToolResult<u32> {
        if requested < 1 {
            return Err(ToolError::validation("max_pages", "must be at least 1"));
        }
        Ok(u32::try_from(requested).unwrap_or(u32::MAX).min(limit))
    }
}

#[async_trait::async_trait]
impl McpTool for PaperContentTool {
    fn name(&self) -> &'static str {
        "get_paper_content"
    }

    fn description(&self) -> &'static str {
        "Download and extract text content from an arXiv paper PDF. \
         Extraction is limited to the first max_pages pages."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "arxiv_id": {
                    "type": "string",
                    "description": "arXiv paper ID (e.g., '2301.07041')"
                },
                "max_pages": {
                    "type": "integer",
                    "description": "Maximum number of pages to extract (default: 20)",
                    "default": 20,
                    "minimum": 1
                },
                "response_format": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["arxiv_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperContentInput = serde_json::from_value(input)?;
        let id = parse_arxiv_id(&params.arxiv_id)?;
        let max_pages = Self::effective_max_pages(params.max_pages, ctx.max_pages_limit)?;

        let content = load_paper_content(ctx, &id, max_pages).await?;

        match params.response_format {
            ResponseFormat::Markdown => Ok(pdf::render_content(&content)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&formatters::content_json(&content))?)
            }
        }
    }
}
