//! `summarize_paper`: metadata plus a preview of the opening pages.

use serde_json::json;

use super::{McpTool, ToolContext, load_paper_content, parse_arxiv_id};
use crate::config::limits;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::SummarizePaperInput;
use crate::pdf;
use crate::text::{char_len, truncate_chars};

/// Content must be longer than this for a preview to be added.
const PREVIEW_MIN_CHARS: usize = 1000;

/// Leading blank-line separated blocks kept in the preview.
const PREVIEW_PARAGRAPHS: usize = 5;

/// Preview length cap.
const PREVIEW_MAX_CHARS: usize = 1500;

/// Build the content preview appended to a summary, if the text is long enough.
#[must_use]
pub fn content_preview(rendered: &str) -> Option<String> {
    if char_len(rendered) <= PREVIEW_MIN_CHARS {
        return None;
    }

    let intro = rendered.split("\n\n").take(PREVIEW_PARAGRAPHS).collect::<Vec<_>>().join("\n\n");
    Some(format!(
        "\n\n**Introduction/Content Preview:**\n{}...",
        truncate_chars(&intro, PREVIEW_MAX_CHARS)
    ))
}

/// Paper summary tool.
pub struct SummarizePaperTool;

#[async_trait::async_trait]
impl McpTool for SummarizePaperTool {
    fn name(&self) -> &'static str {
        "summarize_paper"
    }

    fn description(&self) -> &'static str {
        "Get a summary of an arXiv paper: its details plus a preview of the opening pages."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "arxiv_id": {
                    "type": "string",
                    "description": "arXiv paper ID (e.g., '2301.07041')"
                }
            },
            "required": ["arxiv_id"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: SummarizePaperInput = serde_json::from_value(input)?;
        let id = parse_arxiv_id(&params.arxiv_id)?;

        let Some(paper) = ctx.client.get_paper(&id).await? else {
            return Ok(formatters::paper_not_found(&id.to_string()));
        };
        let mut summary = formatters::format_paper_details_markdown(&paper);

        let pages = limits::SUMMARY_PAGES.min(ctx.max_pages_limit);
        match load_paper_content(ctx, &id, pages).await {
            Ok(content) => {
                if let Some(preview) = content_preview(&pdf::render_content(&content)) {
                    summary.push_str(&preview);
                }
            }
            Err(e) => {
                tracing::warn!(arxiv_id = %id.base(), error = %e, "Summary falls back to details only");
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_has_no_preview() {
        assert!(content_preview("--- Page 1 ---\nshort\n").is_none());
        assert!(content_preview(&"x".repeat(1000)).is_none());
    }

    #[test]
    fn test_preview_keeps_first_five_blocks() {
        let blocks: Vec<String> = (1..=8).map(|n| format!("block{n} {}", "y".repeat(200))).collect();
        let preview = content_preview(&blocks.join("\n\n")).unwrap();
        assert!(preview.starts_with("\n\n**Introduction/Content Preview:**\nblock1 "));
        assert!(preview.contains("block5"));
        assert!(!preview.contains("block6"));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_truncated() {
        let preview = content_preview(&"z".repeat(5000)).unwrap();
        let body = preview.trim_start_matches("\n\n**Introduction/Content Preview:**\n");
        assert_eq!(char_len(body), PREVIEW_MAX_CHARS + 3);
    }
}
