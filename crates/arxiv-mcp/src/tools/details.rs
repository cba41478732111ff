//! `get_paper_details`: full metadata for one paper.

use serde_json::json;

use super::{McpTool, ToolContext, parse_arxiv_id};
use crate::error::ToolResult;
use crate::formatters;
use crate::models::{PaperDetailsInput, ResponseFormat};

/// Paper metadata tool.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl McpTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "get_paper_details"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific arXiv paper."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "arxiv_id": {
                    "type": "string",
                    "description": "arXiv paper ID (e.g., '2301.07041' or 'hep-th/9901001')"
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
        let params: PaperDetailsInput = serde_json::from_value(input)?;
        let id = parse_arxiv_id(&params.arxiv_id)?;

        let Some(paper) = ctx.client.get_paper(&id).await? else {
            tracing::debug!(arxiv_id = %id, "Paper not found");
            return Ok(formatters::paper_not_found(&id.to_string()));
        };

        match params.response_format {
            ResponseFormat::Markdown => Ok(formatters::format_paper_details_markdown(&paper)),
            ResponseFormat::Json => {
                Ok(serde_json::to_string_pretty(&formatters::paper_details_json(&paper))?)
            }
        }
    }
}
