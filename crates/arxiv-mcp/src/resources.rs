//! MCP resources: a search usage hint and the category table.

use serde::Serialize;
use serde_json::{Value, json};

use crate::models::categories_by_group;

/// URI of the search hint resource.
pub const SEARCH_URI: &str = "arxiv://search";

/// URI of the category table resource.
pub const CATEGORIES_URI: &str = "arxiv://categories";

const JSON_MIME: &str = "application/json";

/// Entry in a `resources/list` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

/// Body of a `resources/read` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContents {
    pub uri: String,
    pub mime_type: &'static str,
    pub text: String,
}

/// A URI no resource answers to.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown resource: {0}")]
pub struct UnknownResource(pub String);

/// All resources this server exposes.
#[must_use]
pub fn list_resources() -> Vec<ResourceInfo> {
    vec![
        ResourceInfo {
            uri: SEARCH_URI,
            name: "ArXiv Paper Search",
            description: "Search for papers on arXiv",
            mime_type: JSON_MIME,
        },
        ResourceInfo {
            uri: CATEGORIES_URI,
            name: "ArXiv Categories",
            description: "List of arXiv subject categories",
            mime_type: JSON_MIME,
        },
    ]
}

/// Read a resource by URI.
///
/// # Errors
///
/// Returns [`UnknownResource`] for any URI not in [`list_resources`].
pub fn read_resource(uri: &str) -> Result<ResourceContents, UnknownResource> {
    let body: Value = match uri {
        SEARCH_URI => json!({
            "description": "Use the search_papers tool to find papers",
            "example": "search_papers with query='machine learning'"
        }),
        CATEGORIES_URI => json!(categories_by_group()),
        other => return Err(UnknownResource(other.to_string())),
    };

    Ok(ResourceContents {
        uri: uri.to_string(),
        mime_type: JSON_MIME,
        text: serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string()),
    })
}
