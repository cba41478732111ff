//! Error types for the arXiv MCP server.
//!
//! Three layers: the HTTP client, PDF extraction, and tool execution, which
//! wraps the other two and renders the text the caller sees.

use std::time::Duration;

/// Failures talking to arXiv.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Connection, TLS or body read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure surfaced by the retry middleware.
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// 429 from arXiv.
    #[error("Rate limited by arXiv, retry after {}s", retry_after.as_secs())]
    RateLimited {
        /// From `Retry-After`, or the published request interval.
        retry_after: Duration,
    },

    /// 404; carries the requested URL.
    #[error("Not found: {url}")]
    NotFound {
        /// URL that returned 404.
        url: String,
    },

    /// 400, or an error entry inside an otherwise successful feed.
    #[error("arXiv rejected the request: {message}")]
    BadRequest {
        /// Body or error entry summary.
        message: String,
    },

    /// Body was not a decodable Atom feed.
    #[error("Failed to parse arXiv response: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// PDF body exceeded `max_pdf_bytes`.
    #[error("Response too large: {size} bytes exceeds limit of {limit} bytes")]
    TooLarge {
        /// Announced or received size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// Any other non-success status.
    #[error("arXiv returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
}

impl ClientError {
    /// Map a non-success status and its body.
    #[must_use]
    pub fn from_status(status: u16, body: String, url: &str) -> Self {
        match status {
            404 => Self::NotFound { url: url.to_string() },
            400 => Self::BadRequest { message: body },
            _ => Self::Status { status, body },
        }
    }
}

/// Failures turning PDF bytes into page text.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("Failed to load PDF: {0}")]
    Load(#[from] lopdf::Error),

    /// Writing the page-trimmed document back out failed.
    #[error("Failed to prepare PDF: {0}")]
    Prepare(String),

    #[error("Failed to extract text: {0}")]
    Extract(String),

    #[error("PDF has no pages")]
    Empty,

    /// The extractor panicked; the message is the panic payload.
    #[error("Text extractor crashed: {0}")]
    Panicked(String),
}

/// Failures of a tool call.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Fetching the PDF failed, whatever the cause.
    #[error("PDF download failed: {0}")]
    Download(#[source] ClientError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// An argument was missing, malformed or out of range.
    #[error("Validation error: {message}")]
    Validation {
        /// Argument name as it appears in the tool schema.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// Arguments did not match the input type.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Shorthand for [`ToolError::Validation`].
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Text returned to the MCP caller.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => format!(
                "arXiv is rate limiting requests. Wait {}s before retrying.",
                retry_after.as_secs()
            ),
            Self::Client(ClientError::NotFound { url }) => {
                format!("Not found: {url}. Check that the arXiv ID is correct.")
            }
            Self::Download(ClientError::NotFound { url }) => {
                format!("Error extracting PDF content: no PDF at {url}")
            }
            Self::Download(e) => format!("Error extracting PDF content: {e}"),
            Self::Extraction(e) => format!("Error extracting PDF content: {e}"),
            Self::Validation { field, message } => format!("Invalid input for '{field}': {message}"),
            Self::Serialization(e) => format!("Invalid arguments: {e}"),
            Self::Client(e) => e.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
