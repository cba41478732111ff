//! arXiv MCP Server
//!
//! A Model Context Protocol (MCP) server for the arXiv API. Lets LLM agents
//! search papers, read their metadata, pull text out of their PDFs and get
//! quick summaries.
//!
//! # Features
//!
//! - **4 MCP Tools**: `search_papers`, `get_paper_details`, `get_paper_content`, `summarize_paper`
//! - **2 Resources**: `arxiv://search` and `arxiv://categories`
//! - **Page-bounded PDF extraction**: only the requested pages are parsed
//! - **Cached**: API responses for 5 minutes, extracted text for an hour
//!
//! # Example
//!
//! ```no_run
//! use arxiv_mcp::{ArxivClient, ArxivId, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::from_env()?)?;
//!     let id = ArxivId::parse("2301.07041")?;
//!
//!     if let Some(paper) = client.get_paper(&id).await? {
//!         println!("{}", paper.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pdf;
pub mod resources;
pub mod server;
pub mod text;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, ExtractError, ToolError};
pub use models::{ArxivId, Paper, PaperContent};
