//! Fuzzing library for arxiv-mcp.
//!
//! Targets cover Atom feed decoding, arXiv identifier parsing and tool
//! input deserialization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/arxiv-fuzz
//! cargo +nightly fuzz run fuzz_feed_parse -- -max_total_time=60
//! ```

pub use arxiv_mcp::client::parse_feed;
pub use arxiv_mcp::models;
