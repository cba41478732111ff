//! PDF text extraction and the extracted-content cache.
//!
//! Extraction is page-bounded: pages past the requested limit are removed
//! from the document before the text extractor runs, so a 300-page thesis
//! costs no more than its first `max_pages` pages.

mod cache;
mod extract;
mod render;

pub use cache::ContentCache;
pub use extract::{ExtractedPdf, extract_pages, extract_pages_blocking};
pub use render::{SHORT_TEXT_WARNING, is_text_short, render_content};

use crate::models::{ArxivId, PageText, PaperContent};

impl ExtractedPdf {
    /// Attach the paper id and number the pages from 1.
    #[must_use]
    pub fn into_content(self, id: &ArxivId) -> PaperContent {
        let pages = self
            .pages
            .into_iter()
            .zip(1u32..)
            .map(|(text, page)| PageText { page, text })
            .collect();

        PaperContent { arxiv_id: id.base().to_string(), pages, total_pages: self.total_pages }
    }
}
