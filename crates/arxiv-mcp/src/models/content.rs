//! Extracted PDF text.

use serde::{Deserialize, Serialize};

/// Text of a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-based page number.
    pub page: u32,

    /// Whitespace-normalised text.
    pub text: String,
}

/// Page-bounded text extracted from a paper's PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperContent {
    /// Identifier the PDF was fetched for (version stripped).
    pub arxiv_id: String,

    /// Extracted pages in document order.
    pub pages: Vec<PageText>,

    /// Page count of the whole document.
    pub total_pages: u32,
}

impl PaperContent {
    /// Number of pages that were extracted.
    #[must_use]
    pub fn extracted_pages(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Pages present in the PDF but not extracted.
    #[must_use]
    pub fn omitted_pages(&self) -> u32 {
        self.total_pages.saturating_sub(self.extracted_pages())
    }

    /// Total bytes of extracted text.
    #[must_use]
    pub fn text_len(&self) -> usize {
        self.pages.iter().map(|p| p.text.len()).sum()
    }
}
