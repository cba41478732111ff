//! JSON output formatting.

use serde_json::{Value, json};

use crate::models::{Paper, PaperContent};
use crate::pdf::{SHORT_TEXT_WARNING, is_text_short};

/// Compact paper representation for search listings.
#[must_use]
pub fn compact_paper(paper: &Paper) -> Value {
    let mut obj = json!({
        "id": paper.id,
        "title": paper.title_or_default(),
        "authors": paper.authors,
        "published": paper.published_display(),
        "categories": paper.categories,
        "url": paper.abs_url(),
    });

    if let Some(primary) = &paper.primary_category {
        obj["primaryCategory"] = json!(primary);
    }

    obj["abstract"] = json!(paper.summary);
    obj
}

/// Full paper record, with URLs filled in when the feed omitted them.
#[must_use]
pub fn paper_details_json(paper: &Paper) -> Value {
    let mut obj = serde_json::to_value(paper).unwrap_or_else(|_| json!({}));
    obj["link"] = json!(paper.abs_url());
    obj["pdfUrl"] = json!(paper.pdf_link());
    obj
}

/// Extracted content as `{arxivId, totalPages, extractedPages, pages, warning?}`.
#[must_use]
pub fn content_json(content: &PaperContent) -> Value {
    let mut obj = json!({
        "arxivId": content.arxiv_id,
        "totalPages": content.total_pages,
        "extractedPages": content.extracted_pages(),
        "pages": content.pages,
    });

    if is_text_short(content) {
        obj["warning"] = json!(SHORT_TEXT_WARNING);
    }

    obj
}
