//! Plain-text rendering of extracted content.

use crate::models::PaperContent;
use crate::text::char_len;

/// Prefix added when almost no text came out of the PDF.
pub const SHORT_TEXT_WARNING: &str =
    "Warning: Extracted text is very short. PDF might be image-based or have extraction issues.";

const SHORT_TEXT_THRESHOLD: usize = 100;

fn render_pages(content: &PaperContent) -> String {
    content
        .pages
        .iter()
        .map(|p| format!("--- Page {} ---\n{}\n", p.page, p.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether the rendered pages are too short to be a real text layer.
#[must_use]
pub fn is_text_short(content: &PaperContent) -> bool {
    char_len(&render_pages(content)) < SHORT_TEXT_THRESHOLD
}

/// Render pages as `--- Page N ---` blocks.
#[must_use]
pub fn render_content(content: &PaperContent) -> String {
    let pages = render_pages(content);
    let short = char_len(&pages) < SHORT_TEXT_THRESHOLD;

    let mut out = String::with_capacity(pages.len() + 160);
    if short {
        out.push_str(SHORT_TEXT_WARNING);
        out.push_str("\n\n");
    }
    out.push_str(&pages);

    let omitted = content.omitted_pages();
    if omitted > 0 {
        out.push_str(&format!(
            "\n[Extracted {} of {} pages; {} more not shown. Increase max_pages to read further.]\n",
            content.extracted_pages(),
            content.total_pages,
            omitted
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageText;

    fn content(texts: &[&str], total_pages: u32) -> PaperContent {
        PaperContent {
            arxiv_id: "2301.07041".to_string(),
            pages: texts
                .iter()
                .zip(1u32..)
                .map(|(t, page)| PageText { page, text: (*t).to_string() })
                .collect(),
            total_pages,
        }
    }

    #[test]
    fn test_page_blocks() {
        let long = "word ".repeat(40);
        let rendered = render_content(&content(&[long.trim(), "second"], 2));
        assert!(rendered.starts_with("--- Page 1 ---\nword"));
        assert!(rendered.contains("\n\n--- Page 2 ---\nsecond\n"));
        assert!(!rendered.contains("Warning"));
        assert!(!rendered.contains("Extracted"));
    }

    #[test]
    fn test_short_text_warning() {
        let c = content(&["tiny"], 1);
        assert!(is_text_short(&c));
        let rendered = render_content(&c);
        assert!(rendered.starts_with(SHORT_TEXT_WARNING));
        assert!(rendered.ends_with("--- Page 1 ---\ntiny\n"));
    }

    #[test]
    fn test_omitted_pages_note() {
        let long = "word ".repeat(40);
        let rendered = render_content(&content(&[long.trim()], 12));
        assert!(rendered.contains("[Extracted 1 of 12 pages; 11 more not shown."));
    }
}
