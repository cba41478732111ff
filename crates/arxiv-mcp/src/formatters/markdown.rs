//! Markdown output formatting.

use crate::models::Paper;
use crate::text::truncate_chars;

/// Abstract preview length in search listings.
pub const ABSTRACT_PREVIEW_CHARS: usize = 200;

/// Message for an empty search result.
pub const NO_PAPERS_FOUND: &str = "No papers found matching your query.";

/// Format search results as a numbered Markdown list.
#[must_use]
pub fn format_search_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return NO_PAPERS_FOUND.to_string();
    }

    let mut output = format!("Found {} papers:\n\n", papers.len());

    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_search_entry(paper, i + 1));
    }

    output
}

/// Format one search hit.
#[must_use]
pub fn format_search_entry(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("{index}. **{}**\n", paper.title_or_default()));
    output.push_str(&format!("   Authors: {}\n", paper.author_names()));
    output.push_str(&format!("   arXiv ID: {}\n", paper.id));
    output.push_str(&format!("   Published: {}\n", paper.published_display()));
    output.push_str(&format!("   Categories: {}\n", paper.category_list()));
    output.push_str(&format!(
        "   Abstract: {}...\n",
        truncate_chars(&paper.summary, ABSTRACT_PREVIEW_CHARS)
    ));
    output.push_str(&format!("   URL: {}\n\n", paper.abs_url()));

    output
}

/// Format the full record of a single paper.
#[must_use]
pub fn format_paper_details_markdown(paper: &Paper) -> String {
    let mut output = format!("**{}**\n\n", paper.title_or_default());

    output.push_str(&format!("**arXiv ID:** {}\n", paper.id));
    output.push_str(&format!("**Authors:** {}\n", paper.author_names()));
    output.push_str(&format!("**Published:** {}\n", paper.published_display()));
    output.push_str(&format!("**Updated:** {}\n", paper.updated_display()));
    output.push_str(&format!("**Categories:** {}\n", paper.category_list()));
    output.push_str(&format!("**URL:** {}\n", paper.abs_url()));
    output.push_str(&format!("**PDF:** {}\n", paper.pdf_link()));

    if let Some(doi) = &paper.doi {
        output.push_str(&format!("**DOI:** {doi}\n"));
    }
    if let Some(journal_ref) = &paper.journal_ref {
        output.push_str(&format!("**Journal Ref:** {journal_ref}\n"));
    }
    if let Some(comment) = &paper.comment {
        output.push_str(&format!("**Comment:** {comment}\n"));
    }

    output.push_str(&format!("\n**Abstract:**\n{}\n", paper.summary));

    output
}

/// Message for an id the API does not know.
#[must_use]
pub fn paper_not_found(arxiv_id: &str) -> String {
    format!("Paper with ID {arxiv_id} not found.")
}
