//! Atom feed decoding.
//!
//! The arXiv query API answers with an Atom 1.0 feed plus `arxiv:` and
//! `opensearch:` extension elements. Links and extension elements are
//! interleaved inside an entry, which is why `quick-xml` is built with
//! `overlapped-lists`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::models::Paper;
use crate::text::collapse_whitespace;

/// Marker in the entry id of an API error report.
const ERROR_ID_MARKER: &str = "/api/errors";

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "totalResults", alias = "opensearch:totalResults", default)]
    total_results: Option<u64>,

    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    id: String,

    #[serde(default)]
    title: String,

    #[serde(default)]
    summary: String,

    #[serde(default)]
    published: Option<String>,

    #[serde(default)]
    updated: Option<String>,

    #[serde(rename = "author", default)]
    authors: Vec<Author>,

    #[serde(rename = "link", default)]
    links: Vec<Link>,

    #[serde(rename = "category", default)]
    categories: Vec<Category>,

    #[serde(alias = "arxiv:primary_category", default)]
    primary_category: Option<Category>,

    #[serde(alias = "arxiv:comment", default)]
    comment: Option<String>,

    #[serde(alias = "arxiv:journal_ref", default)]
    journal_ref: Option<String>,

    #[serde(alias = "arxiv:doi", default)]
    doi: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Author {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct Link {
    #[serde(rename = "@href", default)]
    href: String,

    #[serde(rename = "@rel", default)]
    rel: Option<String>,

    #[serde(rename = "@title", default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(rename = "@term", default)]
    term: String,
}

/// Result of decoding a feed.
#[derive(Debug, Clone, Default)]
pub struct FeedPage {
    /// Total matches reported by the API, when present.
    pub total_results: Option<u64>,
    /// Decoded papers in feed order.
    pub papers: Vec<Paper>,
}

/// Decode an arXiv Atom feed into papers.
///
/// # Errors
///
/// Returns [`ClientError::Xml`] for malformed XML and
/// [`ClientError::BadRequest`] when the API reports an error entry
/// (e.g. a malformed id in `id_list`).
pub fn parse_feed(xml: &str) -> ClientResult<FeedPage> {
    let feed: Feed = quick_xml::de::from_str(xml)?;

    let mut papers = Vec::with_capacity(feed.entries.len());
    for entry in feed.entries {
        if entry.id.contains(ERROR_ID_MARKER) {
            return Err(ClientError::BadRequest { message: collapse_whitespace(&entry.summary) });
        }
        if entry.id.trim().is_empty() || entry.title.trim().is_empty() {
            continue;
        }
        papers.push(entry.into_paper());
    }

    Ok(FeedPage { total_results: feed.total_results, papers })
}

impl Entry {
    fn into_paper(self) -> Paper {
        let mut link = None;
        let mut pdf_url = None;
        for l in self.links {
            if l.title.as_deref() == Some("pdf") {
                pdf_url = Some(l.href);
            } else if l.rel.as_deref() == Some("alternate") {
                link = Some(l.href);
            }
        }

        if pdf_url.is_none() {
            pdf_url = link.as_ref().map(|abs| abs.replacen("/abs/", "/pdf/", 1));
        }

        Paper {
            id: id_from_entry_url(&self.id),
            title: collapse_whitespace(&self.title),
            summary: collapse_whitespace(&self.summary),
            authors: self
                .authors
                .into_iter()
                .map(|a| collapse_whitespace(&a.name))
                .filter(|n| !n.is_empty())
                .collect(),
            published: self.published.as_deref().and_then(parse_timestamp),
            updated: self.updated.as_deref().and_then(parse_timestamp),
            categories: self
                .categories
                .into_iter()
                .map(|c| c.term)
                .filter(|t| !t.is_empty())
                .collect(),
            primary_category: self.primary_category.map(|c| c.term).filter(|t| !t.is_empty()),
            link,
            pdf_url,
            comment: non_empty(self.comment),
            journal_ref: non_empty(self.journal_ref),
            doi: non_empty(self.doi),
        }
    }
}

/// `http://arxiv.org/abs/hep-th/9901001v1` -> `hep-th/9901001v1`.
fn id_from_entry_url(url: &str) -> String {
    let url = url.trim();
    match url.find("/abs/") {
        Some(idx) => url[idx + "/abs/".len()..].to_string(),
        None => url.rsplit('/').next().unwrap_or(url).to_string(),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim()).ok().map(|t| t.with_timezone(&Utc))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| collapse_whitespace(&v)).filter(|v| !v.is_empty())
}
