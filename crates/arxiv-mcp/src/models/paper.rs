//! Paper data model decoded from the arXiv Atom feed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A paper as reported by the arXiv query API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// arXiv identifier including version (e.g. "2301.07041v2").
    pub id: String,

    /// Paper title, whitespace-normalised.
    pub title: String,

    /// Abstract, whitespace-normalised.
    pub summary: String,

    /// Author names in listed order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// First submission timestamp.
    #[serde(default)]
    pub published: Option<DateTime<Utc>>,

    /// Latest revision timestamp.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// All category terms (e.g. "cs.LG", "stat.ML").
    #[serde(default)]
    pub categories: Vec<String>,

    /// Primary category term.
    #[serde(default)]
    pub primary_category: Option<String>,

    /// Abstract page URL.
    #[serde(default)]
    pub link: Option<String>,

    /// PDF URL.
    #[serde(default)]
    pub pdf_url: Option<String>,

    /// Author comment (page counts, venue notes).
    #[serde(default)]
    pub comment: Option<String>,

    /// Journal reference.
    #[serde(default)]
    pub journal_ref: Option<String>,

    /// DOI of the published version.
    #[serde(default)]
    pub doi: Option<String>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if empty.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        if self.title.is_empty() { "Untitled" } else { &self.title }
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }

    /// Get category terms as a comma-separated string.
    #[must_use]
    pub fn category_list(&self) -> String {
        self.categories.join(", ")
    }

    /// Published timestamp in arXiv's own format, or "Unknown".
    #[must_use]
    pub fn published_display(&self) -> String {
        format_timestamp(self.published.as_ref())
    }

    /// Updated timestamp in arXiv's own format, or "Unknown".
    #[must_use]
    pub fn updated_display(&self) -> String {
        format_timestamp(self.updated.as_ref())
    }

    /// Abstract page URL, derived from the id when the feed omitted it.
    #[must_use]
    pub fn abs_url(&self) -> String {
        self.link
            .clone()
            .unwrap_or_else(|| format!("{}/{}", crate::config::api::ABS_BASE, self.id))
    }

    /// PDF URL, derived from the id when the feed omitted it.
    #[must_use]
    pub fn pdf_link(&self) -> String {
        self.pdf_url
            .clone()
            .unwrap_or_else(|| format!("{}/{}", crate::config::api::PDF_BASE, self.id))
    }
}

fn format_timestamp(ts: Option<&DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "Unknown".to_string())
}
