//! Validated arXiv identifiers.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// New-style identifier: `YYMM.NNNN` or `YYMM.NNNNN`, optional version.
static NEW_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}\.\d{4,5})(?:v(\d+))?$").expect("valid new-style id regex")
});

/// Old-style identifier: `archive[.SUB]/YYMMNNN`, optional version.
static OLD_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z][a-z\-]*(?:\.[A-Z]{2})?/\d{7})(?:v(\d+))?$")
        .expect("valid old-style id regex")
});

/// Prefixes that are stripped before matching.
static URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://(?:www\.|export\.)?arxiv\.org/(?:abs|pdf)/|arxiv:)")
        .expect("valid prefix regex")
});

/// Input that is not a recognisable arXiv identifier.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid arXiv identifier (expected e.g. 2301.07041 or hep-th/9901001)")]
pub struct InvalidArxivId(pub String);

/// A validated arXiv identifier.
///
/// Accepts bare ids, `arXiv:` prefixed ids and abs/pdf URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArxivId {
    base: String,
    version: Option<u32>,
}

impl ArxivId {
    /// Parse and normalise an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArxivId`] when the input matches neither id scheme.
    pub fn parse(input: &str) -> Result<Self, InvalidArxivId> {
        let trimmed = input.trim();
        let stripped = URL_PREFIX.replace(trimmed, "");
        let stripped = stripped.trim_end_matches('/');
        let stripped = stripped.strip_suffix(".pdf").unwrap_or(stripped);

        let captures = NEW_STYLE
            .captures(stripped)
            .or_else(|| OLD_STYLE.captures(stripped))
            .ok_or_else(|| InvalidArxivId(trimmed.to_string()))?;

        let base = captures[1].to_string();
        let version = match captures.get(2) {
            Some(v) => Some(v.as_str().parse().map_err(|_| InvalidArxivId(trimmed.to_string()))?),
            None => None,
        };

        Ok(Self { base, version })
    }

    /// Identifier without the version suffix.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Explicit version, if one was given.
    #[must_use]
    pub const fn version(&self) -> Option<u32> {
        self.version
    }

    /// Whether this is an old-style (`archive/NNNNNNN`) identifier.
    #[must_use]
    pub fn is_old_style(&self) -> bool {
        self.base.contains('/')
    }
}

impl fmt::Display for ArxivId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(v) => write!(f, "{}v{}", self.base, v),
            None => f.write_str(&self.base),
        }
    }
}

impl FromStr for ArxivId {
    type Err = InvalidArxivId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ArxivId {
    type Error = InvalidArxivId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ArxivId> for String {
    fn from(id: ArxivId) -> Self {
        id.to_string()
    }
}
