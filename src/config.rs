//! Site generation settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sort::TermOrdering;
use crate::text::{DEFAULT_SEPARATORS, SeparatorSet};

/// Configuration for turning a glossary into HTML pages.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides:
///
/// ```json
/// { "separators": " \t,;", "title": "Networking Terms" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Characters that delimit words in definitions.
    pub separators: String,
    /// Suffix appended to a term to name its page.
    pub page_extension: String,
    /// File name of the index page.
    pub index_file: String,
    /// Heading shown on the index page.
    pub title: String,
    /// Order of the index and of page generation.
    pub ordering: TermOrdering,
    /// Escape `&`, `<` and `>` in emitted text, plus quotes in attributes.
    pub escape_html: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_string(),
            page_extension: ".html".to_string(),
            index_file: "index.html".to_string(),
            title: "Glossary".to_string(),
            ordering: TermOrdering::default(),
            escape_html: true,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn with_separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_ordering(mut self, ordering: TermOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// The separator set described by `separators`.
    pub fn separator_set(&self) -> SeparatorSet {
        SeparatorSet::build(&self.separators)
    }

    /// File name of the page for `term`.
    pub fn page_file_name(&self, term: &str) -> String {
        format!("{term}{}", self.page_extension)
    }
}
