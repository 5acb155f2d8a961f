//! Combines sorted terms and rendered definitions into a set of pages.

use std::io::{self, Write};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::model::{Glossary, validate_term};
use crate::render::render;
use crate::text::SeparatorSet;

use super::html::{self, HtmlOptions};

/// A generated file: its name inside the output folder and its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub file_name: String,
    pub contents: String,
}

impl Page {
    /// Write the page contents to any destination.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.contents.as_bytes())
    }
}

/// Every page of a generated glossary site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    /// Terms in index order.
    pub terms: Vec<String>,
    /// One page per term, in the same order as `terms`.
    pub term_pages: Vec<Page>,
    pub index: Page,
}

impl Site {
    /// All pages, term pages first and the index last.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.term_pages.iter().chain(std::iter::once(&self.index))
    }

    pub fn page(&self, file_name: &str) -> Option<&Page> {
        self.pages().find(|p| p.file_name == file_name)
    }
}

/// Builds [`Site`]s from glossaries.
#[derive(Debug, Clone)]
pub struct PageAssembler {
    config: SiteConfig,
    separators: SeparatorSet,
}

impl Default for PageAssembler {
    fn default() -> Self {
        Self::with_config(SiteConfig::default())
    }
}

impl PageAssembler {
    /// Create a PageAssembler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PageAssembler with the specified configuration.
    pub fn with_config(config: SiteConfig) -> Self {
        let separators = config.separator_set();
        Self { config, separators }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn html_options(&self) -> HtmlOptions<'_> {
        HtmlOptions {
            page_extension: &self.config.page_extension,
            index_file: &self.config.index_file,
            escape: self.config.escape_html,
        }
    }

    /// The glossary's terms in configured order.
    pub fn ordered_terms(&self, glossary: &Glossary) -> Vec<String> {
        let ordering = self.config.ordering;
        glossary.sorted_terms_by(|a, b| ordering.compare(a, b))
    }

    /// Build the page for a single term, linking every known term in its
    /// definition.
    pub fn term_page(&self, term: &str, definition: &str, glossary: &Glossary) -> Page {
        let fragments = render(definition, &self.separators, glossary);
        tracing::debug!(
            term,
            fragments = fragments.len(),
            links = fragments.iter().filter(|f| f.is_link()).count(),
            "rendered term page"
        );
        Page {
            file_name: self.config.page_file_name(term),
            contents: html::term_page(term, &fragments, &self.html_options()),
        }
    }

    /// Build the index page for already ordered terms.
    pub fn index_page(&self, terms: &[String]) -> Page {
        Page {
            file_name: self.config.index_file.clone(),
            contents: html::index_page(&self.config.title, terms, &self.html_options()),
        }
    }

    /// Build the full page set for `glossary`.
    ///
    /// Fails with [`Error::InvalidTerm`] if a term cannot be used as a file
    /// name, and with [`Error::ReservedTerm`] if its page would take the index
    /// page's file name.
    pub fn assemble(&self, glossary: &Glossary) -> Result<Site> {
        let terms = self.ordered_terms(glossary);
        let mut term_pages = Vec::with_capacity(terms.len());

        for term in &terms {
            validate_term(term)?;
            if self.config.page_file_name(term) == self.config.index_file {
                return Err(Error::ReservedTerm(term.clone()));
            }
            let definition = glossary.definition(term).unwrap_or_default();
            term_pages.push(self.term_page(term, definition, glossary));
        }

        let index = self.index_page(&terms);
        tracing::info!(pages = term_pages.len() + 1, "assembled glossary site");

        Ok(Site {
            terms,
            term_pages,
            index,
        })
    }
}
