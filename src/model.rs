//! The in-memory glossary: unique terms mapped to their definitions.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::error::{Error, Result};
use crate::sort::sort_terms_by;

/// A single term and its definition text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: String,
    pub definition: String,
}

impl GlossaryEntry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Mapping from term to definition, built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term. A term that is already present is rejected.
    pub fn insert(&mut self, term: impl Into<String>, definition: impl Into<String>) -> Result<()> {
        match self.entries.entry(term.into()) {
            hash_map::Entry::Occupied(e) => Err(Error::DuplicateTerm(e.key().clone())),
            hash_map::Entry::Vacant(e) => {
                e.insert(definition.into());
                Ok(())
            }
        }
    }

    /// Build a glossary from entries, failing on the first duplicate term.
    pub fn from_entries(entries: impl IntoIterator<Item = GlossaryEntry>) -> Result<Self> {
        let mut glossary = Self::new();
        for entry in entries {
            glossary.insert(entry.term, entry.definition)?;
        }
        Ok(glossary)
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(term, definition)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, d)| (t.as_str(), d.as_str()))
    }

    /// All terms, ordered by `cmp`.
    pub fn sorted_terms_by<F>(&self, cmp: F) -> Vec<String>
    where
        F: FnMut(&str, &str) -> std::cmp::Ordering,
    {
        sort_terms_by(self.entries.keys().cloned(), cmp)
    }
}

/// Terms name output files, so they may not contain path separators.
pub(crate) fn validate_term(term: &str) -> Result<()> {
    if term.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidTerm(term.to_string()));
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Glossary {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
