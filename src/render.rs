//! Cross-referencing of definition text against the known terms.
//!
//! A definition is split into word and separator tokens. Word tokens that
//! exactly match a glossary term become [`Fragment::Link`]s; everything else
//! is kept verbatim in [`Fragment::Plain`] runs. Adjacent plain tokens are
//! coalesced, so a definition alternates between plain text and links.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;

use crate::model::Glossary;
use crate::text::{SeparatorSet, tokens};

/// One piece of a rendered definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text passed through unlinked, separators included.
    Plain(&'a str),
    /// A token that names a glossary term.
    Link { term: &'a str, text: &'a str },
}

impl<'a> Fragment<'a> {
    /// The slice of the definition this fragment covers.
    pub fn raw_text(&self) -> &'a str {
        match *self {
            Fragment::Plain(text) => text,
            Fragment::Link { text, .. } => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Fragment::Link { .. })
    }
}

/// Read-only membership test for glossary terms.
pub trait TermLookup {
    fn contains_term(&self, token: &str) -> bool;
}

impl TermLookup for Glossary {
    fn contains_term(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl<V, S: BuildHasher> TermLookup for HashMap<String, V, S> {
    fn contains_term(&self, token: &str) -> bool {
        self.contains_key(token)
    }
}

impl<V> TermLookup for BTreeMap<String, V> {
    fn contains_term(&self, token: &str) -> bool {
        self.contains_key(token)
    }
}

impl<S: BuildHasher> TermLookup for HashSet<String, S> {
    fn contains_term(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl<T: TermLookup + ?Sized> TermLookup for &T {
    fn contains_term(&self, token: &str) -> bool {
        (**self).contains_term(token)
    }
}

/// Split `definition` into plain and linked fragments.
///
/// A token becomes a link only when it does not start with a separator and
/// matches a known term exactly. The raw texts of the returned fragments
/// concatenate to `definition`.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use glossgen::{Fragment, SeparatorSet, render};
///
/// let known = HashMap::from([("bag".to_string(), "school".to_string())]);
/// let seps = SeparatorSet::build(" \t,");
/// let fragments = render("bag has book", &seps, &known);
/// assert_eq!(fragments[0], Fragment::Link { term: "bag", text: "bag" });
/// assert_eq!(fragments[1], Fragment::Plain(" has book"));
/// ```
pub fn render<'a, L>(definition: &'a str, separators: &SeparatorSet, known: &L) -> Vec<Fragment<'a>>
where
    L: TermLookup + ?Sized,
{
    let mut fragments = Vec::new();
    let mut plain_start = 0;
    let mut position = 0;

    for token in tokens(definition, separators) {
        let start = position;
        position += token.text.len();

        let leads_with_separator = token.text.starts_with(|c: char| separators.contains(c));
        if leads_with_separator || !known.contains_term(token.text) {
            continue;
        }

        if plain_start < start {
            fragments.push(Fragment::Plain(&definition[plain_start..start]));
        }
        fragments.push(Fragment::Link {
            term: token.text,
            text: token.text,
        });
        plain_start = position;
    }

    if plain_start < definition.len() {
        fragments.push(Fragment::Plain(&definition[plain_start..]));
    }
    fragments
}

/// Join the raw text of `fragments` back into a single string.
pub fn concat_raw(fragments: &[Fragment<'_>]) -> String {
    fragments.iter().map(Fragment::raw_text).collect()
}
