//! Deterministic ordering of glossary terms.
//!
//! Terms are ordered by repeatedly extracting the minimum element under a
//! caller-supplied comparator. The comparator is an ordinary function value,
//! so alternate orderings never touch the sort itself.

use std::cmp::Ordering;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Named orderings selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermOrdering {
    /// Byte-wise comparison of the UTF-8 text.
    #[default]
    Lexicographic,
    /// ASCII case folded first, byte order as the tie-break.
    CaseInsensitive,
}

impl TermOrdering {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            TermOrdering::Lexicographic => a.cmp(b),
            TermOrdering::CaseInsensitive => a
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
                .then_with(|| a.cmp(b)),
        }
    }
}

/// Remove and return the minimum entry of `queue` under `cmp`.
///
/// Among equal entries the earliest one is taken. Returns `None` when the
/// queue is empty.
pub fn remove_min<F>(queue: &mut VecDeque<String>, mut cmp: F) -> Option<String>
where
    F: FnMut(&str, &str) -> Ordering,
{
    let mut min = 0;
    for i in 1..queue.len() {
        if cmp(&queue[min], &queue[i]) == Ordering::Greater {
            min = i;
        }
    }
    queue.remove(min)
}

/// Sort terms into non-decreasing order under `cmp`.
///
/// The result is a permutation of the input.
pub fn sort_terms_by<S, F>(terms: impl IntoIterator<Item = S>, mut cmp: F) -> Vec<String>
where
    S: Into<String>,
    F: FnMut(&str, &str) -> Ordering,
{
    let mut pending: VecDeque<String> = terms.into_iter().map(Into::into).collect();
    let mut sorted = Vec::with_capacity(pending.len());
    while let Some(min) = remove_min(&mut pending, &mut cmp) {
        sorted.push(min);
    }
    sorted
}

/// Sort terms into non-decreasing lexicographic order.
///
/// # Examples
///
/// ```
/// use glossgen::sort_terms;
///
/// assert_eq!(sort_terms(["ha", "d", "paper", "app"]), ["app", "d", "ha", "paper"]);
/// ```
pub fn sort_terms<S: Into<String>>(terms: impl IntoIterator<Item = S>) -> Vec<String> {
    sort_terms_by(terms, |a, b| a.cmp(b))
}
