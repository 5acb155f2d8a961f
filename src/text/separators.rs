//! The set of characters that delimit tokens.

use std::collections::HashSet;

/// Delimiters used when no configuration overrides them: space, tab and comma.
pub const DEFAULT_SEPARATORS: &str = " \t,";

/// An immutable set of separator characters.
///
/// Only membership matters; duplicates in the source string collapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Build a set from every distinct character of `delimiters`.
    ///
    /// An empty string produces an empty set, in which case every text is a
    /// single word token.
    ///
    /// # Examples
    ///
    /// ```
    /// use glossgen::SeparatorSet;
    ///
    /// let set = SeparatorSet::build(" \t, ");
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains(','));
    /// ```
    pub fn build(delimiters: &str) -> Self {
        Self {
            chars: delimiters.chars().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate over the separators in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::build(DEFAULT_SEPARATORS)
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}
