//! Splits text into maximal runs of word or separator characters.

use crate::error::{Error, Result};

use super::SeparatorSet;

/// Which character class a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// No character of the token is a separator.
    Word,
    /// Every character of the token is a separator.
    Separator,
}

impl TokenKind {
    #[inline]
    fn of(c: char, separators: &SeparatorSet) -> Self {
        if separators.contains(c) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        }
    }
}

/// A non-empty, class-homogeneous slice of the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the word or separator run starting at byte offset `position`.
///
/// The class of `text[position]` decides what is consumed: characters of the
/// same class are taken until the first character of the other class or the
/// end of the text. The result is never empty.
///
/// Fails with [`Error::InvalidOffset`] when `position` is not strictly inside
/// `text` or does not fall on a character boundary.
///
/// # Examples
///
/// ```
/// use glossgen::{SeparatorSet, next_token};
///
/// let seps = SeparatorSet::build(" \t,");
/// assert_eq!(next_token("a,nn    ,cd", 4, &seps).unwrap(), "    ,");
/// ```
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<&'a str> {
    let invalid = || Error::InvalidOffset {
        position,
        len: text.len(),
    };
    let rest = text.get(position..).ok_or_else(invalid)?;
    let first = rest.chars().next().ok_or_else(invalid)?;
    let kind = TokenKind::of(first, separators);

    let end = rest
        .char_indices()
        .find(|&(_, c)| TokenKind::of(c, separators) != kind)
        .map_or(rest.len(), |(i, _)| i);

    Ok(&rest[..end])
}

/// Lazily tokenize `text` from offset 0 to its end.
///
/// Concatenating the yielded token texts reproduces `text` exactly.
pub fn tokens<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        text,
        separators,
        position: 0,
    }
}

/// Iterator returned by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    text: &'a str,
    separators: &'s SeparatorSet,
    position: usize,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        // Offsets only ever advance by whole tokens, so they stay on char boundaries.
        let text = next_token(self.text, self.position, self.separators).ok()?;
        let kind = TokenKind::of(text.chars().next()?, self.separators);
        self.position += text.len();
        Some(Token { text, kind })
    }
}

impl std::iter::FusedIterator for Tokens<'_, '_> {}
