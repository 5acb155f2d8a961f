//! Separator sets and the word/separator tokenizer.
//!
//! Definitions are scanned as an alternating sequence of maximal runs: a run
//! of separator characters, or a run of anything else. Nothing is dropped, so
//! the tokens always concatenate back to the input.

mod separators;
mod tokenizer;

pub use separators::{DEFAULT_SEPARATORS, SeparatorSet};
pub use tokenizer::{Token, TokenKind, Tokens, next_token, tokens};
