//! Reading the plain-text glossary format.
//!
//! The input is a sequence of records. Each record is a term on its own line
//! followed by one or more definition lines, and ends at a blank line or at
//! the end of the input:
//!
//! ```text
//! bag
//! something you carry a book in
//!
//! book
//! a printed work,
//! bound between covers
//! ```
//!
//! Definition lines are joined with a single space.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::{Glossary, validate_term};
use crate::util::decode_text;

/// Parse glossary records from already-decoded text.
pub fn parse_glossary(text: &str) -> Result<Glossary> {
    let mut glossary = Glossary::new();
    let mut lines = text.lines();

    loop {
        let Some(term) = lines.find(|l| !l.trim().is_empty()) else {
            break;
        };
        let term = term.trim();
        validate_term(term)?;

        let mut definition = String::new();
        for line in lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            if !definition.is_empty() {
                definition.push(' ');
            }
            definition.push_str(line);
        }

        tracing::debug!(term, definition_len = definition.len(), "parsed glossary entry");
        glossary.insert(term, definition)?;
    }

    Ok(glossary)
}

/// Decode raw bytes and parse them as a glossary.
pub fn read_glossary_bytes(bytes: &[u8]) -> Result<Glossary> {
    let (text, encoding) = decode_text(bytes);
    if encoding != encoding_rs::UTF_8 {
        tracing::warn!(encoding = encoding.name(), "glossary input is not UTF-8");
    }
    parse_glossary(&text)
}

/// Read and parse the glossary file at `path`.
pub fn read_glossary(path: impl AsRef<Path>) -> Result<Glossary> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let glossary = read_glossary_bytes(&bytes)?;
    tracing::info!(path = %path.display(), terms = glossary.len(), "loaded glossary");
    Ok(glossary)
}
