//! # glossgen
//!
//! Turn a plain-text glossary into a folder of cross-linked HTML pages: one
//! page per term, plus an index listing every term in order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use glossgen::{SiteConfig, generate_site};
//!
//! let written = generate_site("terms.txt", "out", &SiteConfig::default()).unwrap();
//! println!("wrote {} pages", written.len());
//! ```
//!
//! ## Cross-referencing
//!
//! The core is a tokenizer that splits a definition into maximal runs of
//! separator and non-separator characters, and a renderer that turns word
//! tokens naming a known term into links:
//!
//! ```
//! use std::collections::HashMap;
//! use glossgen::{Fragment, SeparatorSet, render};
//!
//! let known = HashMap::from([
//!     ("bag".to_string(), "school".to_string()),
//!     ("book".to_string(), "school".to_string()),
//! ]);
//! let seps = SeparatorSet::build(" \t,");
//!
//! let fragments = render("bag has book", &seps, &known);
//! assert_eq!(
//!     fragments,
//!     [
//!         Fragment::Link { term: "bag", text: "bag" },
//!         Fragment::Plain(" has "),
//!         Fragment::Link { term: "book", text: "book" },
//!     ]
//! );
//! ```

use std::path::{Path, PathBuf};

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod model;
pub mod render;
pub mod sort;
pub mod text;
pub(crate) mod util;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use export::{Page, PageAssembler, Site, SiteExporter};
pub use import::{parse_glossary, read_glossary, read_glossary_bytes};
pub use model::{Glossary, GlossaryEntry};
pub use render::{Fragment, TermLookup, concat_raw, render};
pub use sort::{TermOrdering, remove_min, sort_terms, sort_terms_by};
pub use text::{DEFAULT_SEPARATORS, SeparatorSet, Token, TokenKind, next_token, tokens};

/// Read the glossary at `input` and write its pages into `output`.
///
/// Returns the paths of the written files.
pub fn generate_site(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &SiteConfig,
) -> Result<Vec<PathBuf>> {
    let glossary = read_glossary(input)?;
    let site = PageAssembler::with_config(config.clone()).assemble(&glossary)?;
    SiteExporter::new().export(&site, output)
}
