//! Export of a glossary as a folder of cross-linked HTML pages.
//!
//! Page generation is split in two steps:
//! - [`PageAssembler`] turns a [`Glossary`](crate::Glossary) into an
//!   in-memory [`Site`], one [`Page`] per term plus the index
//! - [`SiteExporter`] writes a `Site` into an output folder
//!
//! # Example
//!
//! ```no_run
//! use glossgen::export::{PageAssembler, SiteExporter};
//! use glossgen::read_glossary;
//!
//! let glossary = read_glossary("terms.txt")?;
//! let site = PageAssembler::new().assemble(&glossary)?;
//! SiteExporter::new().export(&site, "out")?;
//! # Ok::<(), glossgen::Error>(())
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

mod assemble;
mod html;

pub use assemble::{Page, PageAssembler, Site};
pub use html::{HtmlOptions, fragments_to_html, index_page, term_page};

/// Writes assembled pages to disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteExporter;

impl SiteExporter {
    pub fn new() -> Self {
        SiteExporter
    }

    /// Write every page of `site` into `dir`, creating it if needed.
    ///
    /// Returns the paths written, term pages first and the index last.
    pub fn export(&self, site: &Site, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut written = Vec::new();
        for page in site.pages() {
            let path = dir.join(&page.file_name);
            let mut writer = BufWriter::new(File::create(&path)?);
            page.write_to(&mut writer)?;
            writer.flush()?;
            tracing::debug!(path = %path.display(), bytes = page.contents.len(), "wrote page");
            written.push(path);
        }

        tracing::info!(dir = %dir.display(), pages = written.len(), "exported glossary site");
        Ok(written)
    }
}
