//! LAS writer for well-log documents
//!
//! This module serializes a [`Document`] back to text in the canonical LAS
//! 2.0 layout. The output bytes are UTF-8; re-encoding to another codepage is
//! left to the caller.
//!
//! # Basic Usage
//!
//! ```rust
//! use las_processor::Document;
//!
//! let mut doc = Document::default();
//! doc.load_str("~W\nSTRT.M 1.0 :\nSTOP.M 1.1 :\nSTEP.M 0.1 :\nWELL. W-7 :\n~C\nDEPT.M :\nGR.API :\n~A\n1.0 10\n1.1 11\n")?;
//! let bytes = doc.to_las_bytes(false)?;
//! let text = String::from_utf8(bytes).unwrap();
//! assert!(text.starts_with("~Version information"));
//! # Ok::<(), las_processor::Error>(())
//! ```

pub mod writer;

#[cfg(test)]
mod tests;

pub use writer::LasWriter;

use std::io::Write;
use std::path::Path;

use crate::Result;
use crate::app::models::Document;

/// Write `doc` to `writer`
pub fn write_document<W: Write>(
    doc: &mut Document,
    writer: &mut W,
    use_mnemonic: bool,
) -> Result<()> {
    LasWriter::new().with_mnemonics(use_mnemonic).write(doc, writer)
}

/// Save `doc` to `path`, creating missing parent directories
pub fn save_document(doc: &mut Document, path: &Path, use_mnemonic: bool) -> Result<()> {
    LasWriter::new().with_mnemonics(use_mnemonic).save(doc, path)
}
