//! LAS parser for well-log files
//!
//! This module turns decoded LAS text into a populated
//! [`Document`](crate::app::models::Document). The reader recovers from most
//! malformed input and records every anomaly as a line-addressed warning
//! instead of failing.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`line_grammar`] - Splitting one header line into name, unit, value and description
//! - [`header`] - Section tables and the section state machine
//! - [`data_reader`] - Numeric rows of the `~A` section
//! - [`parser`] - Load orchestration: header, checks, corrective defaults, data
//! - [`stats`] - Read statistics
//!
//! ## Usage
//!
//! ```rust
//! use las_processor::{Document, LasConfig};
//!
//! let text = "~V\nVERS. 2.0 :\n~W\nSTRT.M 0.0 :\nSTOP.M 0.2 :\nSTEP.M 0.1 :\nNULL. -999.25 :\nWELL. A-1 :\n~C\nDEPT.M :\nSP.MV :\n~A\n0.0 1.5\n0.1 1.6\n0.2 1.7\n";
//! let mut doc = Document::new(LasConfig::default());
//! let rows = doc.load_str(text)?;
//! assert_eq!(rows, 3);
//! assert_eq!(doc.well(), "A-1");
//! # Ok::<(), las_processor::Error>(())
//! ```

pub mod data_reader;
pub mod header;
pub mod line_grammar;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::{HeaderSection, HeaderState};
pub use line_grammar::{ParamGrammar, WellDialect};
pub use parser::step_from_data;
pub use stats::ReadStats;

/// Split decoded text into lines, dropping a trailing `\r` from each
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
