//! Test utilities for LAS parser testing
//!
//! This module provides sample LAS documents and helper functions used across
//! the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::Document;
use crate::config::LasConfig;

mod header_tests;
mod line_grammar_tests;

/// Header of a well-formed LAS 2.0 file with DEPT, SP and GR curves
pub fn create_test_header() -> String {
    r#"~Version information
 VERS.                          2.0 : test file
 WRAP.                          NO  : one line per depth step
~Well information
#MNEM.UNIT  DATA                   :DESCRIPTION
 STRT.M     1.0                    :START DEPTH
 STOP.M     1.5                    :STOP DEPTH
 STEP.M     0.1                    :STEP
 NULL.      -999.25                :NULL VALUE
 WELL.      Well 12                :WELL
~Curve Information
 DEPT.M                            :depth
 SP.MV                             :self potential
 GR.API                            :gamma ray
"#
    .to_string()
}

/// A well-formed LAS 2.0 file with six data rows
pub fn create_test_las() -> String {
    let mut content = create_test_header();
    content.push_str(
        r#"~ASCII Log Data
1.0  10.0  100.0
1.1  11.0  110.0
1.2  12.0  120.0
1.3  13.0  130.0
1.4  14.0  140.0
1.5  15.0  150.0
"#,
    );
    content
}

/// LAS text with the given well section lines and data rows
pub fn create_las_with(well_lines: &[&str], data_rows: &[&str]) -> String {
    let mut content = String::from("~V\nVERS. 2.0 :\nWRAP. NO :\n~W\n");
    for line in well_lines {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str("~C\nDEPT.M :\nSP.MV :\nGR.API :\n~A\n");
    for row in data_rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}

/// Write `content` to a temporary file
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Load `text` into a fresh document with default configuration
pub fn load_document(text: &str) -> (Document, crate::Result<usize>) {
    let mut doc = Document::new(LasConfig::default());
    let result = doc.load_str(text);
    (doc, result)
}

/// Messages of all warnings recorded on `doc`
pub fn warning_messages(doc: &Document) -> Vec<String> {
    doc.warnings().iter().map(|w| w.message.clone()).collect()
}
