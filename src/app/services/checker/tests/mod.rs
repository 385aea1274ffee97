//! Test utilities for header checker testing

use crate::app::models::Document;


/// Document with only its header read from `lines`
pub fn header_document(lines: &[&str]) -> Document {
    let mut doc = Document::default();
    doc.load_header_lines(lines);
    doc
}

/// Header lines of a document that passes every rule
pub fn valid_header() -> Vec<&'static str> {
    vec![
        "~V",
        "VERS. 2.0 :",
        "WRAP. NO :",
        "~W",
        "STRT.M 0.0 :",
        "STOP.M 10.0 :",
        "STEP.M 0.5 :",
        "NULL. -999.25 :",
        "WELL. W-1 :",
        "~C",
        "DEPT.M :",
        "GR.API :",
    ]
}

/// Valid header with one well-section line replaced or removed
pub fn header_with_well_line(name: &str, replacement: Option<&'static str>) -> Vec<&'static str> {
    let prefix = format!("{}.", name);
    valid_header()
        .into_iter()
        .filter_map(|line| {
            if line.starts_with(&prefix) {
                replacement
            } else {
                Some(line)
            }
        })
        .collect()
}
