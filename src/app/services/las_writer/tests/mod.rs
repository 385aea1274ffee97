//! Test utilities for LAS writer testing

use crate::app::models::Document;


/// Small two-curve LAS document as text
pub fn create_small_las(well: &str) -> String {
    format!(
        "~V\nVERS. 2.0 :\nWRAP. NO :\n~W\nSTRT.M 1.0 :\nSTOP.M 1.1 :\nSTEP.M 0.1 :\nNULL. -999.25 :\nWELL. {} :\n~C\nDEPT.M :\nGR.API :\n~A\n1.0 10\n1.1 11\n",
        well
    )
}

/// Loaded two-curve document
pub fn create_small_document() -> Document {
    let mut doc = Document::default();
    doc.load_str(&create_small_las("W-7")).unwrap();
    doc
}

/// Render `doc` to text
pub fn render(doc: &mut Document, use_mnemonic: bool) -> String {
    String::from_utf8(doc.to_las_bytes(use_mnemonic).unwrap()).unwrap()
}
