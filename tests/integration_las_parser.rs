//! Integration tests for LAS reading through the public API
//!
//! These tests write LAS files to temporary locations and load them with
//! [`Document`], checking recovery behaviour and the recorded warnings.

use las_processor::app::services::inspection::inspect_file;
use las_processor::{Document, Error, LasConfig, MnemonicDictionary, Section};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn las_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn las_text(step: &str, rows: &[&str]) -> String {
    let mut text = format!(
        "~Version information\n VERS. 2.0 :\n WRAP. NO :\n~Well information\n STRT.M 0.0 :\n STOP.M 3.0 :\n STEP.M {} :\n NULL. -999.25 :\n WELL. Test Well :\n~Curve information\n DEPT.M : depth\n SP.MV : self potential\n~ASCII\n",
        step
    );
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    text
}

/// Purpose: a row whose depth jumps is reported on its own line
#[test]
fn test_depth_jump_reported_on_its_row() {
    let file = las_file(&las_text("1.0", &["0.0 1", "1.0 2", "2.0 3", "5.0 4"]));
    let mut doc = Document::new(LasConfig::default());
    assert_eq!(doc.open(file.path()).unwrap(), 4);

    let warnings: Vec<_> = doc.warnings().iter().collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].section, Section::Data);
    assert_eq!(warnings[0].line, Some(17));
    assert_eq!(doc.curves().depth().unwrap().depth, vec![0.0, 1.0, 2.0, 5.0]);
}

/// Purpose: regular depths produce no warnings
#[test]
fn test_regular_depths_produce_no_warning() {
    let file = las_file(&las_text("1.0", &["0.0 1", "1.0 2", "2.0 3", "3.0 4"]));
    let mut doc = Document::new(LasConfig::default());
    assert_eq!(doc.open(file.path()).unwrap(), 4);
    assert!(doc.warnings().is_empty());
}

/// Purpose: duplicate curve names are made unique with the registry size
#[test]
fn test_duplicate_curve_names_are_unique() {
    let text = "~C\nDEPT.M :\nSP.MV :\nSP.MV :\n~A\n1.0 2 3\n1.5 4 5\n";
    let mut doc = Document::default();
    assert_eq!(doc.load_str(text).unwrap(), 2);

    let names = doc.curves().names();
    assert_eq!(names, vec!["DEPT", "SP", "SP2"]);
    assert_eq!(doc.curves().by_name("SP2").unwrap().values, vec![3.0, 5.0]);
}

/// Purpose: WRAP=YES aborts before any data is read
#[test]
fn test_wrapped_file_reads_zero_rows() {
    let text = las_text("1.0", &["0.0 1", "1.0 2"]).replace("WRAP. NO", "WRAP.    YES");
    let file = las_file(&text);
    let mut doc = Document::default();

    let error = doc.open(file.path()).unwrap_err();
    assert!(matches!(error, Error::FatalCheck { .. }));
    assert_eq!(error.to_string(), "Wrapped files not support");
    assert_eq!(doc.num_points(), 0);
    assert_eq!(doc.curves().len(), 2);
}

/// Purpose: messy real-world header spacing still parses
#[test]
fn test_irregular_header_spacing() {
    let text = "~V\n VERS .        2.0 : cp_866\n~W\n\t STRT   . M     0.5 : start\nSTOP  M  \t 1.0 :stop\n STEP.\t0.25   : step\n NULL.   -999.250   :NULL VALUE\n WELL.  Well  A-7  :name\n~C\n DEPT . M : depth\n GR   . API  : gamma\n~A\n0.5 1\n0.75 2\n1.0 3\n";
    let mut doc = Document::default();
    assert_eq!(doc.load_str(text).unwrap(), 3);
    assert_eq!(doc.vers(), 2.0);
    assert_eq!(doc.strt(), 0.5);
    assert_eq!(doc.stop(), 1.0);
    assert_eq!(doc.step(), 0.25);
    assert_eq!(doc.null(), -999.25);
    assert_eq!(doc.well(), "Well A-7");
    assert_eq!(doc.curves().by_name("GR").unwrap().unit, "API");
    assert!(doc.warnings().is_empty());
}

/// Purpose: recoverable problems accumulate without discarding accepted rows
#[test]
fn test_recoverable_problems_keep_accepted_rows() {
    let text = las_text("0", &["0.0 1", "1.0", "bad 2", "2.0 x", "3.0 4 9"]);
    let mut doc = Document::default();
    assert_eq!(doc.load_str(&text).unwrap(), 4);

    assert_eq!(doc.step(), 1.0);
    assert_eq!(
        doc.curves().by_name("SP").unwrap().values,
        vec![1.0, -999.25, -999.25, 4.0]
    );
    let messages: Vec<&str> = doc.warnings().iter().map(|w| w.message.as_str()).collect();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0], "STEP parameter equal 0");
}

/// Purpose: the configured cap bounds recorded warnings
#[test]
fn test_small_warning_cap() {
    let text = las_text("1.0", &["0.0", "1.0", "2.0", "3.0"]);
    let mut doc = Document::new(LasConfig::default().with_max_warning_count(2));
    assert_eq!(doc.load_str(&text).unwrap(), 4);
    assert_eq!(doc.warnings().len(), 3);
    assert_eq!(doc.warnings().suppressed(), 2);
}

/// Purpose: inspection collects the load outcome for reporting
#[test]
fn test_inspection_report() {
    let file = las_file(&las_text("1.0", &["0.0 1", "1.0"]));
    let dictionary = MnemonicDictionary::new()
        .with_mnemonic("DEPT", "depth")
        .with_alias("SP", "SP");

    let report = inspect_file(file.path(), &LasConfig::default(), Some(Arc::new(dictionary)));
    assert_eq!(report.rows_read, 2);
    assert!(report.open_error.is_none());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.curves[0].mnemonic, "DEPT");
    assert_eq!(report.curves[1].mnemonic, "SP");
    assert!(report.missing_mnemonics.is_empty());

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rows_read"], 2);
    assert_eq!(value["warnings"][0]["line"], 15);
}
