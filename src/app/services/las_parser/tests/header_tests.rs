//! Tests for the header section walk

use super::super::header::{HeaderSection, HeaderState, is_ignored_line, read_header};
use super::super::line_grammar::{ParamGrammar, WellDialect};
use super::{create_test_header, create_test_las};
use crate::app::models::{Document, HeaderParam, Section};
use crate::app::services::las_parser::split_lines;
use crate::app::services::mnemonic::MnemonicDictionary;
use std::sync::Arc;

#[test]
fn test_header_state_from_marker() {
    assert_eq!(HeaderState::from_marker("~Version information"), HeaderState::Version);
    assert_eq!(HeaderState::from_marker("~w"), HeaderState::WellInfo);
    assert_eq!(HeaderState::from_marker("~Curve"), HeaderState::CurveInfo);
    assert_eq!(HeaderState::from_marker("~ASCII"), HeaderState::Data);
    assert_eq!(HeaderState::from_marker("~Parameter"), HeaderState::Parameter);
    assert_eq!(HeaderState::from_marker("~Other"), HeaderState::Other);
    assert_eq!(HeaderState::from_marker("~"), HeaderState::Other);
    assert_eq!(HeaderState::WellInfo.section(), Section::WellInfo);
    assert_eq!(HeaderState::Other.section(), Section::Unclassified);
}

#[test]
fn test_is_ignored_line() {
    assert!(is_ignored_line(""));
    assert!(is_ignored_line("   \t"));
    assert!(is_ignored_line("# comment"));
    assert!(is_ignored_line("   # indented comment"));
    assert!(!is_ignored_line("STRT.M 1.0 :"));
}

#[test]
fn test_header_section_replaces_duplicates_in_place() {
    let mut section = HeaderSection::new(ParamGrammar::Generic);
    section.insert(HeaderParam::new("STRT", "M", "1.0", ""));
    section.insert(HeaderParam::new("STOP", "M", "2.0", ""));
    section.insert(HeaderParam::new("STRT", "M", "5.0", "second"));

    assert_eq!(section.len(), 2);
    assert_eq!(section.value("STRT"), Some("5.0"));
    assert_eq!(section.iter().next().map(|p| p.name.as_str()), Some("STRT"));
    assert_eq!(section.value_f64("STOP"), Some(2.0));
}

#[test]
fn test_header_section_set_value_creates_missing() {
    let mut section = HeaderSection::new(ParamGrammar::Generic);
    section.set_value("NULL", "-999.25");
    assert!(section.contains("NULL"));
    assert_eq!(section.value_f64("NULL"), Some(-999.25));
    assert_eq!(section.line_of("NULL"), None);
}

#[test]
fn test_read_header_populates_sections() {
    let text = create_test_las();
    let lines = split_lines(&text);
    let mut doc = Document::default();
    let data_start = read_header(&mut doc, &lines);

    assert_eq!(lines[data_start - 1], "~ASCII Log Data");
    assert_eq!(doc.vers(), 2.0);
    assert_eq!(doc.wrap(), "NO");
    assert_eq!(doc.strt(), 1.0);
    assert_eq!(doc.stop(), 1.5);
    assert_eq!(doc.step(), 0.1);
    assert_eq!(doc.null(), -999.25);
    assert_eq!(doc.well(), "Well 12");
    assert_eq!(doc.curves().names(), vec!["DEPT", "SP", "GR"]);
    assert_eq!(doc.curve_section().len(), 3);
    assert_eq!(doc.well_section().line_of("STRT"), Some(6));
    assert!(doc.warnings().is_empty());
}

#[test]
fn test_read_header_without_data_marker() {
    let text = create_test_header();
    let lines = split_lines(&text);
    let mut doc = Document::default();
    assert_eq!(read_header(&mut doc, &lines), lines.len());
}

#[test]
fn test_read_header_pre_v2_well_dialect() {
    let lines = ["~V", "VERS. 1.2 :", "~W", "WELL. WELL : 1 BOREHOLE", "~C", "DEPT.M :"];
    let mut doc = Document::default();
    read_header(&mut doc, &lines);
    assert_eq!(
        doc.well_section().grammar(),
        ParamGrammar::Well(WellDialect::PreV2)
    );
    assert_eq!(doc.well(), "1 BOREHOLE");
}

#[test]
fn test_read_header_duplicate_curves_get_unique_names() {
    let lines = ["~C", "DEPT.M :", "SP.MV :", "GR.API :", "SP.MV :", "SP.MV :"];
    let mut doc = Document::default();
    read_header(&mut doc, &lines);
    assert_eq!(doc.curves().names(), vec!["DEPT", "SP", "GR", "SP3", "SP4"]);
    assert!(doc.curve_section().contains("SP4"));
    assert_eq!(doc.curves().get(4).map(|c| c.input_name.as_str()), Some("SP"));
}

#[test]
fn test_read_header_ignores_lines_before_first_section() {
    let lines = ["garbage before any section", "~V", "VERS. 2.0 :"];
    let mut doc = Document::default();
    read_header(&mut doc, &lines);
    assert_eq!(doc.version_section().len(), 1);
}

#[test]
fn test_read_header_other_sections() {
    let lines = ["~P", "BHT.DEGC 35.5 : bottom hole temperature", "~O", "NOTE. free : text"];
    let mut doc = Document::default();
    read_header(&mut doc, &lines);
    assert_eq!(doc.parameter_section().value_f64("BHT"), Some(35.5));
    assert!(doc.other_section().contains("NOTE"));
}

#[test]
fn test_read_header_non_numeric_well_value_warns() {
    let lines = ["~W", "STRT.M abc : start", "~C", "DEPT.M :"];
    let mut doc = Document::default();
    read_header(&mut doc, &lines);
    assert!(doc.is_strt_empty());
    let warning = doc.warnings().iter().next().unwrap();
    assert_eq!(warning.line, Some(2));
    assert_eq!(warning.section, Section::WellInfo);
    assert!(warning.message.contains("STRT"));
}

#[test]
fn test_read_header_resolves_mnemonics() {
    let dictionary = MnemonicDictionary::new()
        .with_mnemonic("SP", "self potential")
        .with_alias("ПС", "SP");
    let mut doc = Document::default().with_dictionary(Arc::new(dictionary));
    let lines = ["~C", "DEPT.M :", "ПС.MV :", "XYZ. :"];
    read_header(&mut doc, &lines);
    let mnemonics: Vec<&str> = doc.curves().iter().map(|c| c.mnemonic.as_str()).collect();
    assert_eq!(mnemonics, vec!["", "SP", ""]);
}

#[test]
fn test_read_header_empty_curve_name_warns() {
    let lines = ["~C", "DEPT.M :", ".MV : nameless"];
    let mut doc = Document::default();
    read_header(&mut doc, &lines);
    assert_eq!(doc.curves().names(), vec!["DEPT", "-EL-"]);
    assert_eq!(doc.warnings().len(), 1);
    assert_eq!(doc.warnings().iter().next().unwrap().section, Section::CurveInfo);
}
