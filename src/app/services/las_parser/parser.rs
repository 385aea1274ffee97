//! Core LAS load orchestration
//!
//! This module provides the load pipeline: reading and decoding the source,
//! walking the header, running the fatal and then the standard header checks,
//! applying corrective defaults and finally reading the data section.

use std::path::Path;
use tracing::{debug, info, warn};

use super::data_reader::read_data_section;
use super::header::{is_ignored_line, read_header};
use crate::app::models::{Document, Section, Warning};
use crate::app::services::checker::Checker;
use crate::constants::STEP_ROUNDING_SCALE;
use crate::{Error, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Read a LAS file as UTF-8 text, dropping a leading byte-order mark
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    String::from_utf8(body.to_vec())
        .map_err(|e| Error::decode(path.display().to_string(), e.to_string()))
}

/// Run only the header walk, returning the index of the first data line
pub fn load_header_lines<S: AsRef<str>>(doc: &mut Document, lines: &[S]) -> usize {
    let data_start = read_header(doc, lines);
    doc.stats.header_lines = data_start;
    debug!(
        "Header read: {} curves, data starts at line {}",
        doc.curves.len(),
        data_start + 1
    );
    data_start
}

/// Full load: header, checks, corrective defaults and data
///
/// Returns the number of data rows. A failed fatal check returns its error
/// with zero rows read.
pub fn load_lines<S: AsRef<str>>(doc: &mut Document, lines: &[S]) -> Result<usize> {
    let source = doc
        .file_name
        .as_ref()
        .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string());
    info!("Loading LAS document {} ({} lines)", source, lines.len());

    let data_start = load_header_lines(doc, lines);

    let fatal = Checker::fatal().run(doc);
    if let Some(error) = fatal.fatal_error() {
        for warning in fatal.warnings() {
            doc.add_warning(warning.clone());
        }
        warn!("{}: {}", source, error);
        return Err(error);
    }

    let results = Checker::standard().run(doc);
    for warning in results.warnings() {
        doc.add_warning(warning.clone());
    }

    if results.null_wrong() {
        let std_null = doc.config.std_null;
        debug!("Replacing NULL 0 with {}", std_null);
        doc.set_null(std_null);
    }

    if results.step_wrong() {
        match step_from_data(lines, data_start) {
            Some(step) if step != 0.0 => {
                debug!("STEP derived from data: {}", step);
                doc.set_step(step);
            }
            _ => {
                doc.add_warning(Warning::read(
                    Section::WellInfo,
                    None,
                    "STEP cannot be derived from data, STEP remains invalid",
                ));
            }
        }
    }

    let capacity = doc.expected_points();
    let rows = read_data_section(doc, lines, data_start, capacity)?;

    info!(
        "Loaded {}: {} rows, {} curves, {} warnings",
        source,
        rows,
        doc.curves.len(),
        doc.warnings.len()
    );
    Ok(rows)
}

/// Depth difference of the first two data rows
///
/// Rounded to six decimals. `None` when two rows with a numeric depth do
/// not exist or a row before them has a non-numeric depth.
pub fn step_from_data<S: AsRef<str>>(lines: &[S], data_start: usize) -> Option<f64> {
    let mut depths = lines
        .iter()
        .skip(data_start)
        .map(|line| line.as_ref().trim())
        .filter(|line| !is_ignored_line(line))
        .map(|line| line.split_whitespace().next().and_then(|d| d.parse::<f64>().ok()));

    let first = depths.next()??;
    let second = depths.next()??;
    Some(((second - first) * STEP_ROUNDING_SCALE).round() / STEP_ROUNDING_SCALE)
}
