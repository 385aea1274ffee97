//! Single-file inspection
//!
//! Opens one LAS file and gathers everything the load reported into a
//! serializable [`InspectionReport`]: the load error if any, the warnings,
//! summary messages and the curves with their resolved mnemonics.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::app::models::{Document, Warning};
use crate::app::services::las_parser::stats::ReadStats;
use crate::app::services::mnemonic::MnemonicLookup;
use crate::config::LasConfig;
use crate::{Error, Result};

/// Curve as seen by an inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveReport {
    pub input_name: String,
    pub name: String,
    pub mnemonic: String,
    pub unit: String,
}

/// Outcome of inspecting one LAS file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    pub file: String,
    pub rows_read: usize,

    /// Error that aborted the load
    pub open_error: Option<String>,

    /// Warnings recorded while loading
    pub warnings: Vec<Warning>,

    /// File-level findings (wrapped file, no data, load error)
    pub messages: Vec<String>,

    pub curves: Vec<CurveReport>,

    /// Input curve names without a standard mnemonic, sorted; empty without a dictionary
    pub missing_mnemonics: Vec<String>,

    pub stats: ReadStats,
}

impl InspectionReport {
    /// True when the file loaded without error or warnings
    pub fn is_clean(&self) -> bool {
        self.open_error.is_none() && self.warnings.is_empty() && self.messages.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::json("Failed to serialize inspection report", e))
    }
}

/// Load `path` and report everything the load found
pub fn inspect_file(
    path: &Path,
    config: &LasConfig,
    dictionary: Option<Arc<dyn MnemonicLookup>>,
) -> InspectionReport {
    let file = path.display().to_string();
    let has_dictionary = dictionary.is_some();

    let mut doc = Document::new(config.clone());
    doc.set_dictionary(dictionary);

    let (rows_read, open_error) = match doc.open(path) {
        Ok(rows) => (rows, None),
        Err(e) => (0, Some(e.to_string())),
    };

    let mut messages = Vec::new();
    if doc.is_wrapped() {
        messages.push(format!("file '{}' ignored, WRAP=YES", file));
    }
    if doc.num_points() == 0 || rows_read == 0 {
        messages.push(format!("file '{}', no data read, ignored", file));
    }
    if let Some(error) = &open_error {
        messages.push(format!("file '{}': {}", file, error));
    }

    let curves: Vec<CurveReport> = doc
        .curves()
        .iter()
        .map(|c| CurveReport {
            input_name: c.input_name.clone(),
            name: c.name.clone(),
            mnemonic: c.mnemonic.clone(),
            unit: c.unit.clone(),
        })
        .collect();

    let mut missing_mnemonics: Vec<String> = if has_dictionary {
        curves
            .iter()
            .filter(|c| c.mnemonic.is_empty())
            .map(|c| c.input_name.clone())
            .collect()
    } else {
        Vec::new()
    };
    missing_mnemonics.sort();
    missing_mnemonics.dedup();

    info!(
        "Inspected {}: {} rows, {} warnings, {} messages",
        file,
        rows_read,
        doc.warnings().len(),
        messages.len()
    );

    InspectionReport {
        file,
        rows_read,
        open_error,
        warnings: doc.warnings().as_slice().to_vec(),
        messages,
        curves,
        missing_mnemonics,
        stats: doc.stats().clone(),
    }
}
