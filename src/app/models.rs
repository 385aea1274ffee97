//! Core data models for LAS well-log documents
//!
//! This module contains the fundamental data structures for representing a
//! parsed LAS file: header parameters, depth-indexed curves, diagnostic
//! warnings and the [`Document`] that owns them all.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod document;
pub mod warning;

pub use document::Document;
pub use warning::{Warning, WarningCollector};

// =============================================================================
// Diagnostic Tags
// =============================================================================

/// Whether a diagnostic was raised while reading or while writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Read,
    Write,
}

/// LAS section a diagnostic refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    VersionInfo,
    WellInfo,
    CurveInfo,
    Data,
    Unclassified,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::VersionInfo => "~V",
            Section::WellInfo => "~W",
            Section::CurveInfo => "~C",
            Section::Data => "~A",
            Section::Unclassified => "--",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Header Parameter
// =============================================================================

/// One parsed header line: `NAME.UNIT VALUE : DESCRIPTION`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaderParam {
    /// Parameter mnemonic, unique within its section
    pub name: String,

    /// Unit token, empty when none
    pub unit: String,

    /// Raw value text
    pub value: String,

    /// Free text after the last `:`
    pub description: String,

    /// 1-based source line, `None` for parameters set programmatically
    pub line: Option<usize>,
}

impl HeaderParam {
    /// Create a parameter that did not come from a source line
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            value: value.into(),
            description: description.into(),
            line: None,
        }
    }

    /// Attach the 1-based source line
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Value parsed as a number, `None` when empty or not numeric
    pub fn value_f64(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }
}

// =============================================================================
// Curve
// =============================================================================

/// One depth-indexed measurement series
///
/// `depth` and `values` always have the same length. Curve 0 of a document is
/// the depth curve and carries the depth column in both buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Registration order, 0 is the depth curve
    pub index: usize,

    /// Name as written in the curve section
    pub input_name: String,

    /// Name made unique within the document
    pub name: String,

    /// Standard mnemonic, empty when unknown
    pub mnemonic: String,

    pub unit: String,
    pub description: String,

    pub depth: Vec<f64>,
    pub values: Vec<f64>,
}

impl Curve {
    /// Create an empty curve with buffers pre-allocated for `capacity` samples
    pub fn new(
        index: usize,
        input_name: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        description: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            index,
            input_name: input_name.into(),
            name: name.into(),
            mnemonic: String::new(),
            unit: unit.into(),
            description: description.into(),
            depth: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Append one sample
    pub fn push(&mut self, depth: f64, value: f64) {
        self.depth.push(depth);
        self.values.push(value);
    }

    /// Make room for at least `capacity` samples in total
    pub fn reserve_total(&mut self, capacity: usize) {
        if capacity > self.depth.len() {
            self.depth.reserve(capacity - self.depth.len());
        }
        if capacity > self.values.len() {
            self.values.reserve(capacity - self.values.len());
        }
    }

    /// Shorten the curve to `n` samples
    ///
    /// Does nothing unless `0 < n < len`.
    pub fn set_len(&mut self, n: usize) {
        if n == 0 || n >= self.len() {
            return;
        }
        self.depth.truncate(n);
        self.values.truncate(n);
        self.depth.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Replace every value equal to `old` with `new`, returning the number of cells changed
    pub fn replace_value(&mut self, old: f64, new: f64) -> usize {
        let mut changed = 0;
        for value in self.values.iter_mut().filter(|v| **v == old) {
            *value = new;
            changed += 1;
        }
        changed
    }

    /// Name used on output, optionally replaced by the mnemonic when one is known
    pub fn output_name(&self, use_mnemonic: bool) -> &str {
        if use_mnemonic && !self.mnemonic.is_empty() {
            &self.mnemonic
        } else {
            &self.name
        }
    }
}
