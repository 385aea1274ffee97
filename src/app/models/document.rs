//! LAS document
//!
//! A [`Document`] owns the parameter tables of every header section, the curve
//! registry and the warning collector of one LAS file. It is populated by a
//! single load and afterwards only changed through [`Document::set_null`] and
//! [`Document::set_step`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Section, Warning, WarningCollector};
use crate::app::services::curve_registry::CurveRegistry;
use crate::app::services::las_parser::data_reader::estimate_points;
use crate::app::services::las_parser::header::HeaderSection;
use crate::app::services::las_parser::line_grammar::ParamGrammar;
use crate::app::services::las_parser::stats::ReadStats;
use crate::app::services::las_parser::{self, parser};
use crate::app::services::las_writer;
use crate::app::services::mnemonic::MnemonicLookup;
use crate::config::LasConfig;
use crate::constants::{DEFAULT_VERSION, DEFAULT_WRAP, MAX_PREALLOCATED_POINTS, params};
use crate::Result;

/// Parsed LAS file
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) config: LasConfig,
    pub(crate) file_name: Option<PathBuf>,
    pub(crate) version: HeaderSection,
    pub(crate) well: HeaderSection,
    pub(crate) curve_info: HeaderSection,
    pub(crate) parameters: HeaderSection,
    pub(crate) other: HeaderSection,
    pub(crate) curves: CurveRegistry,
    pub(crate) warnings: WarningCollector,
    pub(crate) stats: ReadStats,
    pub(crate) dictionary: Option<Arc<dyn MnemonicLookup>>,
}

impl Document {
    /// Create an empty document with the given tunables
    pub fn new(config: LasConfig) -> Self {
        let warnings = WarningCollector::new(config.max_warning_count);
        Self {
            config,
            file_name: None,
            version: HeaderSection::new(ParamGrammar::Generic),
            well: HeaderSection::new(ParamGrammar::Generic),
            curve_info: HeaderSection::new(ParamGrammar::Curve),
            parameters: HeaderSection::new(ParamGrammar::Generic),
            other: HeaderSection::new(ParamGrammar::Generic),
            curves: CurveRegistry::new(),
            warnings,
            stats: ReadStats::new(),
            dictionary: None,
        }
    }

    /// Attach a mnemonic lookup used to annotate curves on load
    pub fn with_dictionary(mut self, dictionary: Arc<dyn MnemonicLookup>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    pub fn set_dictionary(&mut self, dictionary: Option<Arc<dyn MnemonicLookup>>) {
        self.dictionary = dictionary;
    }

    /// Drop everything read by a previous load, keeping config and dictionary
    pub fn reset(&mut self) {
        let config = self.config.clone();
        let dictionary = self.dictionary.take();
        *self = Self::new(config);
        self.dictionary = dictionary;
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Read, validate and load a LAS file, returning the number of data rows
    pub fn open(&mut self, path: &Path) -> Result<usize> {
        let text = parser::read_source(path)?;
        self.reset();
        self.file_name = Some(path.to_path_buf());
        parser::load_lines(self, &las_parser::split_lines(&text))
    }

    /// Load already decoded lines, returning the number of data rows
    pub fn load<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<usize> {
        self.reset();
        parser::load_lines(self, lines)
    }

    /// Load LAS text, returning the number of data rows
    pub fn load_str(&mut self, text: &str) -> Result<usize> {
        self.load(&las_parser::split_lines(text))
    }

    /// Read only the header of a LAS file, without checks or data
    pub fn load_header(&mut self, path: &Path) -> Result<()> {
        let text = parser::read_source(path)?;
        self.reset();
        self.file_name = Some(path.to_path_buf());
        parser::load_header_lines(self, &las_parser::split_lines(&text));
        Ok(())
    }

    /// Read only the header from already decoded lines
    pub fn load_header_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.reset();
        parser::load_header_lines(self, lines);
    }

    // =========================================================================
    // Writing
    // =========================================================================

    /// Render the document in the canonical LAS 2.0 layout
    pub fn to_las_bytes(&mut self, use_mnemonic: bool) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        las_writer::write_document(self, &mut buffer, use_mnemonic)?;
        Ok(buffer)
    }

    /// Write the document to `writer` in the canonical LAS 2.0 layout
    pub fn write_las<W: Write>(&mut self, writer: &mut W, use_mnemonic: bool) -> Result<()> {
        las_writer::write_document(self, writer, use_mnemonic)
    }

    /// Save the document to `path`, creating missing parent directories
    pub fn save(&mut self, path: &Path, use_mnemonic: bool) -> Result<()> {
        las_writer::save_document(self, path, use_mnemonic)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &LasConfig {
        &self.config
    }

    /// Path of the file this document was opened from
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    pub fn version_section(&self) -> &HeaderSection {
        &self.version
    }

    pub fn well_section(&self) -> &HeaderSection {
        &self.well
    }

    pub fn curve_section(&self) -> &HeaderSection {
        &self.curve_info
    }

    pub fn parameter_section(&self) -> &HeaderSection {
        &self.parameters
    }

    pub fn other_section(&self) -> &HeaderSection {
        &self.other
    }

    pub fn curves(&self) -> &CurveRegistry {
        &self.curves
    }

    pub fn curves_mut(&mut self) -> &mut CurveRegistry {
        &mut self.curves
    }

    pub fn warnings(&self) -> &WarningCollector {
        &self.warnings
    }

    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    /// Record a warning, subject to the configured cap
    pub fn add_warning(&mut self, warning: Warning) -> bool {
        self.warnings.push(warning)
    }

    /// Number of data rows held by every curve
    pub fn num_points(&self) -> usize {
        self.curves.rows()
    }

    /// VERS, 2.0 when absent or not a number
    pub fn vers(&self) -> f64 {
        self.version.value_f64(params::VERS).unwrap_or(DEFAULT_VERSION)
    }

    /// WRAP, `NO` when absent
    pub fn wrap(&self) -> &str {
        match self.version.value(params::WRAP) {
            Some(wrap) if !wrap.is_empty() => wrap,
            _ => DEFAULT_WRAP,
        }
    }

    /// True when WRAP declares multi-line records
    pub fn is_wrapped(&self) -> bool {
        self.wrap().to_uppercase().contains('Y')
    }

    /// NULL value, the configured standard NULL when absent
    pub fn null(&self) -> f64 {
        self.well.value_f64(params::NULL).unwrap_or(self.config.std_null)
    }

    /// STRT, NULL when absent
    pub fn strt(&self) -> f64 {
        self.well.value_f64(params::STRT).unwrap_or_else(|| self.null())
    }

    /// STOP, NULL when absent
    pub fn stop(&self) -> f64 {
        self.well.value_f64(params::STOP).unwrap_or_else(|| self.null())
    }

    /// STEP, NULL when absent
    pub fn step(&self) -> f64 {
        self.well.value_f64(params::STEP).unwrap_or_else(|| self.null())
    }

    pub fn is_strt_empty(&self) -> bool {
        self.well.value_f64(params::STRT).is_none()
    }

    pub fn is_stop_empty(&self) -> bool {
        self.well.value_f64(params::STOP).is_none()
    }

    pub fn is_step_empty(&self) -> bool {
        self.well.value_f64(params::STEP).is_none()
    }

    /// Well name, empty when absent
    pub fn well(&self) -> &str {
        self.well.value(params::WELL).unwrap_or("")
    }

    /// Initial row capacity estimated from STRT, STOP and STEP
    pub fn expected_points(&self) -> usize {
        if self.is_strt_empty() || self.is_stop_empty() || self.is_step_empty() {
            return self.config.expected_points.min(MAX_PREALLOCATED_POINTS);
        }
        estimate_points(self.strt(), self.stop(), self.step(), self.config.expected_points)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Change NULL, rewriting every cell equal to the old NULL in every curve
    pub fn set_null(&mut self, null: f64) {
        let old = self.null();
        for curve in self.curves.iter_mut() {
            curve.replace_value(old, null);
        }
        self.well.set_value(params::NULL, null.to_string());
    }

    /// Change STEP in the well section
    pub fn set_step(&mut self, step: f64) {
        self.well.set_value(params::STEP, step.to_string());
    }

    /// Set or replace a well-section parameter
    pub fn set_well_param(&mut self, name: &str, value: impl Into<String>) {
        self.well.set_value(name, value);
    }

    /// Record a warning about the data section at `line`
    pub(crate) fn data_warning(&mut self, line: Option<usize>, message: impl Into<String>) {
        self.warnings.push(Warning::read(Section::Data, line, message));
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// True when both documents agree on STRT, STOP, STEP, NULL, row count and curve names
    pub fn same_summary(&self, other: &Document) -> bool {
        self.strt() == other.strt()
            && self.stop() == other.stop()
            && self.step() == other.step()
            && self.null() == other.null()
            && self.num_points() == other.num_points()
            && self.curves.same_names(&other.curves)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(LasConfig::default())
    }
}
