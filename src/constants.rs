//! Application constants for the LAS processor
//!
//! This module contains default values, section markers and the fixed output
//! layout used throughout the LAS processor.

// =============================================================================
// Defaults
// =============================================================================

/// Default NULL value used for new documents and as the replacement for NULL = 0
pub const DEFAULT_NULL: f64 = -999.25;

/// Default cap on the number of recorded warnings (the sentinel is extra)
pub const DEFAULT_MAX_WARNING_COUNT: usize = 20;

/// Row capacity used when STRT/STOP/STEP cannot give an estimate
pub const DEFAULT_EXPECTED_POINTS: usize = 1000;

/// Upper bound on the row capacity estimated from the header
pub const MAX_PREALLOCATED_POINTS: usize = 1_000_000;

/// VERS value assumed when the version section does not declare one
pub const DEFAULT_VERSION: f64 = 2.0;

/// WRAP value assumed when the version section does not declare one
pub const DEFAULT_WRAP: &str = "NO";

/// Curve name substituted when a curve line has nothing before the `.`
pub const EMPTY_CURVE_NAME: &str = "-EL-";

/// Squared difference between consecutive depth intervals above which a warning is raised
pub const DEPTH_STEP_TOLERANCE: f64 = 0.1;

/// Scale for rounding a STEP derived from the first two data rows to six decimals
pub const STEP_ROUNDING_SCALE: f64 = 1e6;

/// Message of the extra warning appended when the warning cap is reached
pub const WARNING_LIMIT_MESSAGE: &str =
    "*maximum count* of warning reached, change parameter 'max_warning_count'";

// =============================================================================
// Header Parameter Names
// =============================================================================

/// Standard parameter mnemonics of the version and well sections
pub mod params {
    pub const VERS: &str = "VERS";
    pub const WRAP: &str = "WRAP";
    pub const STRT: &str = "STRT";
    pub const STOP: &str = "STOP";
    pub const STEP: &str = "STEP";
    pub const NULL: &str = "NULL";
    pub const WELL: &str = "WELL";
}

// =============================================================================
// Section Markers
// =============================================================================

/// Leading character of a section marker line
pub const SECTION_MARKER: char = '~';

/// Leading character of a comment line
pub const COMMENT_MARKER: char = '#';

// =============================================================================
// Output Layout
// =============================================================================

/// Fixed pieces of the canonical LAS 2.0 layout produced by the writer
pub mod layout {
    pub const VERSION_SECTION: &str = "~Version information";
    pub const VERSION_COMMENT: &str = "las_processor";
    pub const WRAP_LINE: &str = "WRAP.                          NO  : ONE LINE PER DEPTH STEP";
    pub const WELL_SECTION: &str = "~Well information";
    pub const WELL_CAPTION: &str = "#MNEM.UNIT DATA                                  :DESCRIPTION";
    pub const CURVE_SECTION: &str = "~Curve Information Section";
    pub const CURVE_CAPTION: &str = "#MNEM.UNIT                 :DESCRIPTION";
    pub const DEPTH_CURVE_LINE: &str = " DEPT.M                    :";
    pub const DATA_SECTION: &str = "~ASCII Log Data";
    pub const DATA_CAPTION_PREFIX: &str = "# DEPT  |";

    /// Width of the WELL value field, longer names are truncated
    pub const WELL_FIELD_WIDTH: usize = 43;
}
