//! Read statistics for LAS loading
//!
//! Counters collected while a document is loaded, kept on the document for
//! reporting.

/// Simple read statistics
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadStats {
    /// Number of lines up to and including the `~A` marker
    pub header_lines: usize,

    /// Number of non-blank, non-comment lines after the `~A` marker
    pub data_lines: usize,

    /// Number of rows stored in the curves
    pub rows_accepted: usize,

    /// Number of rows dropped because the depth column was not numeric
    pub rows_rejected: usize,

    /// Number of times the curve buffers were doubled
    pub buffer_expansions: usize,
}

impl ReadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            header_lines: 0,
            data_lines: 0,
            rows_accepted: 0,
            rows_rejected: 0,
            buffer_expansions: 0,
        }
    }

    /// Share of data lines that became rows, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.data_lines == 0 {
            0.0
        } else {
            (self.rows_accepted as f64 / self.data_lines as f64) * 100.0
        }
    }
}

impl Default for ReadStats {
    fn default() -> Self {
        Self::new()
    }
}
