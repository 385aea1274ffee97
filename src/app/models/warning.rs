//! Diagnostic warnings and the capped collector that stores them

use super::{Direction, Section};
use crate::constants::WARNING_LIMIT_MESSAGE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Default separator between records in [`WarningCollector::to_string_with`]
pub const RECORD_SEPARATOR: &str = "\n";
/// Default separator between fields of one warning
pub const FIELD_SEPARATOR: &str = ",";

/// One recoverable anomaly found while reading or writing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub direction: Direction,
    pub section: Section,

    /// 1-based source line, `None` when the anomaly is not tied to a line
    pub line: Option<usize>,

    pub message: String,
}

impl Warning {
    pub fn new(
        direction: Direction,
        section: Section,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            direction,
            section,
            line,
            message: message.into(),
        }
    }

    /// Warning raised while reading
    pub fn read(section: Section, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Direction::Read, section, line, message)
    }

    /// Warning raised while writing
    pub fn write(section: Section, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::new(Direction::Write, section, line, message)
    }

    /// Line number for display, 0 when not line-addressable
    pub fn display_line(&self) -> usize {
        self.line.unwrap_or(0)
    }

    /// `line<sep> "message"` with the line right-aligned in three columns
    pub fn to_csv_string(&self, sep: &str) -> String {
        format!("{:3}{} \"{}\"", self.display_line(), sep, self.message)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {},\t\"{}\"", self.display_line(), self.message)
    }
}

/// Append-only warning list that stops recording after a fixed number of entries
///
/// When the `max`-th warning is recorded a sentinel warning is appended, so
/// the collector holds at most `max + 1` entries. Later warnings are only
/// counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCollector {
    items: Vec<Warning>,
    max: usize,
    suppressed: usize,
}

impl WarningCollector {
    pub fn new(max: usize) -> Self {
        Self {
            items: Vec::new(),
            max,
            suppressed: 0,
        }
    }

    /// Record a warning, returning `false` when the cap has already been reached
    pub fn push(&mut self, warning: Warning) -> bool {
        if self.items.len() >= self.max {
            self.suppressed += 1;
            return false;
        }

        debug!("{} {}", warning.section, warning);
        self.items.push(warning);

        if self.items.len() == self.max {
            warn!("Warning limit of {} reached, further warnings suppressed", self.max);
            self.items.push(Warning::new(
                Direction::Read,
                Section::Unclassified,
                None,
                WARNING_LIMIT_MESSAGE,
            ));
        }
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configured cap
    pub fn max(&self) -> usize {
        self.max
    }

    /// True once the sentinel has been appended
    pub fn limit_reached(&self) -> bool {
        self.max > 0 && self.items.len() > self.max
    }

    /// Number of warnings dropped after the cap was reached
    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Warning] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.suppressed = 0;
    }

    /// Join all warnings as `index<field_sep> line<field_sep> "message"<record_sep>`
    ///
    /// Returns an empty string when nothing was recorded.
    pub fn to_string_with(&self, record_sep: &str, field_sep: &str) -> String {
        let mut out = String::new();
        for (i, warning) in self.items.iter().enumerate() {
            out.push_str(&format!(
                "{:2}{} {}{}",
                i,
                field_sep,
                warning.to_csv_string(field_sep),
                record_sep
            ));
        }
        out
    }

    /// Write one `index, warning` line per entry, returning the number written
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize> {
        for (i, warning) in self.items.iter().enumerate() {
            writeln!(writer, "{}, {}", i, warning)
                .map_err(|e| Error::io("Failed to write warnings", e))?;
        }
        Ok(self.items.len())
    }

    /// Save the warnings to `path`; no file is created when there are none
    pub fn save(&self, path: &Path) -> Result<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        let file = std::fs::File::create(path).map_err(|e| {
            Error::io(format!("Failed to create warning file {}", path.display()), e)
        })?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;
        Ok(())
    }
}

impl Default for WarningCollector {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_MAX_WARNING_COUNT)
    }
}

impl<'a> IntoIterator for &'a WarningCollector {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
