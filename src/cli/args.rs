//! Command-line argument definitions for the LAS processor
//!
//! This module defines the CLI interface using the clap derive API. Every
//! subcommand works on a single file.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the LAS well-log processor
///
/// Reads LAS (Log ASCII Standard) files, reports header and data problems as
/// line-addressed warnings and writes repaired files in the canonical LAS 2.0
/// layout.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las-processor",
    version,
    about = "Read, validate and rewrite LAS well-log files",
    long_about = "Reads LAS (Log ASCII Standard) well-log files, checks the header for \
                  problems such as a zero STEP or NULL, recovers from malformed data rows \
                  and writes the result back in the canonical LAS 2.0 layout."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only show errors"
    )]
    pub quiet: bool,

    /// Warning cap per file
    ///
    /// Overrides `LAS_MAX_WARNING_COUNT`. When the cap is reached one extra
    /// warning marks the limit and later warnings are dropped.
    #[arg(
        long = "max-warnings",
        value_name = "COUNT",
        global = true,
        help = "Maximum number of warnings recorded per file"
    )]
    pub max_warnings: Option<usize>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load a file and report its warnings
    Check(CheckArgs),
    /// Load a file and write it back in the canonical layout
    Repair(RepairArgs),
    /// Print the header sections of a file without reading data
    Header(HeaderArgs),
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// LAS file to check
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the report
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Report format"
    )]
    pub format: OutputFormat,
}

/// Arguments for the repair command
#[derive(Debug, Clone, Parser)]
pub struct RepairArgs {
    /// LAS file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path of the repaired file, parent directories are created
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Replace the NULL value, rewriting matching cells
    #[arg(long = "null", value_name = "VALUE", allow_hyphen_values = true)]
    pub null: Option<f64>,

    /// Write standard mnemonics instead of curve names where known
    #[arg(long = "use-mnemonic")]
    pub use_mnemonic: bool,

    /// Also save the warnings next to the output as `<OUTPUT>.warnings`
    #[arg(long = "save-warnings")]
    pub save_warnings: bool,
}

/// Arguments for the header command
#[derive(Debug, Clone, Parser)]
pub struct HeaderArgs {
    /// LAS file whose header is printed
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl RepairArgs {
    /// Validate the repair arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.input == self.output {
            return Err(Error::configuration(format!(
                "Output path must differ from input path: {}",
                self.input.display()
            )));
        }
        if let Some(null) = self.null {
            if !null.is_finite() || null == 0.0 {
                return Err(Error::configuration(format!(
                    "NULL must be a non-zero finite number, got {}",
                    null
                )));
            }
        }
        Ok(())
    }

    /// Path of the warning file written with `--save-warnings`
    pub fn warnings_path(&self) -> PathBuf {
        let mut name = self.output.as_os_str().to_os_string();
        name.push(".warnings");
        PathBuf::from(name)
    }
}
