//! LAS Processor Library
//!
//! A Rust library for reading, validating and writing well-log files in the
//! LAS (Log ASCII Standard) text format.
//!
//! This library provides tools for:
//! - Parsing LAS headers with both the pre-2.0 and the 2.0+ well-name dialects
//! - Reading depth-indexed curve data with recovery from malformed rows
//! - Validating headers through a pluggable rule checker with corrective defaults
//! - Collecting line-addressed diagnostics with a configurable cap
//! - Writing documents back out in the canonical LAS 2.0 layout
//!
//! # Example
//!
//! ```no_run
//! use las_processor::{Document, LasConfig};
//!
//! let mut doc = Document::new(LasConfig::default());
//! let rows = doc.open(std::path::Path::new("well.las"))?;
//! println!("{} rows, {} curves, {} warnings", rows, doc.curves().len(), doc.warnings().len());
//! # Ok::<(), las_processor::Error>(())
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod checker;
        pub mod curve_registry;
        pub mod inspection;
        pub mod las_parser;
        pub mod las_writer;
        pub mod mnemonic;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Curve, Direction, Document, HeaderParam, Section, Warning};
pub use app::services::mnemonic::{MnemonicDictionary, MnemonicLookup};
pub use config::LasConfig;

/// Result type alias for the LAS processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for LAS reading and writing operations
///
/// Only conditions that abort a load or a save are errors. Everything the
/// reader can recover from is recorded as a [`Warning`] on the document.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Source bytes could not be decoded to text
    #[error("Decode error in file '{file}': {message}")]
    Decode { file: String, message: String },

    /// A fatal header rule failed (WRAP=YES, no curve section)
    #[error("{message}")]
    FatalCheck { rule: String, message: String },

    /// Internal invariant violated while reading or trimming curve data
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Writer was asked to save a document without curves
    #[error("Curves not exist, nothing to save")]
    NoCurves,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization failed
    #[error("JSON serialization error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decode error
    pub fn decode(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a fatal check error for the named rule
    pub fn fatal_check(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FatalCheck {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create an internal invariant error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create the error returned when saving a document without curves
    pub fn no_curves() -> Self {
        Self::NoCurves
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a JSON serialization error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// True for errors raised by a fatal header rule
    pub fn is_fatal_check(&self) -> bool {
        matches!(self, Self::FatalCheck { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
