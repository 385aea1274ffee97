//! Shared components for CLI commands
//!
//! This module contains the statistics returned by every command, logging
//! setup and the layered configuration used by the command runners.

use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::args::Args;
use crate::config::LasConfig;

/// Statistics reported by a command run
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of data rows read
    pub rows_read: usize,
    /// Number of curves in the document
    pub curves_read: usize,
    /// Number of warnings recorded, including the limit marker
    pub warnings_recorded: usize,
    /// Number of errors that prevented a load or a save
    pub errors_encountered: usize,
    /// Written file and its size in bytes
    pub output: Option<(PathBuf, u64)>,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// True when the command ran without errors
    pub fn is_success(&self) -> bool {
        self.errors_encountered == 0
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from `--verbose` and
/// `--quiet`.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (defaults -> env -> args)
pub fn build_config(args: &Args) -> anyhow::Result<LasConfig> {
    let mut config = LasConfig::from_env().context("Invalid LAS_* environment settings")?;

    if let Some(max_warnings) = args.max_warnings {
        config = config.with_max_warning_count(max_warnings);
    }

    config.validate().context("Invalid configuration")?;
    debug!("Configuration: {:?}", config);
    Ok(config)
}
