//! Repair command implementation
//!
//! Loads one file, applies the corrective defaults of the loader plus an
//! optional NULL replacement and writes the result in the canonical layout.

use anyhow::Context;
use colored::*;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::shared::ProcessingStats;
use crate::app::models::Document;
use crate::cli::args::RepairArgs;
use crate::config::LasConfig;

/// Repair command runner
pub fn run_repair(args: &RepairArgs, config: &LasConfig) -> anyhow::Result<ProcessingStats> {
    let start_time = Instant::now();
    debug!("Repair arguments: {:?}", args);
    args.validate().context("Invalid repair arguments")?;

    let mut doc = Document::new(config.clone());
    let rows = match doc.open(&args.input) {
        Ok(rows) => rows,
        Err(error) => {
            for warning in doc.warnings() {
                warn!("{} {}", warning.section, warning);
            }
            return Err(error)
                .with_context(|| format!("Failed to load {}", args.input.display()));
        }
    };

    if let Some(null) = args.null {
        info!("Replacing NULL {} with {}", doc.null(), null);
        doc.set_null(null);
    }

    doc.save(&args.output, args.use_mnemonic)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.save_warnings {
        let path = args.warnings_path();
        doc.warnings()
            .save(&path)
            .with_context(|| format!("Failed to save warnings to {}", path.display()))?;
    }

    let size = std::fs::metadata(&args.output).map(|m| m.len()).unwrap_or(0);
    let stats = ProcessingStats {
        rows_read: rows,
        curves_read: doc.curves().len(),
        warnings_recorded: doc.warnings().len(),
        errors_encountered: 0,
        output: Some((args.output.clone(), size)),
        processing_time: start_time.elapsed(),
    };

    println!(
        "{} {} -> {}",
        "Repaired".green().bold(),
        args.input.display(),
        args.output.display().to_string().bright_cyan()
    );
    println!(
        "  rows: {}  curves: {}  warnings: {}  size: {}  time: {:.2?}",
        stats.rows_read,
        stats.curves_read,
        stats.warnings_recorded,
        ProcessingStats::format_size(size),
        stats.processing_time
    );

    Ok(stats)
}
