//! Check command implementation
//!
//! Loads one file and prints its inspection report, either as colored text
//! or as JSON.

use anyhow::Context;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

use super::shared::ProcessingStats;
use crate::app::services::inspection::{InspectionReport, inspect_file};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::LasConfig;

/// Check command runner
pub fn run_check(args: &CheckArgs, config: &LasConfig) -> anyhow::Result<ProcessingStats> {
    let start_time = Instant::now();
    info!("Checking {}", args.file.display());
    debug!("Check arguments: {:?}", args);

    let report = inspect_file(&args.file, config, None);

    match args.format {
        OutputFormat::Human => print!("{}", format_human_report(&report)),
        OutputFormat::Json => {
            let json = report
                .to_json()
                .context("Failed to render the inspection report")?;
            println!("{}", json);
        }
    }

    Ok(ProcessingStats {
        rows_read: report.rows_read,
        curves_read: report.curves.len(),
        warnings_recorded: report.warnings.len(),
        errors_encountered: usize::from(report.open_error.is_some()),
        output: None,
        processing_time: start_time.elapsed(),
    })
}

/// Render the report as colored text
pub fn format_human_report(report: &InspectionReport) -> String {
    let mut out = String::new();

    let status = if report.open_error.is_some() {
        "FAILED".red().bold()
    } else if report.warnings.is_empty() {
        "OK".green().bold()
    } else {
        "WARNINGS".yellow().bold()
    };
    out.push_str(&format!("{} {}\n", report.file.bright_cyan(), status));
    out.push_str(&format!(
        "  rows: {}  curves: {}  warnings: {}\n",
        report.rows_read,
        report.curves.len(),
        report.warnings.len()
    ));

    for message in &report.messages {
        out.push_str(&format!("  {}\n", message.yellow()));
    }

    if !report.curves.is_empty() {
        out.push_str(&format!("{}\n", "Curves:".bold()));
        for curve in &report.curves {
            out.push_str(&format!(
                "  input log: {} \t mnemonic: {}\n",
                curve.name, curve.mnemonic
            ));
        }
    }

    if !report.warnings.is_empty() {
        out.push_str(&format!("{}\n", "Warnings:".bold()));
        for (i, warning) in report.warnings.iter().enumerate() {
            out.push_str(&format!("  {}, {} {}\n", i, warning.section, warning));
        }
    }

    if !report.missing_mnemonics.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "Missing mnemonics:".bold(),
            report.missing_mnemonics.join(", ")
        ));
    }

    out
}
