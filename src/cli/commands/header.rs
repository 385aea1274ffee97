//! Header command implementation

use anyhow::Context;
use colored::*;
use std::time::Instant;
use tracing::info;

use super::shared::ProcessingStats;
use crate::app::models::Document;
use crate::app::services::las_parser::HeaderSection;
use crate::cli::args::HeaderArgs;
use crate::config::LasConfig;

/// Header command runner
pub fn run_header(args: &HeaderArgs, config: &LasConfig) -> anyhow::Result<ProcessingStats> {
    let start_time = Instant::now();
    info!("Reading header of {}", args.file.display());

    let mut doc = Document::new(config.clone());
    doc.load_header(&args.file)
        .with_context(|| format!("Failed to read header of {}", args.file.display()))?;

    print!("{}", format_header(&doc));

    Ok(ProcessingStats {
        curves_read: doc.curves().len(),
        warnings_recorded: doc.warnings().len(),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Render every non-empty header section, one parameter per line
pub fn format_header(doc: &Document) -> String {
    let sections: [(&str, &HeaderSection); 5] = [
        ("~V", doc.version_section()),
        ("~W", doc.well_section()),
        ("~C", doc.curve_section()),
        ("~P", doc.parameter_section()),
        ("~O", doc.other_section()),
    ];

    let mut out = String::new();
    for (marker, section) in sections {
        if section.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n", marker.bold()));
        for param in section.iter() {
            out.push_str(&format!(
                "  {:<8} {:<6} {:<24} : {}\n",
                param.name, param.unit, param.value, param.description
            ));
        }
    }
    for warning in doc.warnings() {
        out.push_str(&format!("{} {}\n", "warning".yellow(), warning));
    }
    out
}
