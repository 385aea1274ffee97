//! Command implementations for the LAS processor CLI
//!
//! Each command is implemented in its own module and works on a single file.

pub mod check;
pub mod header;
pub mod repair;
pub mod shared;

pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};

/// Main command runner for the LAS processor
///
/// This function sets up logging, builds the configuration and dispatches to
/// the subcommand handler:
/// - `check`: inspection report of one file
/// - `repair`: load, correct and rewrite one file
/// - `header`: header sections of one file
pub fn run(args: Args) -> anyhow::Result<ProcessingStats> {
    shared::setup_logging(&args);
    let config = shared::build_config(&args)?;

    match &args.command {
        Some(Commands::Check(check_args)) => check::run_check(check_args, &config),
        Some(Commands::Repair(repair_args)) => repair::run_repair(repair_args, &config),
        Some(Commands::Header(header_args)) => header::run_header(header_args, &config),
        None => anyhow::bail!("No command given, see --help"),
    }
}
