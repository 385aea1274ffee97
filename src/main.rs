use clap::Parser;
use las_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(stats) if stats.is_success() => process::exit(0),
        Ok(_stats) => {
            // The command already reported what went wrong
            process::exit(2);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LAS Processor - Well-Log Reader, Validator and Writer");
    println!("=====================================================");
    println!();
    println!("Read LAS (Log ASCII Standard) well-log files, report header and data");
    println!("problems as line-addressed warnings and rewrite them in the canonical");
    println!("LAS 2.0 layout.");
    println!();
    println!("USAGE:");
    println!("    las-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    check       Load a file and report its warnings");
    println!("    repair      Load a file and write it back in the canonical layout");
    println!("    header      Print the header sections of a file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose           Increase logging verbosity");
    println!("    -q, --quiet             Only show errors");
    println!("        --max-warnings N    Maximum number of warnings recorded per file");
    println!("    -h, --help              Show help information");
    println!("    -V, --version           Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check a file and print the report as JSON:");
    println!("    las-processor check well.las --format json");
    println!();
    println!("    # Rewrite a file with a new NULL value:");
    println!("    las-processor repair well.las fixed/well.las --null -9999");
    println!();
    println!("For detailed help on any command, use:");
    println!("    las-processor <COMMAND> --help");
}
