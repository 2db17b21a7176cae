//! antimat CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use antimat::cli::args::*;
use antimat::cli::commands::*;
use antimat::pattern;

fn main() {
    // Parse command line arguments using clap
    let args = AntimatArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Fail at start-up rather than on the first request
    if let Err(e) = pattern::precompile() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    match execute_command(args) {
        Ok(EXIT_OK) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
