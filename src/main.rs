//! Promptsmith: assemble preset-driven prompts for code-generation LLMs.
//!
//! This is the main entry point for the `promptsmith` CLI. It parses
//! arguments, sets up logging, runs the command, and maps errors to exit codes.

mod brief;
mod cli;
mod commands;
mod error;
mod exit_codes;
mod fs;
mod prompt;
mod registry;

use cli::Cli;
use log::LevelFilter;
use std::process::ExitCode;

/// Log to stderr so stdout carries nothing but the prompt.
///
/// Verbosity flags pick the level; `RUST_LOG` overrides it when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            log::debug!("run failed: {:?}", err);
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
