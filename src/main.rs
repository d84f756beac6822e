//! postsmith: generate blog posts for a static site with a local language model.
//!
//! This is the main entry point for the `postsmith` CLI. It parses arguments,
//! sets up logging, runs the command on a single-threaded runtime while
//! watching for Ctrl-C, and maps errors to exit codes.

mod cli;
mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod model;
pub mod topic;

use cli::Cli;
use error::PostError;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let result = tokio::select! {
        result = commands::run(cli) => result,
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => Err(PostError::Cancelled),
            Err(e) => Err(PostError::io("failed to listen for Ctrl-C", e)),
        },
    };

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(PostError::Cancelled) => {
            eprintln!("\nCancelled by user");
            ExitCode::from(PostError::Cancelled.exit_code() as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr; the full chain only with --verbose
            eprintln!("Error: {}", err);
            tracing::debug!(error = ?err, "run failed");

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
