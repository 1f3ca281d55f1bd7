//! Ragcheck - QA answer-evaluation CLI
//!
//! Collates logged candidate answers with a golden benchmark, scores
//! each pair with lexical, embedding, and claim-based LLM metrics, and
//! writes one result row per question.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use ragcheck_core::error::ExitCode as RagcheckExitCode;
use ragcheck_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::run(&cli, start) {
        Ok(()) => ExitCode::from(RagcheckExitCode::Success as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
