//! Command dispatch logic for ragcheck

mod evaluate;
mod question;

use std::time::Instant;

use ragcheck_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Evaluate {
            benchmark,
            response_file,
            output,
            intermediate,
        } => evaluate::run(cli, benchmark, response_file, output, intermediate, start),

        Commands::EvaluateQuestion {
            question,
            golden_response,
            candidate_response,
        } => question::run(cli, question, golden_response, candidate_response),
    }
}
