//! CLI argument parsing for ragcheck
//!
//! Uses clap derive. Global flags: --config, --quiet, --verbose,
//! --log-level.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ragcheck_core::config::DEFAULT_CONFIG_PATH;

/// Ragcheck - QA answer-evaluation CLI
#[derive(Parser, Debug)]
#[command(name = "ragcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (overrides --verbose)
    #[arg(long, global = true, env = "RAGCHECK_LOG")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a full response log against the benchmark
    Evaluate {
        /// Benchmark spreadsheet with golden responses and contexts
        #[arg(long, default_value = "./data/benchmark.xlsx")]
        benchmark: PathBuf,

        /// Plain-text log of questions and candidate answers
        #[arg(long, default_value = "./data/qna_response.txt")]
        response_file: PathBuf,

        /// Result table destination
        #[arg(long, default_value = "./data/evaluation_result.csv")]
        output: PathBuf,

        /// Intermediate collated-rows artifact
        #[arg(long, default_value = "./data/collected_response.csv")]
        intermediate: PathBuf,
    },

    /// Judge a single question/answer pair with the claim-based metric
    EvaluateQuestion {
        /// The question both answers respond to
        #[arg(long)]
        question: String,

        /// Reference answer
        #[arg(long)]
        golden_response: String,

        /// Answer under evaluation
        #[arg(long)]
        candidate_response: String,
    },
}
