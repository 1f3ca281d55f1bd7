//! Core library for ragcheck, a QA answer-evaluation pipeline.
//!
//! The pipeline collates logged candidate answers with a golden
//! benchmark, scores each pair with lexical and embedding metrics, asks
//! an LLM backend for a claim-based judgment, and persists one wide
//! result row per question.
//!
//! Modules:
//! - `collate`: response-log extraction, benchmark reading, row pairing
//! - `config`: configuration file loading and defaults
//! - `error`: the crate-wide error type and exit-code mapping
//! - `judge`: claim-judgment prompt, reply parsing, metric derivation
//! - `lexical`: BLEU, ROUGE, embedding-based BERT-style scores
//! - `llm`: generation and embedding backend traits plus the OpenAI client
//! - `logging`: tracing initialization
//! - `runner`: per-row evaluation loop and result persistence
//! - `text`: shared tokenization helpers

pub mod collate;
pub mod config;
pub mod error;
pub mod judge;
pub mod lexical;
pub mod llm;
pub mod logging;
pub mod runner;
pub mod text;

pub use config::Config;
pub use error::{ExitCode, RagcheckError, Result};
