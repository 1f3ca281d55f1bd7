//! Error types and exit codes for ragcheck
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, backend, per-row evaluation errors)
//! - 2: Usage error (bad flags/args)
//! - 3: Configuration/data error (missing credential file, missing key,
//!      unreadable benchmark)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Configuration/data error (3)
    Config = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during ragcheck operations
#[derive(Error, Debug)]
pub enum RagcheckError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Configuration errors (exit code 3)
    #[error("config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("invalid config file {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("OPENAI_API_KEY is not set in {path:?}")]
    MissingApiKey { path: PathBuf },

    // Data errors (exit code 3)
    #[error("benchmark {path:?}: {reason}")]
    InvalidBenchmark { path: PathBuf, reason: String },

    #[error("column not found in benchmark: {column}")]
    ColumnNotFound { column: String },

    // Judgment errors (exit code 1)
    /// The backend's reply was not the structured object the prompt
    /// demands. Carries the raw text so the offending reply can be
    /// inspected, never substituted with zero scores.
    #[error("malformed judgment from backend: {reason}\nraw output:\n{raw}")]
    MalformedJudgment { reason: String, raw: String },

    /// A golden response that decomposes into zero claims is an input
    /// defect, not a zero score.
    #[error("golden response produced no claims for question: {question}")]
    EmptyGoldenClaims { question: String },

    #[error("row {sno} ({question}) failed: {source}")]
    RowFailed {
        sno: u32,
        question: String,
        #[source]
        source: Box<RagcheckError>,
    },

    // Backend errors (exit code 1)
    #[error("backend request failed with status {status}: {body}")]
    BackendStatus { status: u16, body: String },

    #[error("backend transport error: {0}")]
    BackendTransport(String),

    #[error("unexpected backend response shape: {reason}")]
    BackendShape { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

impl RagcheckError {
    /// Map error variants to process exit codes
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RagcheckError::UsageError(_) => ExitCode::Usage,
            RagcheckError::ConfigNotFound { .. }
            | RagcheckError::InvalidConfig { .. }
            | RagcheckError::MissingApiKey { .. }
            | RagcheckError::InvalidBenchmark { .. }
            | RagcheckError::ColumnNotFound { .. } => ExitCode::Config,
            RagcheckError::RowFailed { source, .. } => source.exit_code(),
            _ => ExitCode::Failure,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, RagcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_for_config_errors() {
        let err = RagcheckError::MissingApiKey {
            path: PathBuf::from("./config/config.json"),
        };
        assert_eq!(err.exit_code(), ExitCode::Config);
    }

    #[test]
    fn exit_code_for_usage_errors() {
        let err = RagcheckError::UsageError("bad flag".to_string());
        assert_eq!(err.exit_code(), ExitCode::Usage);
    }

    #[test]
    fn row_failed_inherits_source_exit_code() {
        let inner = RagcheckError::MalformedJudgment {
            reason: "not json".to_string(),
            raw: "oops".to_string(),
        };
        let err = RagcheckError::RowFailed {
            sno: 3,
            question: "What is the revenue?".to_string(),
            source: Box::new(inner),
        };
        assert_eq!(err.exit_code(), ExitCode::Failure);
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("What is the revenue?"));
    }

    #[test]
    fn malformed_judgment_carries_raw_text() {
        let err = RagcheckError::MalformedJudgment {
            reason: "missing field".to_string(),
            raw: "{\"partial\": true}".to_string(),
        };
        assert!(err.to_string().contains("{\"partial\": true}"));
    }
}
