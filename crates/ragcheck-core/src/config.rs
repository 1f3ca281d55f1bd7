//! Evaluation configuration loaded from a local JSON file.
//!
//! The credential file keeps the backend API key out of the environment;
//! it is read once at startup and passed explicitly into the components
//! that need it. A missing file or missing key is fatal before any
//! evaluation begins.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{RagcheckError, Result};

/// Default location of the credential/config file
pub const DEFAULT_CONFIG_PATH: &str = "./config/config.json";

const DEFAULT_CHAT_MODEL: &str = "gpt-4-0125-preview";
const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
const DEFAULT_API_BASE: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_PAUSE_SECS: u64 = 1;

/// On-disk layout. Only the API key is required; everything else has a
/// default matching the reference pipeline.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    embedding_model: Option<String>,
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    request_timeout_secs: Option<u64>,
    #[serde(default)]
    judgment_pause_secs: Option<u64>,
    #[serde(default)]
    bert_rescale_baseline: Option<f64>,
}

/// Resolved evaluation configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    /// Chat model used for claim judgment
    pub model: String,
    /// Embedding model used for the similarity metrics
    pub embedding_model: String,
    /// API base URL, overridable so tests can point at a local server
    pub api_base: String,
    pub request_timeout: Duration,
    /// Courtesy pause after each successful judgment
    pub judgment_pause: Duration,
    /// Baseline for rescaling BERT-style scores; 0.0 disables rescaling
    pub bert_rescale_baseline: f64,
}

impl Config {
    /// Load configuration from `path`, failing fast when the file or the
    /// API key is absent.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RagcheckError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RagcheckError::Io(e)
            }
        })?;

        let file: ConfigFile =
            serde_json::from_str(&content).map_err(|e| RagcheckError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let openai_api_key = match file.openai_api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(RagcheckError::MissingApiKey {
                    path: path.to_path_buf(),
                })
            }
        };

        Ok(Config {
            openai_api_key,
            model: file.model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            embedding_model: file
                .embedding_model
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
            api_base: file.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            request_timeout: Duration::from_secs(
                file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            judgment_pause: Duration::from_secs(
                file.judgment_pause_secs.unwrap_or(DEFAULT_PAUSE_SECS),
            ),
            bert_rescale_baseline: file.bert_rescale_baseline.unwrap_or(0.0),
        })
    }

    /// Default on-disk location
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExitCode;
    use std::fs;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_with_key_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"OPENAI_API_KEY": "sk-test"}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.embedding_model, DEFAULT_EMBEDDING_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.judgment_pause, Duration::from_secs(1));
        assert_eq!(config.bert_rescale_baseline, 0.0);
    }

    #[test]
    fn load_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{
                "OPENAI_API_KEY": "sk-test",
                "model": "gpt-4o",
                "api_base": "http://localhost:9999",
                "judgment_pause_secs": 0,
                "bert_rescale_baseline": 0.83
            }"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.api_base, "http://localhost:9999");
        assert_eq!(config.judgment_pause, Duration::ZERO);
        assert_eq!(config.bert_rescale_baseline, 0.83);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, RagcheckError::ConfigNotFound { .. }));
        assert_eq!(err.exit_code(), ExitCode::Config);
    }

    #[test]
    fn missing_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"model": "gpt-4o"}"#);
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, RagcheckError::MissingApiKey { .. }));
    }

    #[test]
    fn empty_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, r#"{"OPENAI_API_KEY": "  "}"#);
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, RagcheckError::MissingApiKey { .. }));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "not json");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, RagcheckError::InvalidConfig { .. }));
    }
}
