//! Synchronous OpenAI-compatible HTTP client.
//!
//! One blocking request per call, matching the row-by-row evaluation
//! model. Temperature is pinned to zero for the judgment calls. The base
//! URL is configurable so tests can point at a local mock server.

use serde_json::{json, Value};

use super::{Embedder, Generator};
use crate::config::Config;
use crate::error::{RagcheckError, Result};

pub struct OpenAiClient {
    agent: ureq::Agent,
    api_base: String,
    api_key: String,
    model: String,
    embedding_model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.request_timeout)
            .build();

        Self {
            agent,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
            embedding_model: config.embedding_model.clone(),
        }
    }

    fn post(&self, path: &str, body: Value) -> Result<Value> {
        let url = format!("{}{}", self.api_base, path);

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body);

        match response {
            Ok(res) => res.into_json().map_err(|e| RagcheckError::BackendShape {
                reason: format!("invalid JSON body: {e}"),
            }),
            Err(ureq::Error::Status(code, res)) => {
                let body = res.into_string().unwrap_or_default();
                Err(RagcheckError::BackendStatus { status: code, body })
            }
            Err(ureq::Error::Transport(e)) => Err(RagcheckError::BackendTransport(e.to_string())),
        }
    }
}

impl Generator for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0,
        });

        let response = self.post("/v1/chat/completions", body)?;

        response
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| RagcheckError::BackendShape {
                reason: "missing choices[0].message.content".to_string(),
            })
    }
}

impl Embedder for OpenAiClient {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = json!({
            "model": self.embedding_model,
            "input": texts,
        });

        let response = self.post("/v1/embeddings", body)?;

        let data = response
            .get("data")
            .and_then(|d| d.as_array())
            .ok_or_else(|| RagcheckError::BackendShape {
                reason: "missing data array".to_string(),
            })?;

        let mut indexed: Vec<(usize, Vec<f32>)> = Vec::with_capacity(data.len());
        for item in data {
            let index = item
                .get("index")
                .and_then(|i| i.as_u64())
                .ok_or_else(|| RagcheckError::BackendShape {
                    reason: "embedding item missing index".to_string(),
                })? as usize;
            let vector = item
                .get("embedding")
                .and_then(|e| e.as_array())
                .ok_or_else(|| RagcheckError::BackendShape {
                    reason: "embedding item missing vector".to_string(),
                })?
                .iter()
                .map(|v| v.as_f64().unwrap_or(0.0) as f32)
                .collect();
            indexed.push((index, vector));
        }

        if indexed.len() != texts.len() {
            return Err(RagcheckError::BackendShape {
                reason: format!("expected {} embeddings, got {}", texts.len(), indexed.len()),
            });
        }

        indexed.sort_by_key(|(index, _)| *index);
        Ok(indexed.into_iter().map(|(_, vector)| vector).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_base: String) -> Config {
        Config {
            openai_api_key: "sk-test".to_string(),
            model: "gpt-4-0125-preview".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            api_base,
            request_timeout: Duration::from_secs(5),
            judgment_pause: Duration::ZERO,
            bert_rescale_baseline: 0.0,
        }
    }

    #[tokio::test]
    async fn complete_returns_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({ "temperature": 0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": "hello" } }]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&test_config(server.uri()));
        let out = tokio::task::spawn_blocking(move || client.complete("hi"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn complete_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&test_config(server.uri()));
        let err = tokio::task::spawn_blocking(move || client.complete("hi"))
            .await
            .unwrap()
            .unwrap_err();
        match err {
            RagcheckError::BackendStatus { status, body } => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limited"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn embed_orders_vectors_by_index() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    { "index": 1, "embedding": [0.0, 1.0] },
                    { "index": 0, "embedding": [1.0, 0.0] }
                ]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&test_config(server.uri()));
        let texts = vec!["a".to_string(), "b".to_string()];
        let vectors = tokio::task::spawn_blocking(move || client.embed(&texts))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(vectors, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[tokio::test]
    async fn embed_rejects_short_responses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "index": 0, "embedding": [1.0] }]
            })))
            .mount(&server)
            .await;

        let client = OpenAiClient::new(&test_config(server.uri()));
        let texts = vec!["a".to_string(), "b".to_string()];
        let err = tokio::task::spawn_blocking(move || client.embed(&texts))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, RagcheckError::BackendShape { .. }));
    }

    #[test]
    fn embed_of_nothing_makes_no_request() {
        let client = OpenAiClient::new(&test_config("http://127.0.0.1:1".to_string()));
        assert!(client.embed(&[]).unwrap().is_empty());
    }
}
