//! Capability seams for the generative backend.
//!
//! Both traits are object safe so tests can substitute fixed-response
//! stubs without network access.

pub mod openai;

pub use openai::OpenAiClient;

use crate::error::Result;

/// Text completion capability used by the claim judge
pub trait Generator {
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Batched text embedding capability used by the lexical scorer
pub trait Embedder {
    /// Returns one vector per input text, in input order.
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
