//! Lexical and embedding-based metrics for a (golden, candidate) pair.
//!
//! The runner only sees [`LexicalScores`]; how the scalars are produced
//! is behind the [`LexicalScorer`] trait so tests can supply fixed
//! values.

pub mod bert;
pub mod bleu;
pub mod rouge;

use crate::error::{RagcheckError, Result};
use crate::llm::Embedder;
use crate::text::{stemmed_tokens, whitespace_tokens};

/// The six opaque scalars merged into each result row
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LexicalScores {
    pub bleu: f64,
    pub rouge_1: f64,
    pub rouge_l: f64,
    pub bert_precision: f64,
    pub bert_recall: f64,
    pub bert_f1: f64,
    pub similarity: f64,
}

pub trait LexicalScorer {
    fn score(&self, reference: &str, candidate: &str) -> Result<LexicalScores>;
}

/// Built-in scorer: BLEU and ROUGE computed locally, BERT-style scores
/// and cosine similarity from an embedding backend.
pub struct EmbeddingLexicalScorer<'a> {
    embedder: &'a dyn Embedder,
    rescale_baseline: f64,
}

impl<'a> EmbeddingLexicalScorer<'a> {
    pub fn new(embedder: &'a dyn Embedder, rescale_baseline: f64) -> Self {
        Self {
            embedder,
            rescale_baseline,
        }
    }
}

impl LexicalScorer for EmbeddingLexicalScorer<'_> {
    fn score(&self, reference: &str, candidate: &str) -> Result<LexicalScores> {
        let ref_tokens = whitespace_tokens(reference);
        let cand_tokens = whitespace_tokens(candidate);

        if ref_tokens.is_empty() || cand_tokens.is_empty() {
            return Ok(LexicalScores::default());
        }

        let bleu = bleu::sentence_bleu(&ref_tokens, &cand_tokens);
        let rouge_1 = rouge::rouge_1(&stemmed_tokens(reference), &stemmed_tokens(candidate));
        let rouge_l = rouge::rouge_l(&stemmed_tokens(reference), &stemmed_tokens(candidate));

        // One batched call: per-token vectors for both sides, then the
        // two whole texts for the similarity scalar.
        let mut inputs = Vec::with_capacity(ref_tokens.len() + cand_tokens.len() + 2);
        inputs.extend(ref_tokens.iter().cloned());
        inputs.extend(cand_tokens.iter().cloned());
        inputs.push(reference.to_string());
        inputs.push(candidate.to_string());

        let mut vectors = self.embedder.embed(&inputs)?;
        if vectors.len() != inputs.len() {
            return Err(RagcheckError::BackendShape {
                reason: format!("expected {} embeddings, got {}", inputs.len(), vectors.len()),
            });
        }

        let candidate_text_vec = vectors.pop().unwrap_or_default();
        let reference_text_vec = vectors.pop().unwrap_or_default();
        let cand_vecs = vectors.split_off(ref_tokens.len());
        let ref_vecs = vectors;

        let bert = bert::greedy_match(&ref_vecs, &cand_vecs, self.rescale_baseline);
        let similarity = bert::cosine(&reference_text_vec, &candidate_text_vec);

        Ok(LexicalScores {
            bleu,
            rouge_1: rouge_1.fmeasure,
            rouge_l: rouge_l.fmeasure,
            bert_precision: bert.precision,
            bert_recall: bert.recall,
            bert_f1: bert.f1,
            similarity,
        })
    }
}
