//! Tokenizers backing the lexical metrics.
//!
//! BLEU matches the reference scorer's plain whitespace split; ROUGE uses
//! lowercase alphanumeric tokens with Porter stemming. Stop words are
//! deliberately kept: n-gram overlap metrics need every token.

use rust_stemmers::{Algorithm, Stemmer};
use std::sync::OnceLock;

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Whitespace tokens, case preserved (BLEU)
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(|s| s.to_string()).collect()
}

/// Lowercase alphanumeric tokens with Porter stemming (ROUGE).
///
/// Tokens of three characters or fewer are left unstemmed, matching the
/// reference ROUGE scorer.
pub fn stemmed_tokens(text: &str) -> Vec<String> {
    let stemmer = get_stemmer();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.len() > 3 {
                stemmer.stem(s).to_string()
            } else {
                s.to_string()
            }
        })
        .collect()
}
