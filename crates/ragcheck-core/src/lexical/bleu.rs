//! Sentence-level BLEU with smoothing.
//!
//! Uniform 4-gram weights, brevity penalty, and method-1 smoothing
//! (a small epsilon replaces zero n-gram precisions) so short answers and
//! pairs with no higher-order overlap never collapse to a hard zero.

use std::collections::HashMap;

const MAX_ORDER: usize = 4;
const SMOOTHING_EPSILON: f64 = 0.1;

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    if tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}

/// Modified n-gram precision: candidate counts clipped by reference counts.
fn modified_precision(reference: &[String], candidate: &[String], n: usize) -> f64 {
    let ref_counts = ngram_counts(reference, n);
    let cand_counts = ngram_counts(candidate, n);

    let clipped: usize = cand_counts
        .iter()
        .map(|(ngram, &count)| count.min(ref_counts.get(ngram).copied().unwrap_or(0)))
        .sum();
    let total: usize = cand_counts.values().sum();

    let denominator = total.max(1) as f64;
    if clipped == 0 {
        SMOOTHING_EPSILON / denominator
    } else {
        clipped as f64 / denominator
    }
}

/// Sentence BLEU for a single (reference, candidate) token pair.
pub fn sentence_bleu(reference: &[String], candidate: &[String]) -> f64 {
    if candidate.is_empty() {
        return 0.0;
    }

    let weight = 1.0 / MAX_ORDER as f64;
    let log_sum: f64 = (1..=MAX_ORDER)
        .map(|n| weight * modified_precision(reference, candidate, n).ln())
        .sum();

    let r = reference.len() as f64;
    let c = candidate.len() as f64;
    let brevity_penalty = if c > r { 1.0 } else { (1.0 - r / c).exp() };

    brevity_penalty * log_sum.exp()
}
