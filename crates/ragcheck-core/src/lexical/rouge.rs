//! ROUGE-1 and ROUGE-L F-measures over stemmed tokens.

use std::collections::HashMap;

/// Precision/recall/F-measure for one ROUGE variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

impl RougeScore {
    fn from_counts(overlap: usize, reference_len: usize, candidate_len: usize) -> Self {
        let precision = if candidate_len == 0 {
            0.0
        } else {
            overlap as f64 / candidate_len as f64
        };
        let recall = if reference_len == 0 {
            0.0
        } else {
            overlap as f64 / reference_len as f64
        };
        let fmeasure = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };
        RougeScore {
            precision,
            recall,
            fmeasure,
        }
    }
}

/// ROUGE-1: unigram overlap with counts clipped per token type.
pub fn rouge_1(reference: &[String], candidate: &[String]) -> RougeScore {
    let mut ref_counts: HashMap<&str, usize> = HashMap::new();
    for token in reference {
        *ref_counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let mut overlap = 0;
    for token in candidate {
        if let Some(count) = ref_counts.get_mut(token.as_str()) {
            if *count > 0 {
                *count -= 1;
                overlap += 1;
            }
        }
    }

    RougeScore::from_counts(overlap, reference.len(), candidate.len())
}

/// ROUGE-L: longest common subsequence F-measure.
pub fn rouge_l(reference: &[String], candidate: &[String]) -> RougeScore {
    let lcs = lcs_length(reference, candidate);
    RougeScore::from_counts(lcs, reference.len(), candidate.len())
}

/// LCS length via the standard two-row dynamic program.
fn lcs_length(a: &[String], b: &[String]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for token_a in a {
        for (j, token_b) in b.iter().enumerate() {
            curr[j + 1] = if token_a == token_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
