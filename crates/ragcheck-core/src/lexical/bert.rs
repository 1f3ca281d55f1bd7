//! BERT-style precision/recall/F1 via greedy cosine matching of
//! per-token embeddings, with optional baseline rescaling.

/// Token-embedding similarity scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BertScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Cosine similarity between two vectors; 0.0 when either has no norm.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += f64::from(*x) * f64::from(*y);
        norm_a += f64::from(*x) * f64::from(*x);
        norm_b += f64::from(*y) * f64::from(*y);
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

fn greedy_max_mean(from: &[Vec<f32>], to: &[Vec<f32>]) -> f64 {
    if from.is_empty() || to.is_empty() {
        return 0.0;
    }
    let sum: f64 = from
        .iter()
        .map(|v| {
            to.iter()
                .map(|w| cosine(v, w))
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .sum();
    sum / from.len() as f64
}

fn rescale(score: f64, baseline: f64) -> f64 {
    if baseline <= 0.0 {
        return score;
    }
    (score - baseline) / (1.0 - baseline)
}

/// Greedy-matching score over token embedding sets.
///
/// Recall matches each reference token to its best candidate token,
/// precision the reverse. `baseline` above 0.0 applies the standard
/// linear rescale to each of the three values independently.
pub fn greedy_match(reference: &[Vec<f32>], candidate: &[Vec<f32>], baseline: f64) -> BertScore {
    let recall = greedy_max_mean(reference, candidate);
    let precision = greedy_max_mean(candidate, reference);
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    BertScore {
        precision: rescale(precision, baseline),
        recall: rescale(recall, baseline),
        f1: rescale(f1, baseline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec![0.5f32, 0.5, 0.1];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert!((cosine(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-9);
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn identical_token_sets_score_one() {
        let tokens = vec![vec![1.0f32, 0.0], vec![0.0, 1.0]];
        let score = greedy_match(&tokens, &tokens, 0.0);
        assert!((score.precision - 1.0).abs() < 1e-9);
        assert!((score.recall - 1.0).abs() < 1e-9);
        assert!((score.f1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn missing_reference_token_lowers_recall() {
        let reference = vec![vec![1.0f32, 0.0], vec![0.0, 1.0]];
        let candidate = vec![vec![1.0f32, 0.0]];
        let score = greedy_match(&reference, &candidate, 0.0);
        assert!((score.precision - 1.0).abs() < 1e-9);
        assert!((score.recall - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_side_scores_zero() {
        let reference = vec![vec![1.0f32, 0.0]];
        let score = greedy_match(&reference, &[], 0.0);
        assert_eq!(score.precision, 0.0);
        assert_eq!(score.recall, 0.0);
        assert_eq!(score.f1, 0.0);
    }

    #[test]
    fn baseline_rescale_shifts_scores() {
        let tokens = vec![vec![1.0f32, 0.0]];
        let score = greedy_match(&tokens, &tokens, 0.5);
        // (1.0 - 0.5) / (1.0 - 0.5)
        assert!((score.f1 - 1.0).abs() < 1e-9);

        let orthogonal = vec![vec![0.0f32, 1.0]];
        let low = greedy_match(&tokens, &orthogonal, 0.5);
        assert!(low.recall < 0.0);
    }
}
