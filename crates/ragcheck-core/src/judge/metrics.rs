//! Count reconciliation and metric derivation.

use super::types::MetricTriple;

/// Reconciliation policy for backend count inconsistencies.
///
/// The common-claim set is by definition a subset of the candidate's
/// claims, so a reported candidate total below the common total is an
/// enumeration omission, not a contradiction: the candidate count is
/// raised to match.
pub fn reconcile_candidate_count(candidate_count: u64, common_count: u64) -> u64 {
    candidate_count.max(common_count)
}

/// Derive recall/precision/F1 from reconciled counts.
///
/// Returns `None` when the golden count is zero - that is an input-data
/// defect the caller must surface, not a zero score. The F1 zero-guard
/// reads the final precision/recall values, i.e. after reconciliation.
pub fn derive(golden_count: u64, candidate_count: u64, common_count: u64) -> Option<MetricTriple> {
    if golden_count == 0 {
        return None;
    }

    let recall = common_count as f64 / golden_count as f64;
    let precision = if candidate_count == 0 {
        0.0
    } else {
        common_count as f64 / candidate_count as f64
    };
    let f1 = if precision == 0.0 || recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    Some(MetricTriple {
        recall,
        precision,
        f1,
    })
}
