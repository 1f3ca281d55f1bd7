//! Claim-based LLM judgment of a (golden, candidate) answer pair.
//!
//! The judge asks the generative backend to decompose both answers into
//! atomic, decontextualized claims and count the golden claims present
//! in the candidate, then derives recall/precision/F1 from the counts.
//! The backend reply is semi-structured: a JSON object, possibly inside
//! a fenced code block, parsed in two independently testable stages
//! (fence stripping, then strict JSON).

pub mod extract;
pub mod metrics;
pub mod prompt;
pub mod types;

use std::time::Duration;

pub use types::{ClaimJudgment, ClaimSet, MetricTriple};

use crate::error::{RagcheckError, Result};
use crate::llm::Generator;
use extract::strip_fences;
use prompt::build_judgment_prompt;

/// Parse a raw backend reply into a judgment.
///
/// Any JSON error or missing required field is a `MalformedJudgment`
/// carrying the full raw text; zeros are never substituted.
pub fn parse_judgment(raw: &str) -> Result<ClaimJudgment> {
    let body = strip_fences(raw);
    serde_json::from_str(body).map_err(|e| RagcheckError::MalformedJudgment {
        reason: e.to_string(),
        raw: raw.to_string(),
    })
}

pub struct ClaimJudge<'a> {
    generator: &'a dyn Generator,
    pause: Duration,
}

impl<'a> ClaimJudge<'a> {
    pub fn new(generator: &'a dyn Generator) -> Self {
        Self {
            generator,
            pause: Duration::from_secs(1),
        }
    }

    /// Courtesy pause after each successful judgment, to respect the
    /// backend's throughput limits. Zero disables it (tests).
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Judge one answer pair, returning derived metrics and the parsed
    /// judgment with its candidate count already reconciled.
    pub fn judge(
        &self,
        question: &str,
        golden_response: &str,
        candidate_response: &str,
    ) -> Result<(MetricTriple, ClaimJudgment)> {
        let prompt = build_judgment_prompt(question, golden_response, candidate_response);
        tracing::debug!(prompt_len = prompt.len(), "requesting claim judgment");

        let raw = self.generator.complete(&prompt)?;
        tracing::debug!(raw = %raw, "backend reply");

        let mut judgment = parse_judgment(&raw)?;
        judgment.candidate_count =
            metrics::reconcile_candidate_count(judgment.candidate_count, judgment.common_count);

        let triple = metrics::derive(
            judgment.golden_count,
            judgment.candidate_count,
            judgment.common_count,
        )
        .ok_or_else(|| RagcheckError::EmptyGoldenClaims {
            question: question.to_string(),
        })?;

        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }

        Ok((triple, judgment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RagcheckError;

    struct StubGenerator {
        reply: String,
    }

    impl StubGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
            }
        }
    }

    impl Generator for StubGenerator {
        fn complete(&self, _prompt: &str) -> Result<String> {
            Ok(self.reply.clone())
        }
    }

    fn judgment_json(golden: u64, candidate: u64, common: u64) -> String {
        format!(
            r#"{{
                "Golden Response Claims": {{"1": "g1"}},
                "Candidate Response Claims": {{"1": "c1"}},
                "Common Claims": {{"1": "g1"}},
                "No of Golden Response Claims": {golden},
                "No of Candidate Response Claims": {candidate},
                "No of Common Claims": {common}
            }}"#
        )
    }

    fn judge_counts(golden: u64, candidate: u64, common: u64) -> (MetricTriple, ClaimJudgment) {
        let stub = StubGenerator::new(&judgment_json(golden, candidate, common));
        ClaimJudge::new(&stub)
            .with_pause(Duration::ZERO)
            .judge("q", "golden", "candidate")
            .unwrap()
    }

    #[test]
    fn consistent_counts_produce_harmonic_f1() {
        let (triple, judgment) = judge_counts(4, 5, 4);
        assert!((triple.recall - 1.0).abs() < 1e-9);
        assert!((triple.precision - 0.8).abs() < 1e-9);
        assert!((triple.f1 - 0.888).abs() < 1e-3);
        assert_eq!(judgment.candidate_count, 5);
    }

    #[test]
    fn inconsistent_counts_are_reconciled_before_metrics() {
        let (triple, judgment) = judge_counts(4, 2, 3);
        assert_eq!(judgment.candidate_count, 3);
        assert!((triple.recall - 0.75).abs() < 1e-9);
        assert!((triple.precision - 1.0).abs() < 1e-9);
        assert!((triple.f1 - 0.857).abs() < 1e-3);
    }

    #[test]
    fn empty_candidate_claims_zero_the_metrics() {
        let (triple, _) = judge_counts(4, 0, 0);
        assert_eq!(triple.recall, 0.0);
        assert_eq!(triple.precision, 0.0);
        assert_eq!(triple.f1, 0.0);
    }

    #[test]
    fn fenced_reply_is_unwrapped() {
        let reply = format!("Explanation first.\n```json\n{}\n```", judgment_json(2, 2, 1));
        let stub = StubGenerator::new(&reply);
        let (triple, _) = ClaimJudge::new(&stub)
            .with_pause(Duration::ZERO)
            .judge("q", "g", "c")
            .unwrap();
        assert!((triple.recall - 0.5).abs() < 1e-9);
    }

    #[test]
    fn malformed_reply_is_a_parse_error_with_raw_text() {
        let stub = StubGenerator::new("```json\n{\"broken\": ");
        let err = ClaimJudge::new(&stub)
            .with_pause(Duration::ZERO)
            .judge("q", "g", "c")
            .unwrap_err();
        match err {
            RagcheckError::MalformedJudgment { raw, .. } => {
                assert!(raw.contains("{\"broken\": "));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_field_is_a_parse_error_not_a_zero() {
        let stub = StubGenerator::new(
            r#"{
                "Golden Response Claims": {"1": "g1"},
                "Candidate Response Claims": {"1": "c1"},
                "No of Golden Response Claims": 1,
                "No of Candidate Response Claims": 1,
                "No of Common Claims": 1
            }"#,
        );
        let err = ClaimJudge::new(&stub)
            .with_pause(Duration::ZERO)
            .judge("q", "g", "c")
            .unwrap_err();
        assert!(matches!(err, RagcheckError::MalformedJudgment { .. }));
    }

    #[test]
    fn zero_golden_claims_is_guarded() {
        let stub = StubGenerator::new(&judgment_json(0, 1, 0));
        let err = ClaimJudge::new(&stub)
            .with_pause(Duration::ZERO)
            .judge("what is the revenue?", "g", "c")
            .unwrap_err();
        match err {
            RagcheckError::EmptyGoldenClaims { question } => {
                assert_eq!(question, "what is the revenue?");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn prompt_receives_the_answer_pair() {
        struct CapturingGenerator;
        impl Generator for CapturingGenerator {
            fn complete(&self, prompt: &str) -> Result<String> {
                assert!(prompt.contains("the golden answer"));
                assert!(prompt.contains("the candidate answer"));
                Ok(judgment_json(1, 1, 1))
            }
        }

        let gen = CapturingGenerator;
        ClaimJudge::new(&gen)
            .with_pause(Duration::ZERO)
            .judge("q", "the golden answer", "the candidate answer")
            .unwrap();
    }
}
