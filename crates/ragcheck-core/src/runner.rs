//! Row-by-row evaluation and result persistence.
//!
//! Each row is evaluated independently by a pure per-row function; the
//! baseline orchestration is a sequential loop, and the result table is
//! written exactly once after every row has been processed.

use std::path::Path;

use serde::Serialize;

use crate::collate::{self, EvaluationRow};
use crate::error::{RagcheckError, Result};
use crate::judge::ClaimJudge;
use crate::lexical::LexicalScorer;

/// One persisted output row: the evaluation row, the lexical scalars,
/// the derived claim metrics, and the judgment fields. Claim sets are
/// serialized as ordered JSON objects.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    #[serde(rename = "SNo.")]
    pub sno: u32,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Golden Context")]
    pub golden_context: String,
    #[serde(rename = "Golden Response")]
    pub golden_response: String,
    #[serde(rename = "Candidate Response")]
    pub candidate_response: String,
    #[serde(rename = "Bleu Score")]
    pub bleu_score: f64,
    #[serde(rename = "Rouge-1")]
    pub rouge_1: f64,
    #[serde(rename = "Rouge-L")]
    pub rouge_l: f64,
    #[serde(rename = "Bert Precision")]
    pub bert_precision: f64,
    #[serde(rename = "Bert Recall")]
    pub bert_recall: f64,
    #[serde(rename = "Bert Score F1")]
    pub bert_score_f1: f64,
    #[serde(rename = "Similarity Score")]
    pub similarity_score: f64,
    #[serde(rename = "LLM Recall")]
    pub llm_recall: f64,
    #[serde(rename = "LLM Precision")]
    pub llm_precision: f64,
    #[serde(rename = "LLM F1")]
    pub llm_f1: f64,
    #[serde(rename = "Golden Response Claim Count")]
    pub golden_claim_count: u64,
    #[serde(rename = "Candidate Response Claim Count")]
    pub candidate_claim_count: u64,
    #[serde(rename = "Common Claim Count")]
    pub common_claim_count: u64,
    #[serde(rename = "Golden Response Claims")]
    pub golden_claims: String,
    #[serde(rename = "Candidate Response Claims")]
    pub candidate_claims: String,
    #[serde(rename = "Common Claims")]
    pub common_claims: String,
}

pub struct EvaluationRunner<'a> {
    lexical: &'a dyn LexicalScorer,
    judge: &'a ClaimJudge<'a>,
}

impl<'a> EvaluationRunner<'a> {
    pub fn new(lexical: &'a dyn LexicalScorer, judge: &'a ClaimJudge<'a>) -> Self {
        Self { lexical, judge }
    }

    /// Evaluate one row. Lexical-scorer errors propagate as-is (fatal
    /// for the run); claim-judge failures are wrapped with the row's
    /// identifying question so they surface distinctly.
    pub fn evaluate_row(&self, row: &EvaluationRow) -> Result<ResultRow> {
        tracing::info!(sno = row.sno, "evaluating response");

        let lexical = self
            .lexical
            .score(&row.golden_response, &row.candidate_response)?;

        let (triple, judgment) = self
            .judge
            .judge(&row.question, &row.golden_response, &row.candidate_response)
            .map_err(|e| RagcheckError::RowFailed {
                sno: row.sno,
                question: row.question.clone(),
                source: Box::new(e),
            })?;

        Ok(ResultRow {
            sno: row.sno,
            question: row.question.clone(),
            golden_context: row.golden_context.clone(),
            golden_response: row.golden_response.clone(),
            candidate_response: row.candidate_response.clone(),
            bleu_score: lexical.bleu,
            rouge_1: lexical.rouge_1,
            rouge_l: lexical.rouge_l,
            bert_precision: lexical.bert_precision,
            bert_recall: lexical.bert_recall,
            bert_score_f1: lexical.bert_f1,
            similarity_score: lexical.similarity,
            llm_recall: triple.recall,
            llm_precision: triple.precision,
            llm_f1: triple.f1,
            golden_claim_count: judgment.golden_count,
            candidate_claim_count: judgment.candidate_count,
            common_claim_count: judgment.common_count,
            golden_claims: serde_json::to_string(&judgment.golden_claims)?,
            candidate_claims: serde_json::to_string(&judgment.candidate_claims)?,
            common_claims: serde_json::to_string(&judgment.common_claims)?,
        })
    }

    /// Evaluate all rows in input order.
    pub fn evaluate(&self, rows: &[EvaluationRow]) -> Result<Vec<ResultRow>> {
        rows.iter().map(|row| self.evaluate_row(row)).collect()
    }

    /// Read the intermediate artifact, evaluate every row, and persist
    /// the result table once.
    pub fn evaluate_file(&self, input: &Path, output: &Path) -> Result<()> {
        let rows = collate::read_rows(input)?;
        let results = self.evaluate(&rows)?;
        write_results(output, &results)?;
        tracing::info!(rows = results.len(), output = %output.display(), "evaluation written");
        Ok(())
    }
}

/// Write the result table. Called exactly once per run.
pub fn write_results(path: &Path, results: &[ResultRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in results {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
