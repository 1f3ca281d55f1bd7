//! Collation of benchmark golden answers with logged candidate answers.
//!
//! The response log is a plain-text transcript where three
//! case-insensitive line-prefix tags delimit each record: a question
//! tag, an answer tag, and a links tag terminating the record. Lines
//! between tags continue the currently open field. The benchmark is a
//! spreadsheet carrying the golden response and context columns.

use std::io::{BufRead, BufReader};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde::{Deserialize, Serialize};

use crate::error::{RagcheckError, Result};

/// Default tags used by the response log format
pub const QUESTION_TAG: &str = "question :";
pub const ANSWER_TAG: &str = "answer :";
pub const LINKS_TAG: &str = "links :";

const GOLDEN_RESPONSE_COLUMN: &str = "Golden Response";
const GOLDEN_CONTEXT_COLUMN: &str = "Golden Context";

/// One evaluation unit: the source of truth for a single question.
/// Immutable once read; the serde renames fix the intermediate
/// artifact's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRow {
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
}

/// Strip a case-insensitive prefix, returning the remainder.
///
/// The prefix check runs over bytes so a multi-byte character at the
/// tag-length boundary is handled like any other non-match. Tags are
/// ASCII, so a matched prefix always ends on a char boundary.
fn strip_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let matches = line
        .as_bytes()
        .get(..tag.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(tag.as_bytes()));
    if matches {
        Some(line[tag.len()..].trim())
    } else {
        None
    }
}

/// Extract (question, answer) pairs from a response log.
///
/// A record opens at the question tag, switches to the answer at the
/// answer tag, and closes at the links tag. Continuation lines are
/// appended to whichever field is open; an answer without a closing
/// links tag is not emitted.
pub fn extract_responses(
    path: &Path,
    question_tag: &str,
    answer_tag: &str,
    links_tag: &str,
) -> Result<(Vec<String>, Vec<String>)> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut questions = Vec::new();
    let mut answers = Vec::new();

    let mut question_lines: Vec<String> = Vec::new();
    let mut answer_lines: Vec<String> = Vec::new();
    let mut capturing_question = false;
    let mut capturing_answer = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(rest) = strip_tag(line, question_tag) {
            if !rest.is_empty() {
                question_lines.push(rest.to_string());
            }
            capturing_question = true;
            capturing_answer = false;
        } else if let Some(rest) = strip_tag(line, answer_tag) {
            questions.push(question_lines.join(" ").trim().to_string());
            question_lines.clear();
            if !rest.is_empty() {
                answer_lines.push(rest.to_string());
            }
            capturing_question = false;
            capturing_answer = true;
        } else if strip_tag(line, links_tag).is_some() {
            answers.push(answer_lines.join(" ").trim().to_string());
            answer_lines.clear();
            capturing_question = false;
            capturing_answer = false;
        } else if capturing_question {
            if !line.is_empty() {
                question_lines.push(line.to_string());
            }
        } else if capturing_answer && !line.is_empty() {
            answer_lines.push(line.to_string());
        }
    }

    tracing::debug!(
        questions = questions.len(),
        answers = answers.len(),
        "extracted response log"
    );

    Ok((questions, answers))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Read golden responses and contexts from the benchmark spreadsheet.
pub fn read_benchmark(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let mut workbook = open_workbook_auto(path).map_err(|e| RagcheckError::InvalidBenchmark {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RagcheckError::InvalidBenchmark {
            path: path.to_path_buf(),
            reason: "workbook has no sheets".to_string(),
        })?
        .map_err(|e| RagcheckError::InvalidBenchmark {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| RagcheckError::InvalidBenchmark {
        path: path.to_path_buf(),
        reason: "benchmark sheet is empty".to_string(),
    })?;

    let column_index = |name: &str| -> Result<usize> {
        header
            .iter()
            .position(|cell| cell_text(cell).trim() == name)
            .ok_or_else(|| RagcheckError::ColumnNotFound {
                column: name.to_string(),
            })
    };
    let response_col = column_index(GOLDEN_RESPONSE_COLUMN)?;
    let context_col = column_index(GOLDEN_CONTEXT_COLUMN)?;

    let mut responses = Vec::new();
    let mut contexts = Vec::new();
    for row in rows {
        responses.push(row.get(response_col).map(cell_text).unwrap_or_default());
        contexts.push(row.get(context_col).map(cell_text).unwrap_or_default());
    }

    Ok((responses, contexts))
}

/// Pair questions and candidate answers with the benchmark columns,
/// assigning 1-based sequence numbers. Mismatched lengths are zipped to
/// the shortest and logged.
pub fn collate_rows(
    questions: Vec<String>,
    golden_contexts: Vec<String>,
    golden_responses: Vec<String>,
    candidate_responses: Vec<String>,
) -> Vec<EvaluationRow> {
    let len = questions
        .len()
        .min(golden_contexts.len())
        .min(golden_responses.len())
        .min(candidate_responses.len());

    if questions.len() != len
        || golden_contexts.len() != len
        || golden_responses.len() != len
        || candidate_responses.len() != len
    {
        tracing::warn!(
            questions = questions.len(),
            contexts = golden_contexts.len(),
            golden = golden_responses.len(),
            candidates = candidate_responses.len(),
            "input lengths differ; truncating to the shortest"
        );
    }

    questions
        .into_iter()
        .zip(golden_contexts)
        .zip(golden_responses)
        .zip(candidate_responses)
        .take(len)
        .enumerate()
        .map(
            |(i, (((question, golden_context), golden_response), candidate_response))| {
                EvaluationRow {
                    sno: (i + 1) as u32,
                    question,
                    golden_context,
                    golden_response,
                    candidate_response,
                }
            },
        )
        .collect()
}

/// Write the intermediate collated artifact.
pub fn write_rows(path: &Path, rows: &[EvaluationRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the intermediate collated artifact back.
pub fn read_rows(path: &Path) -> Result<Vec<EvaluationRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}
