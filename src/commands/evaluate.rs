//! Full pipeline: collate, score, judge, persist.

use std::path::Path;
use std::time::Instant;

use ragcheck_core::collate::{self, ANSWER_TAG, LINKS_TAG, QUESTION_TAG};
use ragcheck_core::error::Result;
use ragcheck_core::judge::ClaimJudge;
use ragcheck_core::lexical::EmbeddingLexicalScorer;
use ragcheck_core::llm::OpenAiClient;
use ragcheck_core::runner::EvaluationRunner;
use ragcheck_core::Config;

use crate::cli::Cli;

pub fn run(
    cli: &Cli,
    benchmark: &Path,
    response_file: &Path,
    output: &Path,
    intermediate: &Path,
    start: Instant,
) -> Result<()> {
    // Config problems must surface before any file is touched.
    let config = Config::load(&cli.config)?;

    let (questions, candidates) =
        collate::extract_responses(response_file, QUESTION_TAG, ANSWER_TAG, LINKS_TAG)?;
    let (golden_responses, golden_contexts) = collate::read_benchmark(benchmark)?;

    let rows = collate::collate_rows(questions, golden_contexts, golden_responses, candidates);
    collate::write_rows(intermediate, &rows)?;
    tracing::info!(
        rows = rows.len(),
        intermediate = %intermediate.display(),
        "collated responses"
    );

    let client = OpenAiClient::new(&config);
    let scorer = EmbeddingLexicalScorer::new(&client, config.bert_rescale_baseline);
    let judge = ClaimJudge::new(&client).with_pause(config.judgment_pause);
    let runner = EvaluationRunner::new(&scorer, &judge);

    runner.evaluate_file(intermediate, output)?;

    if !cli.quiet {
        println!("Evaluation written to {}", output.display());
    }
    tracing::debug!(elapsed = ?start.elapsed(), "evaluate");
    Ok(())
}
