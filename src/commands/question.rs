//! Claim-based judgment of a single question/answer pair.

use ragcheck_core::error::Result;
use ragcheck_core::judge::{ClaimJudge, ClaimSet};
use ragcheck_core::llm::OpenAiClient;
use ragcheck_core::Config;

use crate::cli::Cli;

fn print_claims(heading: &str, claims: &ClaimSet) {
    println!("{heading}:");
    for (index, claim) in claims.iter() {
        println!("  {index}. {claim}");
    }
}

pub fn run(cli: &Cli, question: &str, golden_response: &str, candidate_response: &str) -> Result<()> {
    let config = Config::load(&cli.config)?;

    let client = OpenAiClient::new(&config);
    let judge = ClaimJudge::new(&client).with_pause(config.judgment_pause);

    let (triple, judgment) = judge.judge(question, golden_response, candidate_response)?;

    print_claims("Golden response claims", &judgment.golden_claims);
    print_claims("Candidate response claims", &judgment.candidate_claims);
    print_claims("Common claims", &judgment.common_claims);
    println!(
        "Recall: {:.4}, Precision: {:.4}, F1: {:.4}",
        triple.recall, triple.precision, triple.f1
    );
    Ok(())
}
