use std::path::Path;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use notewise::core::{get_home_root, Config};
use notewise::summary::SummaryError;

use super::read_input;

#[derive(Serialize)]
struct SummaryResult {
    summary: String,
    sentence_count: usize,
    fallback: bool,
}

/// Summarize text and print the summary
pub fn run(
    text: Option<String>,
    file: Option<&Path>,
    sentences: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load(&get_home_root());
    let input = read_input(text, file)?;
    let sentence_count = sentences.unwrap_or(config.summary.sentence_count);

    let summarizer = config.summarizer();
    let (summary, fallback) = match summarizer.try_summarize(Some(&input), sentence_count) {
        Ok(summary) => (summary, false),
        Err(e) => {
            if e != SummaryError::EmptyInput {
                tracing::warn!(error = %e, "summarization failed");
            }
            (e.fallback_text().to_string(), true)
        }
    };

    if json {
        let result = SummaryResult {
            summary,
            sentence_count,
            fallback,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", "Summary".bold());
    println!("{}", "=".repeat(50));
    if fallback {
        println!("{}", summary.yellow());
    } else {
        println!("{}", summary);
    }

    Ok(())
}
