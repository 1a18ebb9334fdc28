use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use notewise::core::{get_home_root, Config};

use super::read_input;

/// Extract tags from text and print them
pub fn run(
    text: Option<String>,
    file: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let config = Config::load(&get_home_root());
    let input = read_input(text, file)?;
    let limit = limit.unwrap_or(config.tags.top_n);

    let extractor = config.tag_extractor();
    let keywords = extractor
        .rank_keywords(Some(&input), limit)
        .context("Tag extraction failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
        return Ok(());
    }

    println!("{}", "Extracted Tags".bold());
    println!("{}", "=".repeat(50));

    if keywords.is_empty() {
        println!("{}", "No tags extracted.".yellow());
        return Ok(());
    }

    for (i, k) in keywords.iter().enumerate() {
        let count = format!("{:>3}", k.count);
        let count_colored = if k.count >= 5 {
            count.green()
        } else if k.count >= 2 {
            count.yellow()
        } else {
            count.dimmed()
        };
        println!("  {}. {} × {}", i + 1, count_colored, k.token.cyan().bold());
    }

    Ok(())
}
