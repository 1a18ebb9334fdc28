//! Build a note the way the notes service stores it

use std::path::Path;

use anyhow::Result;
use colored::*;

use notewise::core::{get_home_root, Config, NewNote};

use super::read_input;

pub fn run(
    title: String,
    content: Option<String>,
    file: Option<&Path>,
    tags: Vec<String>,
    summarize: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load(&get_home_root());
    let content = read_input(content, file)?;

    let mut new_note = NewNote::new(title, content);
    if !tags.is_empty() {
        new_note = new_note.with_tags(tags);
    }

    let mut note = new_note.into_note(&config.tag_extractor())?;
    if summarize {
        note.summarize(&config.summarizer());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
        return Ok(());
    }

    println!("{}", note.title.bold());
    println!("{}", "=".repeat(50));
    println!(
        "Tags: {}",
        if note.tags.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            note.tags.join(", ").cyan().to_string()
        }
    );
    println!("Created: {}", note.created_at.to_rfc3339().dimmed());
    println!();
    println!("{}", note.content);

    Ok(())
}
