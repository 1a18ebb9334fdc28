pub mod init;
pub mod note;
pub mod summarize;
pub mod tags;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Resolve command input: positional text, then `--file`, then stdin
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}
