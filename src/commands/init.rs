//! Config initialization

use anyhow::Result;
use colored::*;

use notewise::core::{get_home_root, Config, CONFIG_FILE_NAME};

pub fn run(force: bool) -> Result<()> {
    let home = get_home_root();
    let config_path = home.join(CONFIG_FILE_NAME);

    println!("{}", "notewise Configuration Generator".bold());
    println!("{}", "=".repeat(50));
    println!();

    if config_path.exists() && !force {
        println!(
            "{} {} already exists. Use --force to overwrite.",
            "→".blue(),
            config_path.display()
        );
        return Ok(());
    }

    let config = Config::default();
    let path = config.save(&home)?;
    println!("{} Wrote {}", "✓".green(), path.display());

    println!();
    println!("{}", "Configuration:".cyan());
    println!();
    println!("  tags:");
    println!("    top_n: {}", config.tags.top_n);
    println!("    stopwords: built-in ({} words)", config.tags.stopword_set().len());
    println!();
    println!("  summary:");
    println!("    sentence_count: {}", config.summary.sentence_count);
    println!(
        "    stopwords: built-in ({} words)",
        config.summary.stopword_set().len()
    );
    println!();
    println!(
        "{}",
        format!("Edit {} to customize counts and stopwords.", CONFIG_FILE_NAME).dimmed()
    );

    Ok(())
}
