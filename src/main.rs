mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "notewise")]
#[command(about = "Keyword tagging and extractive summarization for notes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract keyword tags from text
    Tags {
        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,
        #[arg(long, help = "Read text from file")]
        file: Option<PathBuf>,
        #[arg(short = 'n', long, help = "Number of tags (default: config tags.top_n)")]
        limit: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Summarize text by sentence scoring
    Summarize {
        /// Text to summarize (reads stdin when omitted)
        text: Option<String>,
        #[arg(long, help = "Read text from file")]
        file: Option<PathBuf>,
        #[arg(
            short = 'n',
            long,
            help = "Number of sentences (default: config summary.sentence_count)"
        )]
        sentences: Option<usize>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Build a note, generating tags when none are given
    Note {
        #[arg(long, help = "Note title")]
        title: String,
        #[arg(long, help = "Note content (reads --file or stdin when omitted)")]
        content: Option<String>,
        #[arg(long, help = "Read content from file")]
        file: Option<PathBuf>,
        #[arg(long = "tag", help = "Explicit tag (repeatable)")]
        tags: Vec<String>,
        #[arg(long, help = "Replace content with its summary")]
        summarize: bool,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Write a default .notewise.json
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,notewise=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tags {
            text,
            file,
            limit,
            json,
        } => commands::tags::run(text, file.as_deref(), limit, json),
        Commands::Summarize {
            text,
            file,
            sentences,
            json,
        } => commands::summarize::run(text, file.as_deref(), sentences, json),
        Commands::Note {
            title,
            content,
            file,
            tags,
            summarize,
            json,
        } => commands::note::run(title, content, file.as_deref(), tags, summarize, json),
        Commands::Init { force } => commands::init::run(force),
    }
}
