use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use quill::config::Config;
use quill::models::ANONYMOUS_AUTHOR;
use quill::moderation::{self, CommentClassifier, ContentFilter};
use quill::output::{self, terminal, OutputFormat};
use quill::pipeline::batch;

/// Quill: heuristic comment moderation.
///
/// Scores blog comments for hate speech, threats, spam and formatting abuse,
/// and decides whether they can be published or must wait for a moderator.
#[derive(Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one comment
    Check {
        /// The comment text
        content: String,

        /// Author display name
        #[arg(long, default_value = ANONYMOUS_AUTHOR)]
        author: String,

        /// Print JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Classify one comment and show the metrics behind the verdict
    Analyze {
        /// The comment text
        content: String,

        /// Author display name
        #[arg(long, default_value = ANONYMOUS_AUTHOR)]
        author: String,

        /// Print JSON instead of colored text
        #[arg(long)]
        json: bool,
    },

    /// Show advisory writing tips for a comment
    Suggest {
        /// The comment text
        content: String,
    },

    /// Moderate a JSON-lines file of submissions
    Batch {
        /// Input file, one {"content": ..., "authorName": ...} object per line
        path: PathBuf,

        /// Also write verdicts as JSON lines to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print JSON instead of colored text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quill=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let filter = ContentFilter::new(config.approval_threshold);

    match cli.command {
        Commands::Check {
            content,
            author,
            json,
        } => {
            let result = filter.classify(&content, &author);
            match format_for(&config, json) {
                OutputFormat::Json => output::print_json(&result)?,
                OutputFormat::Terminal => terminal::display_verdict(&result),
            }
        }

        Commands::Analyze {
            content,
            author,
            json,
        } => {
            let analysis = moderation::analyze_with(&filter, &content, &author);
            match format_for(&config, json) {
                OutputFormat::Json => output::print_json(&analysis)?,
                OutputFormat::Terminal => terminal::display_analysis(&analysis),
            }
        }

        Commands::Suggest { content } => {
            let suggestions = moderation::get_moderation_suggestions(&content);
            match config.output {
                OutputFormat::Json => output::print_json(&suggestions)?,
                OutputFormat::Terminal => terminal::display_suggestions(&suggestions),
            }
        }

        Commands::Batch {
            path,
            output: output_path,
            json,
        } => {
            info!(
                threshold = filter.approval_threshold(),
                path = %path.display(),
                "Starting batch moderation"
            );
            let outcome = batch::run(&filter, &path)?;

            match format_for(&config, json) {
                OutputFormat::Json => output::print_json(&outcome.records)?,
                OutputFormat::Terminal => terminal::display_batch_summary(&outcome),
            }

            if let Some(out) = output_path {
                batch::write_records(&outcome.records, &out)?;
                eprintln!(
                    "{} {} verdicts written to {}",
                    "✓".green(),
                    outcome.records.len(),
                    out.display()
                );
            }
        }
    }

    Ok(())
}

/// `--json` wins over the configured default.
fn format_for(config: &Config, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output
    }
}
