use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use resume_sorter::config::Config;
use resume_sorter::output::{self, terminal, Report};
use resume_sorter::text::resources::{self, LanguageResources};

/// resume-sorter: classify resumes into job fields by keyword presence.
///
/// Extracts text from PDF resumes, lists the skills it recognizes, and
/// picks the job field with the most matching keywords.
#[derive(Parser)]
#[command(name = "resume-sorter", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and classify one or more PDF resumes
    Analyze {
        /// PDF files to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print a JSON array instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// Classify plain text (from --text, --file, or stdin)
    Classify {
        /// Text to classify
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Plain-text file to classify
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// Create the stopword cache in the resource directory
    InitResources,

    /// Show the resource directory, cache state, and tokenizer strategy
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resume_sorter=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { paths, json } => {
            let config = Config::load()?;
            let lang = LanguageResources::initialize(&config);

            let mut docs = Vec::with_capacity(paths.len());
            for path in &paths {
                let text = resume_sorter::extract_text_from_pdf(path);
                if text.is_empty() {
                    warn!(path = %path.display(), "No text extracted");
                }
                let classification = resume_sorter::matcher::scoring::classify_with(&text, &lang);
                info!(
                    path = %path.display(),
                    field = %classification.field,
                    score = classification.score,
                    "Classified resume"
                );
                docs.push((path.display().to_string(), text, classification));
            }

            if json {
                let reports: Vec<Report<'_>> = docs
                    .iter()
                    .map(|(source, text, classification)| Report {
                        source,
                        text_chars: text.chars().count(),
                        classification,
                    })
                    .collect();
                println!("{}", output::to_json(&reports)?);
            } else {
                for (source, text, classification) in &docs {
                    terminal::display_classification(source, text, classification);
                }
                println!();
            }
        }

        Commands::Classify { text, file, json } => {
            let config = Config::load()?;
            let lang = LanguageResources::initialize(&config);

            let (source, text) = match (text, file) {
                (Some(text), _) => ("--text".to_string(), text),
                (None, Some(path)) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    (path.display().to_string(), text)
                }
                (None, None) => {
                    let mut text = String::new();
                    std::io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read text from stdin")?;
                    ("stdin".to_string(), text)
                }
            };

            let classification = resume_sorter::matcher::scoring::classify_with(&text, &lang);

            if json {
                let report = Report {
                    source: &source,
                    text_chars: text.chars().count(),
                    classification: &classification,
                };
                println!("{}", output::to_json(std::slice::from_ref(&report))?);
            } else {
                terminal::display_classification(&source, &text, &classification);
                println!();
            }
        }

        Commands::InitResources => {
            let config = Config::load()?;

            println!("Creating language resource cache...");
            println!("  Destination: {}", config.data_dir.display());

            let path = resources::ensure_resources(&config.data_dir)?;

            println!("\n{}", "Resources ready.".bold());
            println!("  Stopwords: {}", path.display());
        }

        Commands::Status => {
            let config = Config::load()?;
            // Initializing materializes the cache, so look before that happens.
            let cache_present = resources::stopword_cache_present(&config.data_dir);
            let lang = LanguageResources::initialize(&config);

            terminal::display_status(&lang.status(&config, cache_present));
        }
    }

    Ok(())
}
