mod report;

use anyhow::Context;
use clap::{Parser, Subcommand};
use prose_config::CheckerConfig;
use prose_engine::{Checker, Document};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "prose")]
#[command(about = "Prose CLI for grammar and style checking", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to checker config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a text file and report every flagged span
    Check {
        /// File to check
        file: PathBuf,

        /// Override the look-around window in paragraphs
        /// (-1 = variable whole-document, -2 = whole-document-only)
        #[arg(long, value_name = "N", allow_hyphen_values = true)]
        context: Option<i32>,

        /// Disable a rule by id (repeatable)
        #[arg(long, value_name = "RULE")]
        disable: Vec<String>,
    },

    /// List registered rules and their context demands
    Rules,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            file,
            context,
            disable,
        } => run_check(cli.config.as_deref(), &file, context, &disable),
        Commands::Rules => {
            report::print_rules();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(
    config_path: Option<&Path>,
    file: &Path,
    context: Option<i32>,
    disable: &[String],
) -> anyhow::Result<ExitCode> {
    let mut config = load_effective_config(config_path)?;
    if let Some(context) = context {
        config.num_paras_to_check = context;
    }
    config
        .disabled_rules
        .extend(disable.iter().cloned());
    config.validate()?;

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let doc = Document::from_text(&text);

    tracing::debug!(
        paragraphs = doc.len(),
        num_paras_to_check = config.num_paras_to_check,
        "Checking document"
    );

    let mut checker = Checker::new(config);
    let spans = checker.check_document(&doc);

    Ok(report::print_spans(file, &spans))
}

/// Load the explicit config, or discover one from the working directory,
/// or fall back to defaults.
fn load_effective_config(explicit: Option<&Path>) -> anyhow::Result<CheckerConfig> {
    if let Some(path) = explicit {
        return prose_config::load_config(path)
            .with_context(|| format!("failed to load {}", path.display()));
    }

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    match prose_config::find_config(&cwd) {
        Some(path) => prose_config::load_config(&path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => Ok(CheckerConfig::default()),
    }
}
