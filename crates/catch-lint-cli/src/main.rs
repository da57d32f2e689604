//! catch-lint CLI tool.
//!
//! Usage:
//! ```bash
//! catch-lint check [OPTIONS] [PATH]
//! catch-lint list-rules
//! catch-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for overly broad catch clauses in parsed syntax trees
#[derive(Parser)]
#[command(name = "catch-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks over `*.tree.json` files
    Check {
        /// Path to analyze (default: `[analyzer] root`, else current directory)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Fail on tree files that cannot be read instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Rich diagnostics rendered by miette.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
            strict,
        } => {
            let target = path.as_deref().unwrap_or_else(|| Path::new("."));
            let source = config_resolver::resolve(target, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                rules_filter: rules,
                exclude,
                strict,
            };
            commands::check::run(path.as_deref(), format, options, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(Path::new("."), force),
    }
}
