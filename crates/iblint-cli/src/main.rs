//! iblint CLI tool.
//!
//! Usage:
//! ```bash
//! iblint lint [OPTIONS] [PATH]
//! iblint rules
//! iblint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for xib and storyboard view hierarchies
#[derive(Parser)]
#[command(name = "iblint")]
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
    /// Lint interface-builder documents
    Lint {
        /// Work directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Reporter, overriding the configured one
        #[arg(short, long)]
        reporter: Option<ReporterKind>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// List available rules
    Rules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// How lint results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReporterKind {
    /// `path: level: message` lines understood by Xcode.
    #[default]
    Xcode,
    /// JSON output.
    Json,
    /// Human-readable text output.
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lint {
            path,
            reporter,
            exclude,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::lint::run(&path, reporter, exclude, &source)
        }
        Commands::Rules => {
            commands::rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
