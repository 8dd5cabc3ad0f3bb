//! docstyle CLI tool.
//!
//! Usage:
//! ```bash
//! docstyle check [OPTIONS] [PATHS]...
//! docstyle list-rules
//! docstyle init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Documentation style checker for XML/HTML/plain-text content
#[derive(Parser)]
#[command(name = "docstyle")]
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
    /// Check documents against the style guide
    Check {
        /// Files to check (default: discover documents under the current
        /// directory). Pass "-" to read pasted content from stdin.
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Minimum severity to report
        #[arg(long, default_value = "info")]
        min_severity: SeverityFilter,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Read content from stdin (same as passing "-")
        #[arg(long)]
        stdin: bool,
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

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output, grouped by severity.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

/// Minimum severity shown in reports.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum SeverityFilter {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warning,
    /// Everything.
    #[default]
    Info,
}

impl SeverityFilter {
    /// Maps the CLI filter onto the core severity type.
    #[must_use]
    pub fn to_severity(self) -> docstyle_core::Severity {
        match self {
            Self::Error => docstyle_core::Severity::Error,
            Self::Warning => docstyle_core::Severity::Warning,
            Self::Info => docstyle_core::Severity::Info,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            min_severity,
            rules,
            exclude,
            stdin,
        } => commands::check::run(
            &paths,
            format,
            min_severity,
            rules,
            exclude,
            stdin,
            cli.config.as_deref(),
        ),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
