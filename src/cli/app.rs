//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands::{self, CheckOptions};
use archcheck::exit::ExitStatus;
use archcheck::output::{FAIL_MARKER, OutputMode};

/// archcheck - Static architecture-conformance checks
#[derive(Parser, Debug)]
#[command(
    name = "archcheck",
    version,
    about = "Static architecture-conformance checks",
    long_about = "Verify architectural invariants of the signal service without running it.\n\n\
                  Rules read the API, worker, store and snapshot modules and the deployment\n\
                  descriptor as plain text. The first violation stops the run and exits non-zero."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root (skips root discovery)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every rule against the project (default)
    Check {
        /// Evaluate every rule and report every violation instead of stopping at the first
        #[arg(long)]
        all: bool,
    },

    /// List rules in evaluation order
    Rules,

    /// Show where each artifact resolves and whether it exists
    Artifacts,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let root = cli.root.as_deref();
    let result = match cli.command {
        None => commands::check(&CheckOptions { root, all: false }, output_mode),
        Some(Command::Check { all }) => commands::check(&CheckOptions { root, all }, output_mode),
        Some(Command::Rules) => commands::rules(output_mode),
        Some(Command::Artifacts) => commands::artifacts(root, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": archcheck::VERSION
                    })
                );
            } else {
                println!("archcheck v{}", archcheck::VERSION);
            }
            Ok(ExitStatus::Success)
        },
    };

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{FAIL_MARKER} infrastructure error: {e:#}");
            ExitStatus::Error.into()
        },
    }
}
