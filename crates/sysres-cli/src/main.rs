// Rust guideline compliant 2026-10-18

//! sysres CLI Application
//!
//! Resolves system display names to system IDs for infrastructure tooling.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sysres_cli::{execute, logging, ResolveRequest};
use sysres_core::{Config, Error};

#[derive(Parser, Debug)]
#[command(
    name = "resolve",
    version,
    about = "Resolve system display names to system IDs",
    long_about = "Looks up each display name in the owned systems, then the shared systems, of a pre-fetched inventory file. Prints the resolved IDs comma-separated on stdout; all diagnostics go to stderr.",
    after_help = "Examples:\n  resolve systems.json '[\"web-01\"]'\n  resolve systems.json '[\"web-01\",\"db-02\"]' --max-display 20\n"
)]
struct Cli {
    /// Path to the JSON file containing system data
    json_file: PathBuf,

    /// JSON array of target system display names
    target_systems_json: String,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of available systems listed per collection on failure
    #[arg(long)]
    max_display: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The reporter already listed the missing names.
            if !matches!(err.downcast_ref::<Error>(), Some(Error::Unresolved(_))) {
                eprintln!("✗ {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(max_display) = cli.max_display {
        config.max_display = max_display;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.to_lowercase();
    }
    config.validate()?;

    logging::init_tracing(config.level()?);

    let request = ResolveRequest {
        json_file: cli.json_file,
        targets_json: cli.target_systems_json,
        max_display: config.max_display,
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(&request, &mut stdout.lock(), &mut stderr.lock())
}
