//! Prediction accuracy analyzer
//!
//! Reads classifier predictions from stdin, one per line, and scores them
//! against a labelled dataset given as the only positional argument.
//!
//! Usage:
//!   my_predictor positions.txt | predict-analyzer positions.txt

use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use accuracy_core::ColorRule;
use predict_analyzer::config::{AnalyzerConfig, Cli};
use predict_analyzer::error::AnalyzerError;
use predict_analyzer::runner;

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = match AnalyzerConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(AnalyzerError::MissingArgument) => {
            println!("{}", AnalyzerError::MissingArgument);
            println!("{}", Cli::command().render_usage());
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if config.color_rule == ColorRule::Legacy {
        warn!("Legacy color rule: color accuracy counts expected tokens equal to \"1\"");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    runner::analyze(&config, stdin.lock(), stdout.lock())?;

    Ok(())
}
