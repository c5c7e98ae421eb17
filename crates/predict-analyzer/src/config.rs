//! Analyzer configuration from command-line arguments and environment variables

use std::path::PathBuf;

use accuracy_core::ColorRule;
use clap::Parser;

use crate::error::AnalyzerError;
use crate::pairs::MismatchPolicy;
use crate::render::TerminalWidth;

/// Score classifier predictions read from stdin against a labelled dataset.
#[derive(Debug, Parser)]
#[command(name = "predict-analyzer", version)]
pub struct Cli {
    /// Dataset file: a FEN per line followed by the expected label and an optional color token
    pub dataset: Option<PathBuf>,

    /// How color tokens are compared once labels match: "exact" (default,
    /// differs from historical reports) or "legacy" (expected token must be "1")
    #[arg(long, env = "ANALYZER_COLOR_RULE", default_value_t = ColorRule::Exact)]
    pub color_rule: ColorRule,

    /// What to do when predictions outlive the dataset ("pad" or "truncate")
    #[arg(long, env = "ANALYZER_ON_MISMATCH", default_value_t = MismatchPolicy::Pad)]
    pub on_mismatch: MismatchPolicy,

    /// Fixed terminal width instead of querying the terminal
    #[arg(long, env = "ANALYZER_WIDTH")]
    pub width: Option<u16>,

    /// Only print the final results
    #[arg(long, env = "ANALYZER_QUIET")]
    pub quiet: bool,

    /// Write a JSON summary of the final tallies to this path
    #[arg(long, env = "ANALYZER_SUMMARY_JSON")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    /// Labelled dataset, read in lockstep with the predictions
    pub dataset: PathBuf,

    pub color_rule: ColorRule,

    pub on_mismatch: MismatchPolicy,

    pub width: TerminalWidth,

    /// Skip the per-pair redraw
    pub quiet: bool,

    pub summary_json: Option<PathBuf>,
}

impl AnalyzerConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, AnalyzerError> {
        let dataset = cli.dataset.ok_or(AnalyzerError::MissingArgument)?;

        Ok(Self {
            dataset,
            color_rule: cli.color_rule,
            on_mismatch: cli.on_mismatch,
            width: cli.width.map_or(TerminalWidth::Live, TerminalWidth::Fixed),
            quiet: cli.quiet,
            summary_json: cli.summary_json,
        })
    }
}
