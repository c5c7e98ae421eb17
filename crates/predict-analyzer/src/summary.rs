//! JSON summary of a finished run.

use std::fs;
use std::path::Path;

use accuracy_core::{AccuracySnapshot, ColorRule, CounterTriple};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::pairs::MismatchPolicy;
use crate::runner::RunSummary;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TripleAccuracy {
    pub without_color: Option<f64>,
    pub with_color: Option<f64>,
}

impl From<&CounterTriple> for TripleAccuracy {
    fn from(triple: &CounterTriple) -> Self {
        Self {
            without_color: triple.accuracy(),
            with_color: triple.color_accuracy(),
        }
    }
}

/// Accuracy ratios in `[0, 1]`; `None` where nothing was counted.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccuracyRatios {
    pub global: TripleAccuracy,
    pub nothing: Option<f64>,
    pub check: TripleAccuracy,
    pub checkmate: TripleAccuracy,
    pub check_family: TripleAccuracy,
}

impl From<&AccuracySnapshot> for AccuracyRatios {
    fn from(snapshot: &AccuracySnapshot) -> Self {
        Self {
            global: (&snapshot.global).into(),
            nothing: snapshot.nothing.accuracy(),
            check: (&snapshot.check).into(),
            checkmate: (&snapshot.checkmate).into(),
            check_family: (&snapshot.check_family).into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonSummary<'a> {
    pub generated_at: DateTime<Utc>,
    pub dataset: &'a Path,
    pub color_rule: ColorRule,
    pub on_mismatch: MismatchPolicy,
    pub pairs: u64,
    pub skipped: u64,
    pub padded: u64,
    pub stream_length_mismatch: bool,
    pub tallies: AccuracySnapshot,
    pub accuracy: AccuracyRatios,
}

impl<'a> JsonSummary<'a> {
    pub fn new(config: &'a AnalyzerConfig, run: &RunSummary) -> Self {
        Self {
            generated_at: Utc::now(),
            dataset: &config.dataset,
            color_rule: config.color_rule,
            on_mismatch: config.on_mismatch,
            pairs: run.processed,
            skipped: run.skipped,
            padded: run.padded,
            stream_length_mismatch: run.stream_length_mismatch(),
            tallies: run.snapshot,
            accuracy: (&run.snapshot).into(),
        }
    }
}

pub fn write(path: &Path, config: &AnalyzerConfig, run: &RunSummary) -> Result<(), AnalyzerError> {
    let json = serde_json::to_string_pretty(&JsonSummary::new(config, run))?;
    fs::write(path, json)?;
    Ok(())
}
