//! Scoring loop.

use std::io::{BufRead, Write};

use accuracy_core::{Accumulator, AccuracySnapshot, RecordError};
use tracing::{info, warn};

use crate::config::AnalyzerConfig;
use crate::dataset;
use crate::error::AnalyzerError;
use crate::pairs::PairReader;
use crate::render::{Progress, QuietRenderer, ReportRenderer, TerminalRenderer};
use crate::summary;

#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Pairs handed to the accumulator
    pub processed: u64,
    /// Pairs dropped because the dataset line was malformed
    pub skipped: u64,
    /// Pairs scored against an empty record after the dataset ran out
    pub padded: u64,
    /// Scoring stopped early because the dataset ran out
    pub truncated: bool,
    pub snapshot: AccuracySnapshot,
}

impl RunSummary {
    pub fn stream_length_mismatch(&self) -> bool {
        self.padded > 0 || self.truncated
    }
}

/// Drain `pairs` into `accumulator`, redrawing after every scored pair.
///
/// Malformed dataset lines and a stream length mismatch are logged and
/// recorded in the summary; only I/O failures abort the run.
pub fn run<E, P, R>(
    pairs: &mut PairReader<E, P>,
    accumulator: &mut Accumulator,
    renderer: &mut R,
    dataset_lines: u64,
) -> Result<RunSummary, AnalyzerError>
where
    E: BufRead,
    P: BufRead,
    R: ReportRenderer + ?Sized,
{
    let mut processed = 0u64;
    let mut skipped = 0u64;
    let mut truncated = false;

    for item in pairs.by_ref() {
        match item {
            Ok(pair) => {
                let snapshot = accumulator.update(&pair.expected, &pair.predicted);
                processed += 1;
                let progress = Progress {
                    lines_read: processed + skipped,
                    dataset_lines,
                };
                renderer.render_progress(&snapshot, &progress)?;
            }
            Err(RecordError::Malformed { line, fields }) => {
                warn!(line, fields, "Skipping malformed dataset line");
                skipped += 1;
            }
            Err(RecordError::StreamLengthMismatch { line }) => {
                warn!(line, "Predictions outlived the dataset, stopping");
                truncated = true;
            }
            Err(e @ RecordError::Io(_)) => return Err(e.into()),
        }
    }

    let snapshot = accumulator.snapshot();
    renderer.render_final(&snapshot)?;

    let summary = RunSummary {
        processed,
        skipped,
        padded: pairs.padded(),
        truncated,
        snapshot,
    };
    info!(
        processed = summary.processed,
        skipped = summary.skipped,
        padded = summary.padded,
        truncated = summary.truncated,
        correct = snapshot.global.correct,
        "Scoring complete"
    );
    Ok(summary)
}

/// Score `predictions` against the configured dataset and write the report to `out`.
pub fn analyze<P, W>(
    config: &AnalyzerConfig,
    predictions: P,
    out: W,
) -> Result<RunSummary, AnalyzerError>
where
    P: BufRead,
    W: Write,
{
    info!(
        dataset = %config.dataset.display(),
        color_rule = %config.color_rule,
        on_mismatch = %config.on_mismatch,
        "Starting analysis"
    );

    let dataset_lines = dataset::line_count(&config.dataset)?;
    let expected = dataset::open(&config.dataset)?;

    let mut pairs = PairReader::new(expected, predictions, config.on_mismatch);
    let mut accumulator = Accumulator::new(config.color_rule);

    let outcome = if config.quiet {
        let mut renderer = QuietRenderer::new(out);
        run(&mut pairs, &mut accumulator, &mut renderer, dataset_lines)?
    } else {
        let mut renderer = TerminalRenderer::new(out, config.width);
        run(&mut pairs, &mut accumulator, &mut renderer, dataset_lines)?
    };

    if let Some(path) = &config.summary_json {
        summary::write(path, config, &outcome)?;
        info!(path = %path.display(), "Wrote JSON summary");
    }

    Ok(outcome)
}
