//! Lockstep reader over the dataset and prediction streams.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use accuracy_core::{ExpectedRecord, PredictedRecord, RecordError, RecordPair};
use serde::Serialize;
use tracing::warn;

/// What happens when the prediction stream outlives the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Keep scoring against empty dataset records.
    #[default]
    Pad,
    /// Report the mismatch once and stop.
    Truncate,
}

impl fmt::Display for MismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchPolicy::Pad => f.write_str("pad"),
            MismatchPolicy::Truncate => f.write_str("truncate"),
        }
    }
}

impl FromStr for MismatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pad" => Ok(MismatchPolicy::Pad),
            "truncate" => Ok(MismatchPolicy::Truncate),
            other => Err(format!("unknown mismatch policy '{other}' (expected 'pad' or 'truncate')")),
        }
    }
}

/// Yields one [`RecordPair`] per prediction line.
///
/// A dataset line is only read after a prediction line was obtained, so the
/// dataset is never read past the last prediction. Lines are decoded lossily,
/// so invalid UTF-8 only affects the pair it appears in.
pub struct PairReader<E, P> {
    expected: E,
    predicted: P,
    policy: MismatchPolicy,
    expected_buf: Vec<u8>,
    predicted_buf: Vec<u8>,
    expected_line: u64,
    predicted_line: u64,
    expected_exhausted: bool,
    padded: u64,
    done: bool,
}

impl<E: BufRead, P: BufRead> PairReader<E, P> {
    pub fn new(expected: E, predicted: P, policy: MismatchPolicy) -> Self {
        Self {
            expected,
            predicted,
            policy,
            expected_buf: Vec::new(),
            predicted_buf: Vec::new(),
            expected_line: 0,
            predicted_line: 0,
            expected_exhausted: false,
            padded: 0,
            done: false,
        }
    }

    /// Pairs produced with an empty dataset record under [`MismatchPolicy::Pad`].
    pub fn padded(&self) -> u64 {
        self.padded
    }

    pub fn into_inner(self) -> (E, P) {
        (self.expected, self.predicted)
    }

    fn next_expected(&mut self) -> Result<Option<ExpectedRecord>, RecordError> {
        if self.expected_exhausted {
            return Ok(None);
        }

        self.expected_buf.clear();
        if self.expected.read_until(b'\n', &mut self.expected_buf)? == 0 {
            self.expected_exhausted = true;
            return Ok(None);
        }
        self.expected_line += 1;

        let line = String::from_utf8_lossy(&self.expected_buf);
        ExpectedRecord::parse(&line, self.expected_line).map(Some)
    }

    fn dataset_exhausted(&mut self, predicted: PredictedRecord) -> Result<RecordPair, RecordError> {
        match self.policy {
            MismatchPolicy::Pad => {
                if self.padded == 0 {
                    warn!(
                        line = self.predicted_line,
                        "Dataset exhausted before predictions, scoring against empty records"
                    );
                }
                self.padded += 1;
                Ok(RecordPair {
                    expected: ExpectedRecord::default(),
                    predicted,
                })
            }
            MismatchPolicy::Truncate => {
                self.done = true;
                Err(RecordError::StreamLengthMismatch {
                    line: self.predicted_line,
                })
            }
        }
    }

    fn read_pair(&mut self) -> Option<Result<RecordPair, RecordError>> {
        self.predicted_buf.clear();
        match self.predicted.read_until(b'\n', &mut self.predicted_buf) {
            Ok(0) => {
                self.done = true;
                return None;
            }
            Ok(_) => self.predicted_line += 1,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        }
        let predicted = PredictedRecord::parse(&String::from_utf8_lossy(&self.predicted_buf));

        let result = match self.next_expected() {
            Ok(Some(expected)) => Ok(RecordPair { expected, predicted }),
            Ok(None) => self.dataset_exhausted(predicted),
            Err(RecordError::Io(e)) => {
                self.done = true;
                Err(RecordError::Io(e))
            }
            Err(e) => Err(e),
        };
        Some(result)
    }
}

impl<E: BufRead, P: BufRead> Iterator for PairReader<E, P> {
    type Item = Result<RecordPair, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.read_pair()
    }
}
