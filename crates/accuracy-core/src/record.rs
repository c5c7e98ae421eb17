//! Line parsing for dataset and prediction records.
//!
//! Both formats are space-delimited. A dataset line is a FEN (six fields)
//! followed by the label and an optional color token:
//!
//! ```text
//! 8/8/8/8/8/5k2/8/4K2R w - - 0 1 Check White
//! ```
//!
//! A prediction line is the label followed by the optional color token.

use crate::error::RecordError;

/// Field index of the label in a dataset line.
const EXPECTED_LABEL_FIELD: usize = 6;

/// Field index of the color token in a dataset line.
const EXPECTED_COLOR_FIELD: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedRecord {
    pub label: String,
    pub color_flag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictedRecord {
    pub label: String,
    pub color_flag: Option<String>,
}

/// One dataset record paired with the prediction made for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPair {
    pub expected: ExpectedRecord,
    pub predicted: PredictedRecord,
}

/// Strip one trailing line terminator (`\n` or `\r\n`).
fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split on single spaces; consecutive spaces yield empty fields.
fn fields(raw: &str) -> Vec<&str> {
    strip_terminator(raw).split(' ').collect()
}

impl ExpectedRecord {
    /// Parse a dataset line. `line` is the 1-indexed line number used in errors.
    pub fn parse(raw: &str, line: u64) -> Result<Self, RecordError> {
        let parts = fields(raw);
        let label = parts
            .get(EXPECTED_LABEL_FIELD)
            .ok_or(RecordError::Malformed {
                line,
                fields: parts.len(),
            })?;

        Ok(Self {
            label: label.to_string(),
            color_flag: parts.get(EXPECTED_COLOR_FIELD).map(|s| s.to_string()),
        })
    }
}

impl PredictedRecord {
    /// Parse a prediction line. Never fails: an empty line is an empty label.
    pub fn parse(raw: &str) -> Self {
        let parts = fields(raw);
        Self {
            label: parts.first().map(|s| s.to_string()).unwrap_or_default(),
            color_flag: parts.get(1).map(|s| s.to_string()),
        }
    }
}
