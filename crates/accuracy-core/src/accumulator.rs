//! Running accuracy tallies.
//!
//! The accumulator owns every counter; callers only ever see copies through
//! [`AccuracySnapshot`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{classify, is_check_family, Category};
use crate::record::{ExpectedRecord, PredictedRecord};

/// Literal the historical scorer compared the color token against.
const LEGACY_COLOR_LITERAL: &str = "1";

/// How a color token pair is judged once the labels already match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRule {
    /// Both tokens present and equal.
    #[default]
    Exact,
    /// Both tokens present and the expected token is the literal "1".
    /// Reproduces reports produced by the original scoring script.
    Legacy,
}

impl ColorRule {
    pub fn accepts(&self, expected: Option<&str>, predicted: Option<&str>) -> bool {
        match (expected, predicted) {
            (Some(exp), Some(got)) => match self {
                ColorRule::Exact => exp == got,
                ColorRule::Legacy => exp == LEGACY_COLOR_LITERAL,
            },
            _ => false,
        }
    }
}

impl fmt::Display for ColorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRule::Exact => f.write_str("exact"),
            ColorRule::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for ColorRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(ColorRule::Exact),
            "legacy" => Ok(ColorRule::Legacy),
            other => Err(format!("unknown color rule '{other}' (expected 'exact' or 'legacy')")),
        }
    }
}

fn ratio(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 / total as f64)
    }
}

/// `{total, correct, correct_with_color}` for one tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterTriple {
    pub total: u64,
    pub correct: u64,
    pub correct_with_color: u64,
}

impl CounterTriple {
    fn record(&mut self, label_match: bool, color_match: bool) {
        self.total += 1;
        if label_match {
            self.correct += 1;
            if color_match {
                self.correct_with_color += 1;
            }
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.correct, self.total)
    }

    pub fn color_accuracy(&self) -> Option<f64> {
        ratio(self.correct_with_color, self.total)
    }
}

/// `{total, correct}` for tallies without a color dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterPair {
    pub total: u64,
    pub correct: u64,
}

impl CounterPair {
    fn record(&mut self, label_match: bool) {
        self.total += 1;
        if label_match {
            self.correct += 1;
        }
    }

    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.correct, self.total)
    }
}

/// Read-only view of every tally after an update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracySnapshot {
    pub global: CounterTriple,
    pub nothing: CounterPair,
    pub check: CounterTriple,
    pub checkmate: CounterTriple,
    pub check_family: CounterTriple,
}

#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    color_rule: ColorRule,
    tallies: AccuracySnapshot,
}

impl Accumulator {
    pub fn new(color_rule: ColorRule) -> Self {
        Self {
            color_rule,
            tallies: AccuracySnapshot::default(),
        }
    }

    pub fn snapshot(&self) -> AccuracySnapshot {
        self.tallies
    }

    /// Score one prediction against its dataset record.
    pub fn update(
        &mut self,
        expected: &ExpectedRecord,
        predicted: &PredictedRecord,
    ) -> AccuracySnapshot {
        let label_match = expected.label == predicted.label;
        let color_match = self
            .color_rule
            .accepts(expected.color_flag.as_deref(), predicted.color_flag.as_deref());

        let tallies = &mut self.tallies;
        tallies.global.record(label_match, color_match);

        match classify(&expected.label) {
            Some(Category::Nothing) => tallies.nothing.record(label_match),
            Some(Category::Check) => tallies.check.record(label_match, color_match),
            Some(Category::Checkmate) => tallies.checkmate.record(label_match, color_match),
            None => {}
        }

        // Within the family a shared prefix counts as the label match
        if is_check_family(&expected.label) && is_check_family(&predicted.label) {
            tallies.check_family.record(true, color_match);
        }

        self.tallies
    }
}
