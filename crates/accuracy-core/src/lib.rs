//! Core scoring model: parsed records, the label taxonomy and the
//! per-category accuracy tallies.

pub mod accumulator;
pub mod category;
pub mod error;
pub mod record;

pub use accumulator::{Accumulator, AccuracySnapshot, ColorRule, CounterPair, CounterTriple};
pub use category::{classify, is_check_family, Category};
pub use error::RecordError;
pub use record::{ExpectedRecord, PredictedRecord, RecordPair};
