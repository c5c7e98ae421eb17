//! Streaming scorer for position-classifier output.
//!
//! Pairs each prediction read from one stream with the dataset record read
//! from another, tallies accuracy per category and redraws a report after
//! every pair.

pub mod config;
pub mod dataset;
pub mod error;
pub mod pairs;
pub mod render;
pub mod runner;
pub mod summary;

pub use accuracy_core;
