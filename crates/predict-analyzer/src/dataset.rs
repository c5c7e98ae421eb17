//! Dataset file access.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::AnalyzerError;

/// Open the dataset for sequential reading.
pub fn open(path: &Path) -> Result<BufReader<File>, AnalyzerError> {
    let file = File::open(path).map_err(|source| AnalyzerError::Dataset {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Count lines, including a final line without a terminator.
pub fn count_lines<R: BufRead>(reader: R) -> std::io::Result<u64> {
    let mut count = 0u64;
    for chunk in reader.split(b'\n') {
        chunk?;
        count += 1;
    }
    Ok(count)
}

/// Line count of the dataset at `path`, used as the progress denominator.
pub fn line_count(path: &Path) -> Result<u64, AnalyzerError> {
    let count = count_lines(open(path)?)?;
    debug!(path = %path.display(), lines = count, "Counted dataset lines");
    Ok(count)
}
