use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::StrategyKind;

/// One output file written by a split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSummary {
    /// 1-based index used in the file name
    pub index: usize,
    pub path: PathBuf,
    /// Bytes written to the part
    pub bytes: u64,
}

/// Result of a successful split
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub strategy: StrategyKind,
    pub parts: Vec<PartSummary>,
    /// Sum of the bytes written across all parts
    pub total_bytes: u64,
}

impl SplitReport {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            parts: Vec::new(),
            total_bytes: 0,
        }
    }

    /// Record a finished part
    pub fn push(&mut self, index: usize, path: PathBuf, bytes: u64) {
        self.total_bytes += bytes;
        self.parts.push(PartSummary { index, path, bytes });
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} split: {} part(s), {} byte(s) written",
            self.strategy,
            self.part_count(),
            self.total_bytes
        )
    }
}
