use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::core::SplitSource;
use crate::error::{Result, SplitError};
use crate::models::SplitReport;

/// Which splitting algorithm produced (or will produce) a set of parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Fixed number of lines per part
    Line,
    /// Fixed number of bytes per part
    Byte,
    /// Fixed number of parts
    Chunk,
}

impl StrategyKind {
    /// Tag embedded in output file names
    pub fn file_tag(&self) -> &'static str {
        match self {
            StrategyKind::Line => "line",
            StrategyKind::Byte => "byte",
            StrategyKind::Chunk => "num",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::Line => "line",
            StrategyKind::Byte => "byte",
            StrategyKind::Chunk => "chunk",
        }
    }

    /// Reject zero and negative unit parameters
    pub fn validate_unit(&self, value: i64) -> Result<u64> {
        u64::try_from(value)
            .ok()
            .filter(|unit| *unit > 0)
            .ok_or(SplitError::InvalidUnit { kind: *self, value })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Common contract of the three splitting algorithms.
///
/// A call creates parts under `output_dir` (the working directory when the
/// path is empty) and writes each one completely before returning. On error,
/// parts that were already written stay on disk.
pub trait Splitter {
    fn kind(&self) -> StrategyKind;

    fn split<R: SplitSource + ?Sized>(&self, source: &mut R, output_dir: &Path) -> Result<SplitReport>;
}

/// Split into parts of `unit_lines` lines each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineSplit {
    pub unit_lines: i64,
}

/// Split into parts of `unit_bytes` bytes each (the last may be shorter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteSplit {
    pub unit_bytes: i64,
}

/// Split into exactly `chunks` parts; the remainder goes to the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkSplit {
    pub chunks: i64,
}

/// The strategy chosen for one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Lines(LineSplit),
    Bytes(ByteSplit),
    Chunks(ChunkSplit),
}

impl Strategy {
    pub fn lines(unit_lines: i64) -> Self {
        Strategy::Lines(LineSplit { unit_lines })
    }

    pub fn bytes(unit_bytes: i64) -> Self {
        Strategy::Bytes(ByteSplit { unit_bytes })
    }

    pub fn chunks(chunks: i64) -> Self {
        Strategy::Chunks(ChunkSplit { chunks })
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Lines(s) => s.kind(),
            Strategy::Bytes(s) => s.kind(),
            Strategy::Chunks(s) => s.kind(),
        }
    }

    /// The numeric parameter of the active strategy
    pub fn unit(&self) -> i64 {
        match self {
            Strategy::Lines(s) => s.unit_lines,
            Strategy::Bytes(s) => s.unit_bytes,
            Strategy::Chunks(s) => s.chunks,
        }
    }

    /// Run the active strategy against `source`
    pub fn split<R: SplitSource + ?Sized>(&self, source: &mut R, output_dir: &Path) -> Result<SplitReport> {
        match self {
            Strategy::Lines(s) => s.split(source, output_dir),
            Strategy::Bytes(s) => s.split(source, output_dir),
            Strategy::Chunks(s) => s.split(source, output_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_tags() {
        assert_eq!(StrategyKind::Line.file_tag(), "line");
        assert_eq!(StrategyKind::Byte.file_tag(), "byte");
        assert_eq!(StrategyKind::Chunk.file_tag(), "num");
    }

    #[test]
    fn test_validate_unit() {
        assert_eq!(StrategyKind::Byte.validate_unit(4).unwrap(), 4);
        assert!(matches!(
            StrategyKind::Chunk.validate_unit(0),
            Err(SplitError::InvalidUnit {
                kind: StrategyKind::Chunk,
                value: 0
            })
        ));
        assert!(StrategyKind::Line.validate_unit(-3).is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(StrategyKind::Chunk.to_string(), "chunk");
        assert_eq!(StrategyKind::Line.to_string(), "line");
    }

    #[test]
    fn test_strategy_constructors() {
        assert_eq!(Strategy::lines(10).kind(), StrategyKind::Line);
        assert_eq!(Strategy::bytes(4).kind(), StrategyKind::Byte);
        assert_eq!(Strategy::chunks(3).kind(), StrategyKind::Chunk);
        assert_eq!(Strategy::bytes(4).unit(), 4);
        assert_eq!(Strategy::chunks(-1).unit(), -1);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&StrategyKind::Chunk).unwrap();
        assert_eq!(json, "\"chunk\"");
        let kind: StrategyKind = serde_json::from_str("\"byte\"").unwrap();
        assert_eq!(kind, StrategyKind::Byte);
    }

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&Strategy::bytes(4)).unwrap();
        assert_eq!(json, r#"{"bytes":{"unit_bytes":4}}"#);
        let json = serde_json::to_string(&Strategy::chunks(2)).unwrap();
        assert_eq!(json, r#"{"chunks":{"chunks":2}}"#);
    }
}
