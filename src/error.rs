use std::path::PathBuf;
use thiserror::Error;

use crate::models::{ConfigError, StrategyKind};

/// Main error type for splitclone
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid {kind} count: {value} ({kind} count must be positive)")]
    InvalidUnit { kind: StrategyKind, value: i64 },

    #[error("Please specify only one of -l (lines), -n (chunks) or -b (bytes)")]
    ConflictingOptions,

    #[error("Failed to open input {0}: {1}")]
    OpenInput(PathBuf, std::io::Error),

    #[error("Failed to read input: {0}")]
    Read(std::io::Error),

    #[error("Input ended early while writing {path}: expected {expected} bytes, got {actual}")]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    #[error("Failed to create output file {0}: {1}")]
    Create(PathBuf, std::io::Error),

    #[error("Failed to write output file {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Whether the error was raised before any input was consumed or any part created
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SplitError::Config(_) | SplitError::InvalidUnit { .. } | SplitError::ConflictingOptions
        )
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
