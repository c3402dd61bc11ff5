//! splitclone - split a file or standard input into parts
//!
//! Three interchangeable strategies are supported, one per invocation:
//! a fixed number of lines per part, a fixed number of bytes per part, or a
//! fixed number of parts. Parts are named `part-<tag>-<index>` (see
//! [`crate::core::naming`]).
//!
//! # Architecture
//!
//! - **commands**: CLI-facing operations (option resolution, input handling)
//! - **core**: Splitting algorithms, size probing and part output
//! - **models**: Data structures (config, strategies, split report)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{Result, SplitError};
