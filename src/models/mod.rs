pub mod config;
pub mod report;
pub mod strategy;

pub use config::*;
pub use report::*;
pub use strategy::*;
