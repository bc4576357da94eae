//! Combining JSON documents into a single array
//!
//! This module contains the core combine logic, configuration, and
//! run statistics.

pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use config::CombineConfig;
pub use engine::{CombineEngine, CombineMetadata, CombinedData, SkippedFile};
pub use stats::CombineStatistics;

use crate::error::CombineError;

/// Result type for combine operations
pub type CombineResult<T> = Result<T, CombineError>;
