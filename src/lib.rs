//! jsoncat
//!
//! A Rust CLI tool for combining every JSON document in a directory into a
//! single pretty-printed JSON array, with support for opt-in recursion,
//! validation, and skip-on-error batch runs.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod combine;
pub mod error;
pub mod parser;
pub mod writer;

// Re-export commonly used types
pub use combine::{CombineConfig, CombineEngine, CombineStatistics, CombinedData};
pub use error::{CombineError, CombineErrorKind, ParseError};

use std::path::Path;

/// Combine every `.json` document under `input_dir` into a single JSON
/// array written to `output_file`, using the default configuration.
pub fn combine_directory(
    input_dir: &Path,
    output_file: &Path,
) -> Result<CombineStatistics, CombineError> {
    combine_directory_with_config(input_dir, output_file, &CombineConfig::default())
}

/// Combine with a custom configuration
pub fn combine_directory_with_config(
    input_dir: &Path,
    output_file: &Path,
    config: &CombineConfig,
) -> Result<CombineStatistics, CombineError> {
    let engine = CombineEngine::new(config.clone());
    let combined = engine.combine(input_dir)?;
    writer::write_output(output_file, &combined.content)?;
    Ok(CombineStatistics::for_run(&combined.metadata))
}
