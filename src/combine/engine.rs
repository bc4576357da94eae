//! Core engine that gathers JSON documents into one combined array

use crate::combine::config::CombineConfig;
use crate::combine::limits;
use crate::combine::CombineResult;
use crate::error::{CombineError, CombineErrorKind};
use crate::parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result of a combine run
#[derive(Debug, Clone)]
pub struct CombinedData {
    pub content: String,
    pub metadata: CombineMetadata,
}

impl CombinedData {
    pub fn new(content: String, metadata: CombineMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the serialized combined array
    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the combine run
#[derive(Debug, Clone)]
pub struct CombineMetadata {
    /// Number of documents in the combined array
    pub document_count: usize,
    /// Files skipped under continue-on-error; empty on the fail-fast path
    pub skipped: Vec<SkippedFile>,
    /// Total bytes read across all combined input files
    pub input_size: u64,
    /// Size of the serialized output in bytes
    pub output_size: u64,
    pub processing_time_ms: u64,
}

/// A file excluded from the combined output, with the reason it failed
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Main combine engine
pub struct CombineEngine {
    config: CombineConfig,
}

impl CombineEngine {
    /// Create a new combine engine
    pub fn new(config: CombineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Enumerate the qualifying `.json` files under the input directory,
    /// in directory-listing order.
    pub fn discover(&self, input_dir: &Path) -> CombineResult<Vec<PathBuf>> {
        parser::directory::find_json_files(input_dir, self.config.recursive).map_err(|e| {
            CombineError::combine(CombineErrorKind::directory_access(
                format!("failed to list {}: {}", input_dir.display(), e),
                Some(input_dir.to_path_buf()),
            ))
        })
    }

    /// Parse the given files in order and serialize them as one JSON array.
    ///
    /// The first failing file aborts the run unless continue-on-error is
    /// configured, in which case the failure is recorded in the metadata
    /// and the remaining files are still processed.
    pub fn combine_files(&self, files: &[PathBuf]) -> CombineResult<CombinedData> {
        let start_time = Instant::now();

        let mut documents: Vec<Value> = Vec::with_capacity(files.len());
        let mut skipped = Vec::new();
        let mut input_size: u64 = 0;

        for path in files {
            match self.read_one(path) {
                Ok(value) => {
                    if let Ok(metadata) = std::fs::metadata(path) {
                        input_size += metadata.len();
                    }
                    documents.push(value);
                }
                Err(e) if self.config.continue_on_error => {
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.user_message(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        let content = crate::writer::to_pretty_string(&documents, self.config.indent_size)?;

        let metadata = CombineMetadata {
            document_count: documents.len(),
            skipped,
            input_size,
            output_size: content.len() as u64,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        Ok(CombinedData::new(content, metadata))
    }

    /// Full pipeline: discover qualifying files, then combine them
    pub fn combine(&self, input_dir: &Path) -> CombineResult<CombinedData> {
        let files = self.discover(input_dir)?;
        self.combine_files(&files)
    }

    fn read_one(&self, path: &Path) -> CombineResult<Value> {
        limits::check_file_size_before_read(path, &self.config)?;
        parser::read_document(path)
    }
}
