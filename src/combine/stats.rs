//! Statistics for combine runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::combine::engine::CombineMetadata;

/// Summary statistics for one combine run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineStatistics {
    /// Number of documents in the combined output
    pub file_count: usize,
    /// Number of files skipped under continue-on-error
    pub skipped_count: usize,
    /// Total input bytes read
    pub input_size_bytes: u64,
    /// Size of the serialized output in bytes
    pub output_size_bytes: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput (input bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl CombineStatistics {
    /// Build statistics from the metadata of a finished run
    pub fn for_run(metadata: &CombineMetadata) -> Self {
        let elapsed = Duration::from_millis(metadata.processing_time_ms);
        let throughput_bytes_per_sec = if elapsed.as_secs_f64() > 0.0 {
            (metadata.input_size as f64 / elapsed.as_secs_f64()) as f32
        } else {
            0.0
        };

        Self {
            file_count: metadata.document_count,
            skipped_count: metadata.skipped.len(),
            input_size_bytes: metadata.input_size,
            output_size_bytes: metadata.output_size,
            processing_time_ms: metadata.processing_time_ms,
            throughput_bytes_per_sec,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Render the summary lines printed under --stats
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Files combined: {}", self.file_count),
            format!("Input size: {} bytes", self.input_size_bytes),
            format!("Output size: {} bytes", self.output_size_bytes),
            format!("Processing time: {}ms", self.processing_time_ms),
        ];
        if self.skipped_count > 0 {
            lines.insert(1, format!("Files skipped: {}", self.skipped_count));
        }
        if self.throughput_bytes_per_sec > 0.0 {
            lines.push(format!(
                "Throughput: {:.0} bytes/s",
                self.throughput_bytes_per_sec
            ));
        }
        lines
    }
}
