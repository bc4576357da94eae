//! Reading and parsing of JSON documents

pub mod directory;
pub mod filter;

use crate::error::{CombineError, CombineErrorKind, CombineResult, ParseError, ParseResult};
use std::path::Path;

/// Read one file as bytes, decode it as UTF-8, and parse it as a single
/// JSON value. Each stage maps to its own error variant so a failed run
/// reports what actually went wrong: unreadable file, bad encoding, or
/// malformed JSON.
pub fn read_document(path: &Path) -> CombineResult<serde_json::Value> {
    let bytes = std::fs::read(path).map_err(|e| {
        CombineError::combine(CombineErrorKind::io(
            format!("failed to read file: {}", e),
            Some(path.to_path_buf()),
        ))
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|e| {
        CombineError::combine(CombineErrorKind::decode(
            path.to_path_buf(),
            e.valid_up_to(),
        ))
    })?;

    parse_document(text)
        .map_err(|e| CombineError::ParseError(e.with_path(path.to_path_buf())))
}

/// Parse a string as a single JSON value
pub fn parse_document(content: &str) -> ParseResult<serde_json::Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("empty JSON document".to_string(), None));
    }

    serde_json::from_str(trimmed)
        .map_err(|e| ParseError::new(e.to_string(), extract_error_location(&e)))
}

/// Extract the line/column location from a serde_json error. Line and
/// column are 1-based; serde_json reports column 0 for some end-of-input
/// errors, which carries no position worth showing.
fn extract_error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 || error.column() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}
