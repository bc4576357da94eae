//! Serialization and output writing for the combined array

use crate::error::{CombineError, CombineErrorKind, CombineResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::path::Path;

/// Serialize the combined documents as a single JSON array.
///
/// `indent_size` spaces are used per nesting level; 0 produces compact
/// output with no added whitespace.
pub fn to_pretty_string(documents: &[Value], indent_size: u8) -> CombineResult<String> {
    if indent_size == 0 {
        return serde_json::to_string(documents)
            .map_err(|e| CombineError::combine(CombineErrorKind::serialize(e.to_string())));
    }

    let indent = vec![b' '; indent_size as usize];
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    documents
        .serialize(&mut serializer)
        .map_err(|e| CombineError::combine(CombineErrorKind::serialize(e.to_string())))?;

    String::from_utf8(buf)
        .map_err(|e| CombineError::combine(CombineErrorKind::serialize(e.to_string())))
}

/// Write the serialized array to the output file, creating it if absent
/// and truncating it if present. The parent directory must already exist;
/// it is never created here.
pub fn write_output(path: &Path, content: &str) -> CombineResult<()> {
    std::fs::write(path, content).map_err(|e| {
        CombineError::combine(CombineErrorKind::write(e.to_string(), path.to_path_buf()))
    })
}
