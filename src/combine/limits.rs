use crate::combine::config::CombineConfig;
use crate::combine::CombineResult;
use crate::error::{CombineError, CombineErrorKind};
use std::path::Path;

/// Check a file's size before attempting to read or parse it. This avoids
/// loading very large files into memory if the user-configured limit is
/// smaller than the file.
pub fn check_file_size_before_read(path: &Path, config: &CombineConfig) -> CombineResult<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CombineError::combine(CombineErrorKind::io(
            format!("failed to stat file: {}", e),
            Some(path.to_path_buf()),
        ))
    })?;

    if metadata.len() > config.memory_limit {
        return Err(CombineError::combine(CombineErrorKind::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: config.memory_limit,
        }));
    }

    Ok(())
}
