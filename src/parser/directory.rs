use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find JSON files in a directory. If recursive is true, walk the whole
/// tree with walkdir; otherwise list only the directory's own entries.
///
/// Files are returned in the order the underlying listing yields them.
/// No sorting is applied, so the order is file-system dependent.
pub fn find_json_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut json_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if crate::parser::filter::is_json_file(path) {
                json_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if crate::parser::filter::is_json_file(&path) {
                json_files.push(path);
            }
        }
    }

    Ok(json_files)
}
