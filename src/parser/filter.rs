use std::path::Path;

/// Return true if the entry is a regular file whose name ends with the
/// literal suffix `.json`. The check is case sensitive: `data.JSON` does
/// not qualify. A file named exactly `.json` does.
pub fn is_json_file(path: &Path) -> bool {
    let has_suffix = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".json"));

    has_suffix && path.is_file()
}
