use jsoncat::parser::directory as parser_dir;
use jsoncat::parser::filter;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_find_json_files_nonrecursive() {
    let td = TempDir::new().unwrap();
    let a = td.path().join("a.json");
    let mut fa = File::create(&a).unwrap();
    write!(fa, "{{\"name\": \"A\"}}\n").unwrap();

    let files = parser_dir::find_json_files(td.path(), false).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_find_json_files_recursive() {
    let td = TempDir::new().unwrap();
    let sub = td.path().join("sub");
    std::fs::create_dir_all(&sub).unwrap();

    let a = td.path().join("a.json");
    let mut fa = File::create(&a).unwrap();
    write!(fa, "{{\"name\": \"A\"}}\n").unwrap();

    let b = sub.join("b.json");
    let mut fb = File::create(&b).unwrap();
    write!(fb, "{{\"name\": \"B\"}}\n").unwrap();

    let files = parser_dir::find_json_files(td.path(), true).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn test_filter_rejects_other_suffixes() {
    let td = TempDir::new().unwrap();
    for name in ["a.txt", "b.jsonl", "c.JSON", "json"] {
        File::create(td.path().join(name)).unwrap();
    }
    File::create(td.path().join("keep.json")).unwrap();

    let files = parser_dir::find_json_files(td.path(), false).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("keep.json"));
}

#[test]
fn test_filter_on_unlisted_path() {
    assert!(!filter::is_json_file(Path::new("does/not/exist.json")));
}
