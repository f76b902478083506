use super::*;
use std::fs;

#[test]
fn lists_files_recursively_as_repo_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("README.md"), "hi").unwrap();

    let files = list_repo_files(dir.path());
    assert!(files.contains(&"src/lib.rs".to_string()));
    assert!(files.contains(&"README.md".to_string()));
}

#[test]
fn missing_root_returns_empty() {
    let files = list_repo_files(Path::new("/nonexistent/path/for/ivo-context-tests"));
    assert!(files.is_empty());
}
