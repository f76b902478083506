use super::*;
use std::fs;

#[test]
fn finds_case_insensitive_matches_with_line_numbers() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("auth.rs"), "fn login() {}\nfn LOGOUT() {}\nfn other() {}\n").unwrap();

    let backend = RegexSearchBackend;
    let options = SearchOptions { context_lines: 2, max_results: 10 };
    let matches = backend.search(dir.path(), "log", &options);

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].path, "auth.rs");
    assert_eq!(matches[0].line, 1);
    assert_eq!(matches[1].line, 2);
}

#[test]
fn stops_at_max_results() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("many.rs"), "needle\nneedle\nneedle\nneedle\n").unwrap();

    let backend = RegexSearchBackend;
    let options = SearchOptions { context_lines: 0, max_results: 2 };
    let matches = backend.search(dir.path(), "needle", &options);

    assert_eq!(matches.len(), 2);
}
