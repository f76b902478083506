use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn unavailable_with_no_matched_files() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    assert!(!SymbolsStrategy.is_available(&ctx));
}

#[tokio::test]
async fn builds_codemaps_for_matched_files_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("auth.rs"), "pub fn authenticate() {}").unwrap();
    fs::write(dir.path().join("other.rs"), "pub fn unrelated() {}").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    ctx.mark_matched("auth.rs".to_string());

    let output = SymbolsStrategy.execute(&mut ctx).await;
    assert_eq!(output.candidates.len(), 1);
    assert_eq!(output.candidates[0].path, "auth.rs");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Codemap);
}

#[tokio::test]
async fn skips_unreadable_or_unsupported_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "plain text").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    ctx.mark_matched("notes.txt".to_string());
    ctx.mark_matched("missing.rs".to_string());

    let output = SymbolsStrategy.execute(&mut ctx).await;
    assert!(output.candidates.is_empty());
}
