use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn unavailable_when_there_are_no_keywords() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    assert!(!AstStrategy.is_available(&ctx));
}

#[tokio::test]
async fn builds_a_codemap_for_a_matching_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("auth.rs"), "pub fn authenticate() {}").unwrap();

    let mut ctx = context(dir.path(), "", vec!["authenticate".to_string()], 32_000, Intensity::Standard);
    let output = AstStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates.len(), 1);
    assert_eq!(output.candidates[0].path, "auth.rs");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Codemap);
    assert!(ctx.matched_files.contains("auth.rs"));
}
