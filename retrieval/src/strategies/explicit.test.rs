use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn matches_a_file_path_named_in_the_task() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("auth.rs"), "fn login() {}").unwrap();

    let mut ctx = context(dir.path(), "fix the bug in auth.rs please", vec!["auth".to_string()], 32_000, Intensity::Deep);
    let output = ExplicitStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates.len(), 1);
    assert_eq!(output.candidates[0].path, "auth.rs");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Full);
    assert!(ctx.matched_files.contains("auth.rs"));
}

#[tokio::test]
async fn ignores_tokens_that_do_not_resolve_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(dir.path(), "fix the auth.rs bug", vec![], 32_000, Intensity::Deep);
    let output = ExplicitStrategy.execute(&mut ctx).await;
    assert!(output.candidates.is_empty());
}
