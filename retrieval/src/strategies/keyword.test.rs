use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn builds_a_snippet_around_the_matched_line() {
    let dir = tempfile::tempdir().unwrap();
    let content = (1..=20).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
    let content = content.replace("line 10", "fn authenticate() {}");
    fs::write(dir.path().join("auth.rs"), &content).unwrap();

    let mut ctx = context(dir.path(), "fix authenticate bug", vec!["authenticate".to_string()], 32_000, Intensity::Standard);
    let output = KeywordStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates.len(), 1);
    let candidate = &output.candidates[0];
    assert_eq!(candidate.path, "auth.rs");
    assert_eq!(candidate.representation, ivo_protocol::Representation::Snippet);
    assert!(candidate.content.as_ref().unwrap().contains("authenticate"));
    assert!(ctx.matched_files.contains("auth.rs"));
}

#[tokio::test]
async fn unavailable_when_there_are_no_keywords() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    assert!(!KeywordStrategy.is_available(&ctx));
}

#[tokio::test]
async fn caps_matched_files_per_intensity() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..10 {
        fs::write(dir.path().join(format!("f{i}.rs")), "needle here").unwrap();
    }

    let mut ctx = context(dir.path(), "find needle", vec!["needle".to_string()], 32_000, Intensity::Lite);
    let output = KeywordStrategy.execute(&mut ctx).await;
    assert!(output.candidates.len() <= 6);
}
