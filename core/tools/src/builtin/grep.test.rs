use super::*;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn finds_matches_across_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "alpha\nbeta\n").unwrap();
    std::fs::write(dir.path().join("b.txt"), "gamma\nbeta two\n").unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let output = GrepTool
        .execute(serde_json::json!({"pattern": "beta"}), &mut ctx)
        .await
        .unwrap();
    let text = output.content.as_transcript_text();
    assert_eq!(text.lines().count(), 2);
}

#[tokio::test]
async fn invalid_pattern_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let err = GrepTool
        .execute(serde_json::json!({"pattern": "("}), &mut ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput { .. }));
}
