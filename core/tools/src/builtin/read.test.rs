use super::*;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn reads_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "one\ntwo\nthree").unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let output = ReadTool
        .execute(serde_json::json!({"file_path": "a.txt"}), &mut ctx)
        .await
        .unwrap();
    assert!(!output.is_error);
    assert_eq!(output.content.as_transcript_text(), "one\ntwo\nthree");
}

#[tokio::test]
async fn reads_offset_and_limit() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "one\ntwo\nthree\nfour").unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let output = ReadTool
        .execute(serde_json::json!({"file_path": "a.txt", "offset": 1, "limit": 2}), &mut ctx)
        .await
        .unwrap();
    assert_eq!(output.content.as_transcript_text(), "two\nthree");
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let err = ReadTool
        .execute(serde_json::json!({"file_path": "missing.txt"}), &mut ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Io { .. }));
}
