use super::*;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn writes_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let output = WriteTool
        .execute(serde_json::json!({"file_path": "out.txt", "content": "hello"}), &mut ctx)
        .await
        .unwrap();
    assert!(!output.is_error);
    assert_eq!(std::fs::read_to_string(dir.path().join("out.txt")).unwrap(), "hello");
}

#[tokio::test]
async fn creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    WriteTool
        .execute(serde_json::json!({"file_path": "nested/out.txt", "content": "hi"}), &mut ctx)
        .await
        .unwrap();
    assert!(dir.path().join("nested/out.txt").exists());
}

#[test]
fn is_concurrency_unsafe() {
    assert_eq!(WriteTool.concurrency_safety(), ConcurrencySafety::Unsafe);
}
