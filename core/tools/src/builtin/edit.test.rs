use super::*;
use tokio_util::sync::CancellationToken;

fn setup(content: &str) -> (tempfile::TempDir, ToolContext) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), content).unwrap();
    let ctx = ToolContext::new(dir.path(), CancellationToken::new());
    (dir, ctx)
}

#[tokio::test]
async fn replaces_unique_occurrence() {
    let (dir, mut ctx) = setup("hello world");
    EditTool
        .execute(
            serde_json::json!({"file_path": "a.txt", "old_string": "world", "new_string": "there"}),
            &mut ctx,
        )
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "hello there");
}

#[tokio::test]
async fn rejects_non_unique_occurrence_without_replace_all() {
    let (_dir, mut ctx) = setup("foo foo");
    let output = EditTool
        .execute(
            serde_json::json!({"file_path": "a.txt", "old_string": "foo", "new_string": "bar"}),
            &mut ctx,
        )
        .await
        .unwrap();
    assert!(output.is_error);
}

#[tokio::test]
async fn replace_all_replaces_every_occurrence() {
    let (dir, mut ctx) = setup("foo foo");
    EditTool
        .execute(
            serde_json::json!({"file_path": "a.txt", "old_string": "foo", "new_string": "bar", "replace_all": true}),
            &mut ctx,
        )
        .await
        .unwrap();
    assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "bar bar");
}

#[tokio::test]
async fn missing_string_is_reported_as_error_output() {
    let (_dir, mut ctx) = setup("hello world");
    let output = EditTool
        .execute(
            serde_json::json!({"file_path": "a.txt", "old_string": "nope", "new_string": "bar"}),
            &mut ctx,
        )
        .await
        .unwrap();
    assert!(output.is_error);
}
