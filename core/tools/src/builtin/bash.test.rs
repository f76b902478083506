use super::*;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn captures_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let output = BashTool
        .execute(serde_json::json!({"command": "echo hello"}), &mut ctx)
        .await
        .unwrap();
    assert!(!output.is_error);
    assert_eq!(output.content.as_transcript_text().trim(), "hello");
}

#[tokio::test]
async fn nonzero_exit_is_error_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let output = BashTool.execute(serde_json::json!({"command": "exit 1"}), &mut ctx).await.unwrap();
    assert!(output.is_error);
}

#[tokio::test]
async fn timeout_fires_for_slow_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = ToolContext::new(dir.path(), CancellationToken::new());
    let err = BashTool
        .execute(serde_json::json!({"command": "sleep 5", "timeout_secs": 0}), &mut ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Timeout { .. }));
}

#[test]
fn read_only_command_classification() {
    assert!(is_read_only_command("ls -la"));
    assert!(is_read_only_command("git status"));
    assert!(!is_read_only_command("git commit -m x"));
    assert!(!is_read_only_command("rm -rf /"));
    assert!(!is_read_only_command("echo a > b"));
}
