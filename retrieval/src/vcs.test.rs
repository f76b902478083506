use super::*;

#[tokio::test]
async fn non_git_directory_reports_no_changes() {
    let dir = tempfile::tempdir().unwrap();
    let files = changed_files(dir.path()).await;
    assert!(files.is_empty());
}
