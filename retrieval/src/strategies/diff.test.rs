use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;
use std::process::Command;

fn git(root: &std::path::Path, args: &[&str]) {
    let status = Command::new("git").arg("-C").arg(root).args(args).status().unwrap();
    assert!(status.success());
}

#[tokio::test]
async fn surfaces_an_untracked_file_as_a_full_candidate() {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"]);
    fs::write(dir.path().join("new.rs"), "fn new_thing() {}").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = DiffStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates.len(), 1);
    assert_eq!(output.candidates[0].path, "new.rs");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Full);
    assert!(ctx.matched_files.contains("new.rs"));
}

#[tokio::test]
async fn reports_nothing_outside_a_git_repository() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("new.rs"), "fn new_thing() {}").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = DiffStrategy.execute(&mut ctx).await;
    assert!(output.candidates.is_empty());
}
