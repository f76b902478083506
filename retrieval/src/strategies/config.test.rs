use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn surfaces_known_config_files_present_at_the_root() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"demo\"").unwrap();
    fs::write(dir.path().join("unrelated.txt"), "nothing to see").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = ConfigStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates.len(), 1);
    assert_eq!(output.candidates[0].path, "Cargo.toml");
}

#[tokio::test]
async fn truncates_an_oversized_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let content = (1..=500).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n");
    fs::write(dir.path().join("package.json"), &content).unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = ConfigStrategy.execute(&mut ctx).await;

    let body = output.candidates[0].content.as_ref().unwrap();
    assert!(body.contains("truncated"));
    assert!(body.lines().count() <= 201);
}
