use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn produces_a_tree_sidecar_with_no_candidates() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("Cargo.toml"), "[package]").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = InventoryStrategy.execute(&mut ctx).await;

    assert!(output.candidates.is_empty());
    let sidecar = output.sidecar.unwrap();
    assert_eq!(sidecar.key, "tree");
    assert!(sidecar.content.contains("src"));
    assert!(sidecar.content.contains("Cargo.toml"));
}

#[tokio::test]
async fn truncates_beyond_the_intensity_depth() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c/d/e")).unwrap();
    fs::write(dir.path().join("a/b/c/d/e/deep.rs"), "fn deep() {}").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Lite);
    let output = InventoryStrategy.execute(&mut ctx).await;
    let sidecar = output.sidecar.unwrap();
    assert!(!sidecar.content.contains("deep.rs"));
}
