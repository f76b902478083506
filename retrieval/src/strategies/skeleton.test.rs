use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn surfaces_entry_points_under_priority_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::create_dir_all(dir.path().join("vendor")).unwrap();
    fs::write(dir.path().join("vendor/main.rs"), "fn main() {}").unwrap();

    let mut ctx = context(dir.path(), "add a flag", vec![], 32_000, Intensity::Deep);
    let output = SkeletonStrategy.execute(&mut ctx).await;

    let paths: Vec<&str> = output.candidates.iter().map(|c| c.path.as_str()).collect();
    assert!(paths.contains(&"src/main.rs"));
    assert!(!paths.contains(&"vendor/main.rs"));
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Codemap);
}

#[tokio::test]
async fn ignores_non_entry_point_files_even_under_priority_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/helpers.rs"), "fn helper() {}").unwrap();

    let mut ctx = context(dir.path(), "add a flag", vec![], 32_000, Intensity::Deep);
    let output = SkeletonStrategy.execute(&mut ctx).await;

    assert!(output.candidates.is_empty());
}
