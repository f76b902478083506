use super::*;
use ivo_protocol::Intensity;
use ivo_protocol::SliceRequest;
use std::fs;

#[test]
fn all_strategies_registers_every_named_strategy() {
    let names: Vec<&str> = all_strategies().iter().map(|s| s.name()).collect();
    for expected in ["explicit", "skeleton", "keyword", "symbols", "graph", "config", "diff", "docs", "complexity", "ast", "inventory", "forest"] {
        assert!(names.contains(&expected), "missing strategy: {expected}");
    }
}

#[tokio::test]
async fn default_slicer_plans_and_assembles_against_a_real_repo() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "pub fn authenticate() {}\nfn main() {}").unwrap();
    fs::write(dir.path().join("README.md"), "# Demo").unwrap();

    let slicer = default_slicer();
    let mut request = SliceRequest::new("fix the authenticate flow", dir.path());
    request.intensity = Intensity::Standard;

    let plan = slicer.plan(&request).await;
    let result = slicer.assemble(&plan, &request, None);
    assert!(!result.context.files.is_empty());
}
