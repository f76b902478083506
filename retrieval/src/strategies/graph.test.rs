use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn unavailable_with_no_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    assert!(!GraphStrategy.is_available(&ctx));
}

#[tokio::test]
async fn expands_one_hop_from_a_seed_at_lite_intensity() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.rs"), "use crate::b;\nfn a() {}").unwrap();
    fs::write(dir.path().join("b.rs"), "fn b() {}").unwrap();
    fs::write(dir.path().join("c.rs"), "use crate::unrelated;\nfn c() {}").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Lite);
    ctx.mark_matched("a.rs".to_string());

    let output = GraphStrategy.execute(&mut ctx).await;
    let paths: Vec<&str> = output.candidates.iter().map(|c| c.path.as_str()).collect();
    assert!(paths.contains(&"b.rs"));
    assert!(!paths.contains(&"c.rs"));
    assert!(!paths.contains(&"a.rs"));
}
