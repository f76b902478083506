use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn ranks_files_by_size_descending() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("small.rs"), "fn a() {}").unwrap();
    fs::write(dir.path().join("big.rs"), "fn a() {}\n".repeat(200)).unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = ComplexityStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates[0].path, "big.rs");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Codemap);
}

#[tokio::test]
async fn falls_back_to_reference_for_an_unsupported_language() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), "x".repeat(5000)).unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = ComplexityStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates[0].path, "data.bin");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Reference);
}
