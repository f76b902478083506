use super::*;
use crate::fixtures::context;
use ivo_protocol::Intensity;
use std::fs;

#[tokio::test]
async fn always_includes_core_docs_when_present() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "# Demo\n\nSetup instructions.").unwrap();

    let mut ctx = context(dir.path(), "", vec![], 32_000, Intensity::Standard);
    let output = DocsStrategy.execute(&mut ctx).await;

    assert_eq!(output.candidates.len(), 1);
    assert_eq!(output.candidates[0].path, "README.md");
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Full);
}

#[tokio::test]
async fn surfaces_additional_docs_matching_keywords_as_codemaps() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/auth.md"), "# Auth\n\nHow authenticate works.").unwrap();
    fs::write(dir.path().join("docs/unrelated.md"), "# Unrelated\n\nNothing here.").unwrap();

    let mut ctx = context(dir.path(), "", vec!["authenticate".to_string()], 32_000, Intensity::Standard);
    let output = DocsStrategy.execute(&mut ctx).await;

    let paths: Vec<&str> = output.candidates.iter().map(|c| c.path.as_str()).collect();
    assert!(paths.contains(&"docs/auth.md"));
    assert!(!paths.contains(&"docs/unrelated.md"));
    assert_eq!(output.candidates[0].representation, ivo_protocol::Representation::Codemap);
}
