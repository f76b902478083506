use super::*;
use std::fs;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn resolves_relative_typescript_import_with_extension_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/index.ts", "import { helper } from './util';");
    write(root, "src/util.ts", "export function helper() {}");

    let resolver = HeuristicImportResolver;
    let resolved = resolver.resolve(&root.join("src/index.ts"), "./util", root);
    assert_eq!(resolved, Some("src/util.ts".to_string()));
}

#[test]
fn resolves_typescript_directory_import_to_its_index_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/index.ts", "import { widget } from './widget';");
    write(root, "src/widget/index.ts", "export const widget = 1;");

    let resolver = HeuristicImportResolver;
    let resolved = resolver.resolve(&root.join("src/index.ts"), "./widget", root);
    assert_eq!(resolved, Some("src/widget/index.ts".to_string()));
}

#[test]
fn non_relative_typescript_specifier_is_unresolved() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/index.ts", "import fs from 'fs';");

    let resolver = HeuristicImportResolver;
    assert_eq!(resolver.resolve(&root.join("src/index.ts"), "fs", root), None);
}

#[test]
fn resolves_python_dot_relative_import() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "pkg/main.py", "from .util import helper");
    write(root, "pkg/util.py", "def helper(): pass");

    let resolver = HeuristicImportResolver;
    let resolved = resolver.resolve(&root.join("pkg/main.py"), ".util", root);
    assert_eq!(resolved, Some("pkg/util.py".to_string()));
}

#[test]
fn resolves_rust_crate_path_under_src() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/main.rs", "use crate::config::Settings;");
    write(root, "src/config.rs", "pub struct Settings;");

    let resolver = HeuristicImportResolver;
    let resolved = resolver.resolve(&root.join("src/main.rs"), "crate::config", root);
    assert_eq!(resolved, Some("src/config.rs".to_string()));
}

#[test]
fn resolves_go_specifier_under_internal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "internal/auth/service.go", "package auth");
    write(root, "main.go", "package main");

    let resolver = HeuristicImportResolver;
    let resolved = resolver.resolve(&root.join("main.go"), "example.com/app/internal/auth", root);
    assert_eq!(resolved, Some("internal/auth".to_string()));
}
