use super::*;

#[test]
fn unsupported_extension_returns_none() {
    let extractor = RegexCodemapExtractor;
    assert!(extractor.extract(Path::new("data.bin"), "whatever").is_none());
}

#[test]
fn rust_codemap_captures_functions_structs_and_uses() {
    let source = r#"
use std::collections::HashMap;
use crate::error::Result;

pub struct Widget {
    name: String,
}

pub async fn run(input: &str) -> Result<()> {
    Ok(())
}
"#;
    let extractor = RegexCodemapExtractor;
    let codemap = extractor.extract(Path::new("src/lib.rs"), source).unwrap();

    assert_eq!(codemap.language, "rust");
    assert!(codemap.dependencies.contains(&"std::collections::HashMap".to_string()));
    assert!(codemap.functions.iter().any(|f| f.name == "run" && f.is_async));
    assert!(codemap.classes.iter().any(|c| c.name == "Widget"));
    assert!(codemap.exports.contains(&"run".to_string()));
}

#[test]
fn typescript_codemap_captures_class_methods_and_imports() {
    let source = r#"
import { readFile } from 'fs';

export class Server {
    start(): void {
        console.log("start");
    }
    stop(): void {
        console.log("stop");
    }
}

export function createServer(): Server {
    return new Server();
}
"#;
    let extractor = RegexCodemapExtractor;
    let codemap = extractor.extract(Path::new("src/server.ts"), source).unwrap();

    assert_eq!(codemap.language, "typescript");
    assert!(codemap.dependencies.contains(&"fs".to_string()));
    let server_class = codemap.classes.iter().find(|c| c.name == "Server").unwrap();
    assert!(server_class.methods.contains(&"start".to_string()));
    assert!(server_class.methods.contains(&"stop".to_string()));
    assert!(codemap.functions.iter().any(|f| f.name == "createServer"));
}

#[test]
fn python_codemap_captures_indented_methods() {
    let source = "import os\nfrom pathlib import Path\n\n\nclass Runner:\n    def start(self):\n        pass\n\n    def stop(self):\n        pass\n\n\ndef main():\n    pass\n";
    let extractor = RegexCodemapExtractor;
    let codemap = extractor.extract(Path::new("runner.py"), source).unwrap();

    assert_eq!(codemap.language, "python");
    assert!(codemap.dependencies.contains(&"os".to_string()));
    assert!(codemap.dependencies.contains(&"pathlib".to_string()));
    let runner_class = codemap.classes.iter().find(|c| c.name == "Runner").unwrap();
    assert_eq!(runner_class.methods.len(), 2);
    assert!(codemap.functions.iter().any(|f| f.name == "main"));
}

#[test]
fn go_codemap_captures_exported_functions_and_types() {
    let source = "package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n\ntype Config struct {\n\tName string\n}\n\nfunc Run(cfg Config) error {\n\treturn nil\n}\n\nfunc helper() {}\n";
    let extractor = RegexCodemapExtractor;
    let codemap = extractor.extract(Path::new("main.go"), source).unwrap();

    assert_eq!(codemap.language, "go");
    assert!(codemap.dependencies.contains(&"fmt".to_string()));
    assert!(codemap.dependencies.contains(&"os".to_string()));
    assert!(codemap.functions.iter().any(|f| f.name == "Run"));
    assert!(codemap.exports.contains(&"Run".to_string()));
    assert!(!codemap.exports.contains(&"helper".to_string()));
}

#[test]
fn markdown_codemap_captures_headings_as_sections() {
    let source = "# Title\n\nIntro text.\n\n## Usage\n\nDetails.\n";
    let extractor = RegexCodemapExtractor;
    let codemap = extractor.extract(Path::new("README.md"), source).unwrap();

    assert_eq!(codemap.language, "markdown");
    assert_eq!(codemap.sections, vec!["# Title".to_string(), "## Usage".to_string()]);
}
