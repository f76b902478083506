//! A regex-based [`CodemapExtractor`] good enough for the strategies in
//! this crate: imports/classes/functions/types for the curly-brace and
//! indentation-based languages the corpus mostly contains, plus a
//! section outline for markdown. Anything outside [`SupportedLanguage`]
//! returns `None`, matching the collaborator contract's "unsupported
//! language" case (§6).

use crate::language::SupportedLanguage;
use ivo_context::ClassInfo;
use ivo_context::Codemap;
use ivo_context::CodemapExtractor;
use ivo_context::FunctionInfo;
use ivo_context::TypeInfo;
use ivo_context::TypeKind;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn regex_cell(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex is valid")
}

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| regex_cell($pattern))
        }
    };
}

static_regex!(rust_use, r"(?m)^\s*use\s+([\w:]+(?:::\{[^}]*\})?)\s*;");
static_regex!(rust_fn, r"(?m)^\s*(?:pub(?:\([^)]*\))?\s+)?(async\s+)?fn\s+(\w+)\s*(\([^)]*\))");
static_regex!(rust_struct, r"(?m)^\s*(pub(?:\([^)]*\))?\s+)?struct\s+(\w+)");
static_regex!(rust_enum, r"(?m)^\s*(pub(?:\([^)]*\))?\s+)?enum\s+(\w+)");
static_regex!(rust_trait, r"(?m)^\s*(pub(?:\([^)]*\))?\s+)?trait\s+(\w+)");
static_regex!(rust_type_alias, r"(?m)^\s*(pub(?:\([^)]*\))?\s+)?type\s+(\w+)\s*=");

static_regex!(ts_import, r#"(?m)^\s*import\s+(?:[^'"]*\sfrom\s+)?['"]([^'"]+)['"]"#);
static_regex!(ts_require, r#"require\(\s*['"]([^'"]+)['"]\s*\)"#);
static_regex!(ts_export_fn, r"(?m)^\s*export\s+(?:default\s+)?(async\s+)?function\s+(\w+)\s*(\([^)]*\))");
static_regex!(ts_fn, r"(?m)^\s*(?:export\s+)?(?:default\s+)?(async\s+)?function\s+(\w+)\s*(\([^)]*\))");
static_regex!(ts_arrow_fn, r"(?m)^\s*(?:export\s+)?const\s+(\w+)\s*=\s*(async\s*)?\([^)]*\)\s*(?::[^=]+)?=>");
static_regex!(ts_class, r"(?m)^\s*(?:export\s+(?:default\s+)?)?class\s+(\w+)");
static_regex!(ts_interface, r"(?m)^\s*(?:export\s+)?interface\s+(\w+)");
static_regex!(ts_type_alias, r"(?m)^\s*(?:export\s+)?type\s+(\w+)\s*=");
static_regex!(ts_enum, r"(?m)^\s*(?:export\s+)?enum\s+(\w+)");
static_regex!(ts_method, r"(?m)^\s*(?:public\s+|private\s+|protected\s+|static\s+|async\s+)*(\w+)\s*\([^)]*\)\s*(?::[^{]+)?\{");

static_regex!(py_import, r"(?m)^\s*(?:from\s+(\S+)\s+import|import\s+(\S+))");
static_regex!(py_def, r"(?m)^(\s*)def\s+(\w+)\s*(\([^)]*\))");
static_regex!(py_class, r"(?m)^(\s*)class\s+(\w+)");

static_regex!(go_import_single, r#"(?m)^\s*import\s+"([^"]+)""#);
static_regex!(go_import_block_line, r#"(?m)^\s*"([^"]+)"\s*$"#);
static_regex!(go_func, r"(?m)^\s*func\s+(?:\([^)]*\)\s*)?(\w+)\s*(\([^)]*\))");
static_regex!(go_type, r"(?m)^\s*type\s+(\w+)\s+(struct|interface)\b");

static_regex!(md_heading, r"(?m)^(#{1,6})\s+(.+)$");

/// In-tree [`CodemapExtractor`]. Stateless; safe to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct RegexCodemapExtractor;

impl CodemapExtractor for RegexCodemapExtractor {
    fn extract(&self, path: &Path, content: &str) -> Option<Codemap> {
        let language = SupportedLanguage::from_path(path)?;
        let path_string = path.to_string_lossy().replace('\\', "/");

        let codemap = match language {
            SupportedLanguage::Rust => extract_rust(&path_string, content),
            SupportedLanguage::TypeScript | SupportedLanguage::JavaScript => extract_ts_like(&path_string, content, language),
            SupportedLanguage::Python => extract_python(&path_string, content),
            SupportedLanguage::Go => extract_go(&path_string, content),
            SupportedLanguage::Markdown => extract_markdown(&path_string, content),
        };
        Some(codemap)
    }
}

fn extract_rust(path: &str, content: &str) -> Codemap {
    let dependencies: Vec<String> = rust_use().captures_iter(content).map(|m| m[1].to_string()).collect();

    let functions: Vec<FunctionInfo> = rust_fn()
        .captures_iter(content)
        .map(|m| FunctionInfo {
            name: m[2].to_string(),
            signature: format!("{}{}", &m[2], &m[3]),
            is_async: m.get(1).is_some(),
        })
        .collect();

    let classes: Vec<ClassInfo> = rust_struct()
        .captures_iter(content)
        .map(|m| ClassInfo { name: m[2].to_string(), methods: Vec::new(), properties: Vec::new() })
        .collect();

    let mut types: Vec<TypeInfo> = rust_enum().captures_iter(content).map(|m| TypeInfo { name: m[2].to_string(), kind: TypeKind::Enum }).collect();
    types.extend(rust_trait().captures_iter(content).map(|m| TypeInfo { name: m[2].to_string(), kind: TypeKind::Interface }));
    types.extend(rust_type_alias().captures_iter(content).map(|m| TypeInfo { name: m[2].to_string(), kind: TypeKind::TypeAlias }));

    let exports: Vec<String> = functions
        .iter()
        .map(|f| f.name.clone())
        .chain(classes.iter().map(|c| c.name.clone()))
        .chain(types.iter().map(|t| t.name.clone()))
        .collect();

    Codemap { path: path.to_string(), language: "rust".to_string(), exports, classes, functions, types, dependencies, sections: Vec::new() }
}

fn extract_ts_like(path: &str, content: &str, language: SupportedLanguage) -> Codemap {
    let mut dependencies: Vec<String> = ts_import().captures_iter(content).map(|m| m[1].to_string()).collect();
    dependencies.extend(ts_require().captures_iter(content).map(|m| m[1].to_string()));

    let mut functions: Vec<FunctionInfo> = ts_fn()
        .captures_iter(content)
        .map(|m| FunctionInfo { name: m[2].to_string(), signature: format!("{}{}", &m[2], &m[3]), is_async: m.get(1).is_some() })
        .collect();
    functions.extend(ts_arrow_fn().captures_iter(content).map(|m| FunctionInfo {
        name: m[1].to_string(),
        signature: format!("{}()", &m[1]),
        is_async: m.get(2).is_some(),
    }));

    let classes: Vec<ClassInfo> = ts_class()
        .captures_iter(content)
        .map(|m| {
            let name = m[1].to_string();
            let body = class_body(content, m.get(0).unwrap().end());
            let methods = ts_method().captures_iter(&body).map(|mm| mm[1].to_string()).filter(|n| n != "constructor").collect();
            ClassInfo { name, methods, properties: Vec::new() }
        })
        .collect();

    let mut types: Vec<TypeInfo> = ts_interface().captures_iter(content).map(|m| TypeInfo { name: m[1].to_string(), kind: TypeKind::Interface }).collect();
    types.extend(ts_type_alias().captures_iter(content).map(|m| TypeInfo { name: m[1].to_string(), kind: TypeKind::TypeAlias }));
    types.extend(ts_enum().captures_iter(content).map(|m| TypeInfo { name: m[1].to_string(), kind: TypeKind::Enum }));

    let exports: Vec<String> = ts_export_fn()
        .captures_iter(content)
        .map(|m| m[2].to_string())
        .chain(classes.iter().filter(|_| content.contains("export")).map(|c| c.name.clone()))
        .collect();

    Codemap {
        path: path.to_string(),
        language: language.name().to_string(),
        exports,
        classes,
        functions,
        types,
        dependencies,
        sections: Vec::new(),
    }
}

/// Grab the `{ ... }` body of a class starting just after its opening
/// brace, by counting brace depth -- good enough for well-formed source,
/// which is all a best-effort codemap needs to handle.
fn class_body(content: &str, search_from: usize) -> String {
    let rest = &content[search_from..];
    let Some(open) = rest.find('{') else { return String::new() };
    let mut depth = 0i32;
    for (offset, ch) in rest[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return rest[open..open + offset + 1].to_string();
                }
            }
            _ => {}
        }
    }
    rest[open..].to_string()
}

fn extract_python(path: &str, content: &str) -> Codemap {
    let dependencies: Vec<String> = py_import()
        .captures_iter(content)
        .map(|m| m.get(1).or_else(|| m.get(2)).map(|g| g.as_str().to_string()).unwrap_or_default())
        .filter(|s| !s.is_empty())
        .collect();

    let functions: Vec<FunctionInfo> = py_def()
        .captures_iter(content)
        .filter(|m| m[1].is_empty())
        .map(|m| FunctionInfo { name: m[2].to_string(), signature: format!("{}{}", &m[2], &m[3]), is_async: false })
        .collect();

    let classes: Vec<ClassInfo> = py_class()
        .captures_iter(content)
        .map(|m| {
            let indent = m[1].len();
            let name = m[2].to_string();
            let header_end = m.get(0).unwrap().end();
            let body_start = content[header_end..].find('\n').map_or(content.len(), |offset| header_end + offset + 1);
            let methods = python_indented_block_methods(content, body_start, indent);
            ClassInfo { name, methods, properties: Vec::new() }
        })
        .collect();

    let exports: Vec<String> = functions.iter().map(|f| f.name.clone()).chain(classes.iter().map(|c| c.name.clone())).collect();

    Codemap { path: path.to_string(), language: "python".to_string(), exports, classes, functions, types: Vec::new(), dependencies, sections: Vec::new() }
}

fn python_indented_block_methods(content: &str, body_start: usize, class_indent: usize) -> Vec<String> {
    let mut methods = Vec::new();
    for line in content[body_start..].lines() {
        if line.trim().is_empty() {
            continue;
        }
        let line_indent = line.len() - line.trim_start().len();
        if line_indent <= class_indent {
            break;
        }
        if let Some(captures) = py_def().captures(line) {
            methods.push(captures[2].to_string());
        }
    }
    methods
}

fn extract_go(path: &str, content: &str) -> Codemap {
    let mut dependencies: Vec<String> = go_import_single().captures_iter(content).map(|m| m[1].to_string()).collect();
    if let Some(block_start) = content.find("import (") {
        if let Some(block_end) = content[block_start..].find(')') {
            let block = &content[block_start..block_start + block_end];
            dependencies.extend(go_import_block_line().captures_iter(block).map(|m| m[1].to_string()));
        }
    }

    let functions: Vec<FunctionInfo> = go_func()
        .captures_iter(content)
        .map(|m| FunctionInfo { name: m[1].to_string(), signature: format!("{}{}", &m[1], &m[2]), is_async: false })
        .collect();

    let types: Vec<TypeInfo> = go_type()
        .captures_iter(content)
        .map(|m| TypeInfo { name: m[1].to_string(), kind: if &m[2] == "interface" { TypeKind::Interface } else { TypeKind::TypeAlias } })
        .collect();

    let exports: Vec<String> = functions
        .iter()
        .filter(|f| f.name.chars().next().is_some_and(|c| c.is_uppercase()))
        .map(|f| f.name.clone())
        .chain(types.iter().filter(|t| t.name.chars().next().is_some_and(|c| c.is_uppercase())).map(|t| t.name.clone()))
        .collect();

    Codemap { path: path.to_string(), language: "go".to_string(), exports, classes: Vec::new(), functions, types, dependencies, sections: Vec::new() }
}

fn extract_markdown(path: &str, content: &str) -> Codemap {
    let sections: Vec<String> = md_heading().captures_iter(content).map(|m| format!("{} {}", &m[1], m[2].trim())).collect();
    Codemap {
        path: path.to_string(),
        language: "markdown".to_string(),
        exports: Vec::new(),
        classes: Vec::new(),
        functions: Vec::new(),
        types: Vec::new(),
        dependencies: Vec::new(),
        sections,
    }
}

#[cfg(test)]
#[path = "codemap.test.rs"]
mod tests;
