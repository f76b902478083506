//! The collaborator contracts §6 calls out as narrow Rust traits: a
//! structural codemap extractor, an import resolver, and a search
//! backend. `ivo-context` only depends on these shapes; `ivo-retrieval`
//! supplies the in-tree implementations strategies actually run against.

use std::path::Path;

/// A structural summary of one source file, as produced by
/// [`CodemapExtractor::extract`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Codemap {
    pub path: String,
    pub language: String,
    pub exports: Vec<String>,
    pub classes: Vec<ClassInfo>,
    pub functions: Vec<FunctionInfo>,
    pub types: Vec<TypeInfo>,
    pub dependencies: Vec<String>,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassInfo {
    pub name: String,
    pub methods: Vec<String>,
    pub properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInfo {
    pub name: String,
    pub signature: String,
    pub is_async: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Interface,
    TypeAlias,
    Enum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub name: String,
    pub kind: TypeKind,
}

impl Codemap {
    /// A compact textual rendering used as the `codemap` representation
    /// content for a [`ivo_protocol::SliceCandidate`].
    pub fn render(&self) -> String {
        let mut out = format!("# {} ({})\n", self.path, self.language);
        if !self.exports.is_empty() {
            out.push_str(&format!("exports: {}\n", self.exports.join(", ")));
        }
        for class in &self.classes {
            out.push_str(&format!("class {} {{ {} }}\n", class.name, class.methods.join(", ")));
        }
        for function in &self.functions {
            let marker = if function.is_async { "async " } else { "" };
            out.push_str(&format!("{marker}fn {}\n", function.signature));
        }
        for ty in &self.types {
            out.push_str(&format!("type {}\n", ty.name));
        }
        out
    }
}

/// Extracts a structural summary from a file's content. Returns `None`
/// when the language is unsupported.
pub trait CodemapExtractor: Send + Sync {
    fn extract(&self, path: &Path, content: &str) -> Option<Codemap>;
}

/// Resolves an import specifier found in `from_file` to a repo-relative
/// path, per the language-specific rules in §6.
pub trait ImportResolver: Send + Sync {
    fn resolve(&self, from_file: &Path, specifier: &str, repo_root: &Path) -> Option<String>;
}

/// One line-level search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub path: String,
    pub line: usize,
}

/// Search options mirroring the collaborator contract in §6.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub context_lines: usize,
    pub max_results: usize,
}

/// Content search against the working tree.
pub trait SearchBackend: Send + Sync {
    fn search(&self, root: &Path, term: &str, options: &SearchOptions) -> Vec<SearchMatch>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codemap_render_includes_path_and_members() {
        let codemap = Codemap {
            path: "src/lib.rs".to_string(),
            language: "rust".to_string(),
            exports: vec!["run".to_string()],
            functions: vec![FunctionInfo {
                name: "run".to_string(),
                signature: "run()".to_string(),
                is_async: true,
            }],
            ..Default::default()
        };
        let rendered = codemap.render();
        assert!(rendered.contains("src/lib.rs"));
        assert!(rendered.contains("async fn run()"));
    }
}
