//! Language-specific resolution of an import specifier to a repo-relative
//! path (§6 collaborator contract): typescript/javascript relative paths
//! with extension fallbacks, python dot-prefixed relative imports, go's
//! heuristic lookup under common source directories, and rust's
//! `crate::`/`super::`/`self::` module paths.

use crate::language::SupportedLanguage;
use ivo_context::ImportResolver;
use std::path::Path;
use std::path::PathBuf;

const JS_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

/// Best-effort resolver that checks the filesystem for the candidate
/// paths a real bundler/interpreter would try, without executing module
/// resolution config (tsconfig paths, go.mod replace directives, etc).
#[derive(Debug, Default)]
pub struct HeuristicImportResolver;

impl ImportResolver for HeuristicImportResolver {
    fn resolve(&self, from_file: &Path, specifier: &str, repo_root: &Path) -> Option<String> {
        let language = SupportedLanguage::from_path(from_file);
        match language {
            Some(SupportedLanguage::TypeScript) | Some(SupportedLanguage::JavaScript) => resolve_js(from_file, specifier, repo_root),
            Some(SupportedLanguage::Python) => resolve_python(from_file, specifier, repo_root),
            Some(SupportedLanguage::Go) => resolve_go(specifier, repo_root),
            Some(SupportedLanguage::Rust) => resolve_rust(from_file, specifier, repo_root),
            _ => None,
        }
    }
}

fn to_repo_relative(repo_root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(repo_root).ok().map(|p| p.to_string_lossy().replace('\\', "/"))
}

fn resolve_js(from_file: &Path, specifier: &str, repo_root: &Path) -> Option<String> {
    if !(specifier.starts_with("./") || specifier.starts_with("../")) {
        return None;
    }
    let base = from_file.parent()?.join(specifier);
    find_with_extensions(&base, repo_root)
}

fn find_with_extensions(base: &Path, repo_root: &Path) -> Option<String> {
    if base.is_file() {
        return to_repo_relative(repo_root, base);
    }
    for ext in JS_EXTENSIONS {
        let candidate = with_extension(base, ext);
        if candidate.is_file() {
            return to_repo_relative(repo_root, &candidate);
        }
    }
    for ext in JS_EXTENSIONS {
        let candidate = base.join(format!("index.{ext}"));
        if candidate.is_file() {
            return to_repo_relative(repo_root, &candidate);
        }
    }
    None
}

fn with_extension(base: &Path, ext: &str) -> PathBuf {
    let mut with_ext = base.as_os_str().to_os_string();
    with_ext.push(".");
    with_ext.push(ext);
    PathBuf::from(with_ext)
}

fn resolve_python(from_file: &Path, specifier: &str, repo_root: &Path) -> Option<String> {
    if !specifier.starts_with('.') {
        return None;
    }
    let dots = specifier.chars().take_while(|c| *c == '.').count();
    let remainder = &specifier[dots..];
    let mut dir = from_file.parent()?.to_path_buf();
    for _ in 1..dots {
        dir = dir.parent()?.to_path_buf();
    }
    let module_path = remainder.replace('.', "/");
    let base = if module_path.is_empty() { dir.clone() } else { dir.join(&module_path) };

    let as_module = with_extension(&base, "py");
    if as_module.is_file() {
        return to_repo_relative(repo_root, &as_module);
    }
    let as_package = base.join("__init__.py");
    if as_package.is_file() {
        return to_repo_relative(repo_root, &as_package);
    }
    None
}

const GO_SOURCE_DIRS: &[&str] = &["", "internal", "pkg", "cmd"];

fn resolve_go(specifier: &str, repo_root: &Path) -> Option<String> {
    let tail = specifier.rsplit('/').next().unwrap_or(specifier);
    for dir in GO_SOURCE_DIRS {
        let candidate = if dir.is_empty() { repo_root.join(tail) } else { repo_root.join(dir).join(tail) };
        if candidate.is_dir() {
            return to_repo_relative(repo_root, &candidate);
        }
    }
    None
}

fn resolve_rust(from_file: &Path, specifier: &str, repo_root: &Path) -> Option<String> {
    let relative_path = if let Some(rest) = specifier.strip_prefix("crate::") {
        rest.replace("::", "/")
    } else if let Some(rest) = specifier.strip_prefix("self::") {
        rest.replace("::", "/")
    } else if let Some(rest) = specifier.strip_prefix("super::") {
        let parent = from_file.parent()?.parent().unwrap_or(Path::new(""));
        return find_rust_module(parent, &rest.replace("::", "/"), repo_root);
    } else {
        return None;
    };

    let src_root = find_src_root(from_file, repo_root)?;
    find_rust_module(&src_root, &relative_path, repo_root)
}

fn find_src_root(from_file: &Path, repo_root: &Path) -> Option<PathBuf> {
    let mut current = from_file.parent()?;
    loop {
        if current.file_name().is_some_and(|n| n == "src") {
            return Some(current.to_path_buf());
        }
        if current == repo_root {
            return Some(repo_root.to_path_buf());
        }
        current = current.parent()?;
    }
}

fn find_rust_module(base: &Path, relative_path: &str, repo_root: &Path) -> Option<String> {
    let as_file = base.join(format!("{relative_path}.rs"));
    if as_file.is_file() {
        return to_repo_relative(repo_root, &as_file);
    }
    let as_mod = base.join(relative_path).join("mod.rs");
    if as_mod.is_file() {
        return to_repo_relative(repo_root, &as_mod);
    }
    None
}

#[cfg(test)]
#[path = "import_resolver.test.rs"]
mod tests;
