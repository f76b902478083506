//! `list_repo_files`: a `.gitignore`-aware enumerator with a plain
//! recursive-walk fallback for roots `ignore` cannot traverse (e.g. not a
//! git repository).

use ignore::WalkBuilder;
use std::path::Path;
use std::path::PathBuf;

/// Repo-relative paths under `root`, `.gitignore`-filtered where possible.
pub fn list_repo_files(root: &Path) -> Vec<String> {
    let mut seen = Vec::new();
    let mut walker = WalkBuilder::new(root);
    walker.hidden(false);
    let mut walked_any = false;

    for entry in walker.build().flatten() {
        walked_any = true;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            if let Ok(relative) = entry.path().strip_prefix(root) {
                seen.push(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    if !walked_any {
        fallback_walk(root, root, &mut seen);
    }

    seen.sort();
    seen
}

fn fallback_walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            fallback_walk(root, &path, out);
        } else if let Ok(relative) = path.strip_prefix(root) {
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Resolve `relative` against `root`.
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}

#[cfg(test)]
#[path = "repo_files.test.rs"]
mod tests;
