//! A `regex`-based [`SearchBackend`]: content search against the working
//! tree (§6 collaborator contract), standing in for a faster external
//! indexer the pack does not demonstrate at this layer.

use ivo_context::list_repo_files;
use ivo_context::SearchBackend;
use ivo_context::SearchMatch;
use ivo_context::SearchOptions;
use regex::RegexBuilder;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct RegexSearchBackend;

impl SearchBackend for RegexSearchBackend {
    fn search(&self, root: &Path, term: &str, options: &SearchOptions) -> Vec<SearchMatch> {
        let Ok(pattern) = RegexBuilder::new(&regex::escape(term)).case_insensitive(true).build() else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        for relative in list_repo_files(root) {
            if matches.len() >= options.max_results {
                break;
            }
            let path = root.join(&relative);
            let Ok(content) = fs::read_to_string(&path) else { continue };
            for (line_index, line) in content.lines().enumerate() {
                if matches.len() >= options.max_results {
                    break;
                }
                if pattern.is_match(line) {
                    matches.push(SearchMatch { path: relative.clone(), line: line_index + 1 });
                }
            }
        }
        matches
    }
}

#[cfg(test)]
#[path = "search.test.rs"]
mod tests;
