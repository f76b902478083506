//! `docs`: the repo's core documentation files always included verbatim,
//! plus any other markdown under a doc-like path that matches the
//! task's keywords, surfaced as a structural codemap rather than full
//! text to keep a large docs tree cheap (§4.6).

use crate::support::codemap_candidate;
use crate::support::full_candidate;
use async_trait::async_trait;
use ivo_context::SearchOptions;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use std::collections::HashSet;
use std::path::Path;

const CORE_DOC_NAMES: &[&str] = &["README.md", "ARCHITECTURE.md", "CONTRIBUTING.md"];

fn is_doc_like(path: &str) -> bool {
    path.ends_with(".md") || path.ends_with(".markdown")
}

pub struct DocsStrategy;

#[async_trait]
impl Strategy for DocsStrategy {
    fn name(&self) -> &str {
        "docs"
    }

    fn default_weight(&self) -> f64 {
        0.50
    }

    fn default_budget_cap(&self) -> Option<f64> {
        Some(0.10)
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut candidates = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for name in CORE_DOC_NAMES {
            let Some(content) = crate::support::read_file(&ctx.root, name) else { continue };
            seen.insert((*name).to_string());
            ctx.mark_matched((*name).to_string());
            candidates.push(full_candidate(self.name(), name, weight, "core documentation file", "repo root", content));
        }

        if !ctx.keywords.is_empty() {
            let options = SearchOptions { context_lines: 0, max_results: 40 };
            let mut extra_paths: HashSet<String> = HashSet::new();
            let keywords = ctx.keywords.clone();
            for keyword in &keywords {
                for hit in ctx.search_backend.search(&ctx.root, keyword, &options) {
                    if is_doc_like(&hit.path) && !seen.contains(&hit.path) {
                        extra_paths.insert(hit.path);
                    }
                }
            }

            let mut extra_paths: Vec<String> = extra_paths.into_iter().collect();
            extra_paths.sort();
            for path in extra_paths {
                let Some(content) = crate::support::read_file(&ctx.root, &path) else { continue };
                let Some(codemap) = ctx.codemap_extractor.extract(Path::new(&path), &content) else { continue };
                seen.insert(path.clone());
                ctx.mark_matched(path.clone());
                candidates.push(codemap_candidate(self.name(), &path, weight * 0.8, "documentation matching the task's keywords", "keyword search over docs", codemap.render()));
            }
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "docs.test.rs"]
mod tests;
