//! `skeleton`: entry-point filenames under priority directories (`src/`,
//! `lib/`, `packages/`), surfaced as codemaps so the model sees a repo's
//! shape before anything task-specific (§4.6).

use crate::support::codemap_candidate;
use async_trait::async_trait;
use ivo_context::list_repo_files;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;

const PRIORITY_DIRS: &[&str] = &["src", "lib", "packages"];

const ENTRY_POINT_NAMES: &[&str] = &["main.rs", "lib.rs", "mod.rs", "index.ts", "index.tsx", "index.js", "__init__.py", "main.py", "main.go"];

pub struct SkeletonStrategy;

#[async_trait]
impl Strategy for SkeletonStrategy {
    fn name(&self) -> &str {
        "skeleton"
    }

    fn default_weight(&self) -> f64 {
        0.90
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut candidates = Vec::new();

        for relative in list_repo_files(&ctx.root) {
            let under_priority_dir = PRIORITY_DIRS.iter().any(|dir| relative.starts_with(&format!("{dir}/")) || relative == *dir);
            if !under_priority_dir {
                continue;
            }
            let file_name = relative.rsplit('/').next().unwrap_or(&relative);
            if !ENTRY_POINT_NAMES.contains(&file_name) {
                continue;
            }

            let Some(content) = crate::support::read_file(&ctx.root, &relative) else { continue };
            let Some(codemap) = ctx.codemap_extractor.extract(std::path::Path::new(&relative), &content) else {
                continue;
            };

            ctx.mark_matched(relative.clone());
            candidates.push(codemap_candidate(self.name(), &relative, weight, "entry point under a priority directory", "repo layout", codemap.render()));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "skeleton.test.rs"]
mod tests;
