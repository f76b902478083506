//! `diff`: the full content of files changed in the working tree
//! (staged, unstaged, untracked), skipped entirely when there are no
//! changes to report (§4.6).

use crate::support::full_candidate;
use crate::vcs::changed_files;
use async_trait::async_trait;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;

pub struct DiffStrategy;

#[async_trait]
impl Strategy for DiffStrategy {
    fn name(&self) -> &str {
        "diff"
    }

    fn default_weight(&self) -> f64 {
        0.80
    }

    fn default_budget_cap(&self) -> Option<f64> {
        Some(0.10)
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let paths = changed_files(&ctx.root).await;

        let mut candidates = Vec::new();
        for path in paths {
            let Some(content) = crate::support::read_file(&ctx.root, &path) else { continue };
            ctx.mark_matched(path.clone());
            candidates.push(full_candidate(self.name(), &path, weight, "modified in the working tree", "git diff", content));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "diff.test.rs"]
mod tests;
