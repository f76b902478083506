//! `symbols`: codemaps for files already matched by an earlier-running
//! strategy, seeded from `ctx.matched_files` (§4.6) so the model sees a
//! matched file's structural shape alongside whatever earned it a hit.

use crate::support::codemap_candidate;
use async_trait::async_trait;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use std::path::Path;

pub struct SymbolsStrategy;

#[async_trait]
impl Strategy for SymbolsStrategy {
    fn name(&self) -> &str {
        "symbols"
    }

    fn default_weight(&self) -> f64 {
        0.65
    }

    fn is_available(&self, ctx: &StrategyContext) -> bool {
        !ctx.matched_files.is_empty()
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut seeds: Vec<String> = ctx.matched_files.iter().cloned().collect();
        seeds.sort();

        let mut candidates = Vec::new();
        for path in seeds {
            let Some(content) = crate::support::read_file(&ctx.root, &path) else { continue };
            let Some(codemap) = ctx.codemap_extractor.extract(Path::new(&path), &content) else { continue };
            candidates.push(codemap_candidate(self.name(), &path, weight, "structural summary of an already-matched file", "matched files", codemap.render()));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "symbols.test.rs"]
mod tests;
