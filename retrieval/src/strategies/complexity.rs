//! `complexity`: the repo's largest code files by byte size, on the
//! heuristic that size correlates with the parts of a codebase most
//! likely to need careful reading. Codemap when the extractor supports
//! the language, reference otherwise (§4.6).

use crate::support::codemap_candidate;
use crate::support::reference_candidate;
use async_trait::async_trait;
use ivo_context::list_repo_files;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use ivo_protocol::Intensity;
use std::path::Path;

pub struct ComplexityStrategy;

fn top_n(intensity: Intensity) -> usize {
    match intensity {
        Intensity::Lite => 4,
        Intensity::Standard => 8,
        Intensity::Deep => 12,
    }
}

#[async_trait]
impl Strategy for ComplexityStrategy {
    fn name(&self) -> &str {
        "complexity"
    }

    fn default_weight(&self) -> f64 {
        0.45
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut sized: Vec<(String, u64)> = Vec::new();
        for relative in list_repo_files(&ctx.root) {
            if let Ok(metadata) = std::fs::metadata(ctx.root.join(&relative)) {
                sized.push((relative, metadata.len()));
            }
        }
        sized.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sized.truncate(top_n(ctx.intensity));

        let mut candidates = Vec::new();
        for (path, _size) in sized {
            let Some(content) = crate::support::read_file(&ctx.root, &path) else { continue };
            ctx.mark_matched(path.clone());
            match ctx.codemap_extractor.extract(Path::new(&path), &content) {
                Some(codemap) => candidates.push(codemap_candidate(self.name(), &path, weight, "one of the largest files in the repo", "file size ranking", codemap.render())),
                None => candidates.push(reference_candidate(self.name(), &path, weight * 0.6, "one of the largest files in the repo (unsupported language)", "file size ranking")),
            }
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "complexity.test.rs"]
mod tests;
