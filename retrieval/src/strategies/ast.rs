//! `ast`: structural codemaps for files the keyword search also hits,
//! so the model gets a file's overall shape to go with `keyword`'s
//! narrow snippet when tokens matter (§4.6).

use crate::support::codemap_candidate;
use async_trait::async_trait;
use ivo_context::SearchOptions;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use ivo_protocol::Intensity;
use std::collections::HashMap;
use std::path::Path;

pub struct AstStrategy;

fn matched_files_cap(intensity: Intensity) -> usize {
    match intensity {
        Intensity::Lite => 3,
        Intensity::Standard => 5,
        Intensity::Deep => 8,
    }
}

#[async_trait]
impl Strategy for AstStrategy {
    fn name(&self) -> &str {
        "ast"
    }

    fn default_weight(&self) -> f64 {
        0.70
    }

    fn is_available(&self, ctx: &StrategyContext) -> bool {
        !ctx.keywords.is_empty()
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let options = SearchOptions { context_lines: 0, max_results: 80 };

        let mut hit_counts: HashMap<String, usize> = HashMap::new();
        let keywords = ctx.keywords.clone();
        let total_keywords = keywords.len().max(1);
        for keyword in &keywords {
            for hit in ctx.search_backend.search(&ctx.root, keyword, &options) {
                *hit_counts.entry(hit.path).or_default() += 1;
            }
        }

        let mut paths: Vec<&String> = hit_counts.keys().collect();
        paths.sort_by(|a, b| hit_counts[*b].cmp(&hit_counts[*a]).then_with(|| a.cmp(b)));
        paths.truncate(matched_files_cap(ctx.intensity));

        let mut candidates = Vec::new();
        for path in paths {
            let Some(content) = crate::support::read_file(&ctx.root, path) else { continue };
            let Some(codemap) = ctx.codemap_extractor.extract(Path::new(path), &content) else { continue };
            let hit_count = hit_counts[path];
            let score = weight * (hit_count as f64 / total_keywords as f64).min(1.0).max(0.3);
            ctx.mark_matched(path.clone());
            candidates.push(codemap_candidate(self.name(), path, score, format!("structural summary of a file with {hit_count} keyword hit(s)"), "keyword search", codemap.render()));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "ast.test.rs"]
mod tests;
