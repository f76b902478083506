//! `keyword`: hits from `search` on the slicer's expanded keywords,
//! packed as snippets built by merging per-match line ranges with
//! `±contextLines` (§4.6). Intensity selects how many distinct files get
//! surfaced, how much context surrounds a hit, and how many raw matches
//! `search` is allowed to return.

use crate::support::merge_line_ranges;
use crate::support::snippet_candidate;
use async_trait::async_trait;
use ivo_context::SearchOptions;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use ivo_protocol::Intensity;
use std::collections::HashMap;

pub struct KeywordStrategy;

/// `(matched_files, context_lines, max_results)` by intensity (§4.6).
fn profile(intensity: Intensity) -> (usize, usize, usize) {
    match intensity {
        Intensity::Lite => (6, 1, 40),
        Intensity::Standard => (8, 2, 80),
        Intensity::Deep => (14, 4, 120),
    }
}

#[async_trait]
impl Strategy for KeywordStrategy {
    fn name(&self) -> &str {
        "keyword"
    }

    fn default_weight(&self) -> f64 {
        0.75
    }

    fn is_available(&self, ctx: &StrategyContext) -> bool {
        !ctx.keywords.is_empty()
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let (matched_files_cap, context_lines, max_results) = profile(ctx.intensity);
        let options = SearchOptions { context_lines, max_results };

        let mut hits_by_path: HashMap<String, Vec<usize>> = HashMap::new();
        let mut matched_keywords: HashMap<String, usize> = HashMap::new();
        let total_keywords = ctx.keywords.len().max(1);

        let keywords = ctx.keywords.clone();
        for keyword in &keywords {
            for hit in ctx.search_backend.search(&ctx.root, keyword, &options) {
                hits_by_path.entry(hit.path.clone()).or_default().push(hit.line);
                *matched_keywords.entry(hit.path).or_default() += 1;
            }
        }

        let mut paths: Vec<&String> = hits_by_path.keys().collect();
        paths.sort_by(|a, b| matched_keywords[*b].cmp(&matched_keywords[*a]).then_with(|| a.cmp(b)));
        paths.truncate(matched_files_cap);

        let mut candidates = Vec::new();
        for path in paths {
            let Some(content) = crate::support::read_file(&ctx.root, path) else { continue };
            let total_lines = content.lines().count();
            let lines = hits_by_path[path].clone();
            let ranges = merge_line_ranges(lines.clone(), context_lines, total_lines);
            let all_lines: Vec<&str> = content.lines().collect();
            let snippet = ranges
                .iter()
                .map(|(start, end)| all_lines[(start - 1)..*end].join("\n"))
                .collect::<Vec<_>>()
                .join("\n...\n");

            let hit_count = matched_keywords[path];
            let score = weight * (hit_count as f64 / total_keywords as f64).min(1.0).max(0.3);

            ctx.mark_matched(path.clone());
            candidates.push(snippet_candidate(
                self.name(),
                path,
                score,
                format!("{hit_count} keyword hit(s)"),
                "keyword search",
                snippet,
            ));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "keyword.test.rs"]
mod tests;
