//! `graph`: breadth-first expansion over the import graph, seeded from
//! `ctx.matched_files`, to depth 1/2/3 by intensity (§4.6). For repos
//! with more than 500 candidate files the universe considered for the
//! graph is restricted to directories that already contain a seed, so
//! building it stays cheap on large trees.

use crate::support::codemap_candidate;
use async_trait::async_trait;
use ivo_context::build_import_graph;
use ivo_context::bfs;
use ivo_context::list_repo_files;
use ivo_context::Codemap;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;
use ivo_protocol::Intensity;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const LARGE_REPO_THRESHOLD: usize = 500;

pub struct GraphStrategy;

fn max_depth(intensity: Intensity) -> usize {
    match intensity {
        Intensity::Lite => 1,
        Intensity::Standard => 2,
        Intensity::Deep => 3,
    }
}

fn top_level_dir(path: &str) -> &str {
    path.split('/').next().unwrap_or(path)
}

#[async_trait]
impl Strategy for GraphStrategy {
    fn name(&self) -> &str {
        "graph"
    }

    fn default_weight(&self) -> f64 {
        0.60
    }

    fn is_available(&self, ctx: &StrategyContext) -> bool {
        !ctx.matched_files.is_empty()
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut seeds: Vec<String> = ctx.matched_files.iter().cloned().collect();
        seeds.sort();

        let all_files = list_repo_files(&ctx.root);
        let universe: Vec<String> = if all_files.len() > LARGE_REPO_THRESHOLD {
            debug!(file_count = all_files.len(), "large repo, restricting import graph to seed-adjacent directories");
            let seed_dirs: std::collections::HashSet<&str> = seeds.iter().map(|s| top_level_dir(s)).collect();
            all_files.into_iter().filter(|f| seed_dirs.contains(top_level_dir(f))).collect()
        } else {
            all_files
        };

        let mut codemaps: Vec<Codemap> = Vec::new();
        let mut rendered: HashMap<String, String> = HashMap::new();
        for relative in &universe {
            let Some(content) = crate::support::read_file(&ctx.root, relative) else { continue };
            let Some(mut codemap) = ctx.codemap_extractor.extract(Path::new(relative), &content) else { continue };
            rendered.insert(relative.clone(), codemap.render());
            let absolute = ctx.root.join(relative);
            codemap.dependencies = codemap
                .dependencies
                .iter()
                .filter_map(|specifier| ctx.import_resolver.resolve(&absolute, specifier, &ctx.root))
                .collect();
            codemaps.push(codemap);
        }

        let graph = build_import_graph(&codemaps);
        let depths = bfs(&graph, &seeds, max_depth(ctx.intensity));

        let mut ranked: Vec<(String, usize)> = depths.into_iter().filter(|(_, depth)| *depth > 0).collect();
        ranked.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        let mut candidates = Vec::new();
        for (path, depth) in ranked {
            let Some(content) = rendered.get(&path) else { continue };
            let score = weight / (depth as f64);
            ctx.mark_matched(path.clone());
            candidates.push(codemap_candidate(self.name(), &path, score, format!("reachable at depth {depth} from a matched file"), "import graph", content.clone()));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "graph.test.rs"]
mod tests;
