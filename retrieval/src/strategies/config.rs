//! `config`: well-known configuration filenames at the repo root,
//! truncated to their first 200 lines when oversized so a lockfile
//! doesn't eat the whole budget on its own (§4.6).

use crate::support::full_candidate;
use crate::support::truncate_lines;
use async_trait::async_trait;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;

const MAX_LINES: usize = 200;

const CONFIG_FILENAMES: &[&str] = &[
    "Cargo.toml",
    "package.json",
    "tsconfig.json",
    "pyproject.toml",
    "go.mod",
    "Makefile",
    "Dockerfile",
    "docker-compose.yml",
    "docker-compose.yaml",
    ".env.example",
    "requirements.txt",
];

pub struct ConfigStrategy;

#[async_trait]
impl Strategy for ConfigStrategy {
    fn name(&self) -> &str {
        "config"
    }

    fn default_weight(&self) -> f64 {
        0.55
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut candidates = Vec::new();

        for filename in CONFIG_FILENAMES {
            let Some(content) = crate::support::read_file(&ctx.root, filename) else { continue };
            let line_count = content.lines().count();
            let body = if line_count > MAX_LINES { truncate_lines(&content, MAX_LINES) } else { content };

            ctx.mark_matched((*filename).to_string());
            candidates.push(full_candidate(self.name(), filename, weight, "well-known configuration file", "repo root", body));
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "config.test.rs"]
mod tests;
