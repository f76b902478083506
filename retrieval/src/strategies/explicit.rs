//! `explicit`: tokens in the task that resolve to existing file paths,
//! taken at `full` representation and the highest default weight of any
//! strategy (§4.6) since the user named the file directly.

use crate::support::full_candidate;
use async_trait::async_trait;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;

pub struct ExplicitStrategy;

/// Split the raw task text on whitespace and the punctuation that would
/// otherwise trail a path mentioned in prose (`"check src/lib.rs."` ->
/// `src/lib.rs`), without touching internal path separators or dots.
fn path_like_tokens(task: &str) -> Vec<String> {
    task.split_whitespace()
        .map(|token| token.trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '(' | ')' | '[' | ']')))
        .filter(|token| token.contains('/') || token.contains('.'))
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl Strategy for ExplicitStrategy {
    fn name(&self) -> &str {
        "explicit"
    }

    fn default_weight(&self) -> f64 {
        0.95
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput {
        let weight = self.default_weight();
        let mut candidates = Vec::new();

        for token in path_like_tokens(&ctx.task) {
            let normalized = token.trim_start_matches("./");
            if !ctx.root.join(normalized).is_file() {
                continue;
            }
            if let Some(content) = crate::support::read_file(&ctx.root, normalized) {
                ctx.mark_matched(normalized);
                candidates.push(full_candidate(
                    self.name(),
                    normalized,
                    weight,
                    format!("\"{normalized}\" named directly in the task"),
                    "task text",
                    content,
                ));
            }
        }

        StrategyOutput { candidates, warnings: Vec::new(), sidecar: None }
    }
}

#[cfg(test)]
#[path = "explicit.test.rs"]
mod tests;
