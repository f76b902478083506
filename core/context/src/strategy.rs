//! The retrieval-strategy plugin contract (C6) and the shared context
//! strategies execute against while the slicer runs `plan`.

use crate::traits::CodemapExtractor;
use crate::traits::ImportResolver;
use crate::traits::SearchBackend;
use async_trait::async_trait;
use ivo_protocol::Intensity;
use ivo_protocol::Sidecar;
use ivo_protocol::SliceCandidate;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared, mutable state every strategy executes against. `matched_files`
/// accumulates across strategies in registration order, so a
/// later-running strategy (`symbols`, `ast`) can seed itself from files
/// an earlier one (`keyword`, `explicit`) already matched.
pub struct StrategyContext {
    pub root: PathBuf,
    /// The task's original text, unsplit -- `explicit` needs this to spot
    /// literal file paths a token-level keyword split would fragment.
    pub task: String,
    pub keywords: Vec<String>,
    pub matched_files: HashSet<String>,
    pub budget: u64,
    pub intensity: Intensity,
    pub codemap_extractor: Arc<dyn CodemapExtractor>,
    pub import_resolver: Arc<dyn ImportResolver>,
    pub search_backend: Arc<dyn SearchBackend>,
}

impl StrategyContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        root: impl Into<PathBuf>,
        task: impl Into<String>,
        keywords: Vec<String>,
        budget: u64,
        intensity: Intensity,
        codemap_extractor: Arc<dyn CodemapExtractor>,
        import_resolver: Arc<dyn ImportResolver>,
        search_backend: Arc<dyn SearchBackend>,
    ) -> Self {
        Self {
            root: root.into(),
            task: task.into(),
            keywords,
            matched_files: HashSet::new(),
            budget,
            intensity,
            codemap_extractor,
            import_resolver,
            search_backend,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record `path` as matched so later strategies can seed from it.
    pub fn mark_matched(&mut self, path: impl Into<String>) {
        self.matched_files.insert(path.into());
    }
}

/// What one strategy's `execute` produces: candidates ranked against the
/// plan's budget, any non-fatal warnings, and at most one sidecar
/// artifact (`tree` for `inventory`, `forest` for `forest`).
#[derive(Debug, Clone, Default)]
pub struct StrategyOutput {
    pub candidates: Vec<SliceCandidate>,
    pub warnings: Vec<String>,
    pub sidecar: Option<Sidecar>,
}

/// A pluggable retrieval strategy (C6).
#[async_trait]
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;

    /// The weight folded into a candidate's score before global ranking.
    fn default_weight(&self) -> f64;

    /// The default fraction of the total budget `assemble` reserves for
    /// this strategy's candidates, if the slicer has no caller override.
    fn default_budget_cap(&self) -> Option<f64> {
        None
    }

    /// Whether this strategy can contribute anything given `ctx` (e.g.
    /// `diff` with no pending changes can short-circuit).
    fn is_available(&self, ctx: &StrategyContext) -> bool {
        let _ = ctx;
        true
    }

    async fn execute(&self, ctx: &mut StrategyContext) -> StrategyOutput;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SearchMatch;
    use crate::traits::SearchOptions;

    struct NullCodemap;
    impl CodemapExtractor for NullCodemap {
        fn extract(&self, _path: &Path, _content: &str) -> Option<crate::traits::Codemap> {
            None
        }
    }

    struct NullImport;
    impl ImportResolver for NullImport {
        fn resolve(&self, _from_file: &Path, _specifier: &str, _repo_root: &Path) -> Option<String> {
            None
        }
    }

    struct NullSearch;
    impl SearchBackend for NullSearch {
        fn search(&self, _root: &Path, _term: &str, _options: &SearchOptions) -> Vec<SearchMatch> {
            Vec::new()
        }
    }

    fn context() -> StrategyContext {
        StrategyContext::new(
            "/repo",
            "fix the auth bug",
            vec!["auth".to_string()],
            32_000,
            Intensity::Deep,
            Arc::new(NullCodemap),
            Arc::new(NullImport),
            Arc::new(NullSearch),
        )
    }

    #[test]
    fn mark_matched_accumulates_across_calls() {
        let mut ctx = context();
        ctx.mark_matched("src/a.rs");
        ctx.mark_matched("src/b.rs");
        assert_eq!(ctx.matched_files.len(), 2);
    }
}
