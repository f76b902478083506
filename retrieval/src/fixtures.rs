//! Test-only [`StrategyContext`] construction shared by every strategy's
//! test module, wired to this crate's real in-tree collaborators rather
//! than mocks, so strategies exercise the same codemap/search/import
//! behavior they run against in production.

use crate::codemap::RegexCodemapExtractor;
use crate::import_resolver::HeuristicImportResolver;
use crate::search::RegexSearchBackend;
use ivo_context::StrategyContext;
use ivo_protocol::Intensity;
use std::path::Path;
use std::sync::Arc;

pub fn context(root: &Path, task: &str, keywords: Vec<String>, budget: u64, intensity: Intensity) -> StrategyContext {
    StrategyContext::new(root, task, keywords, budget, intensity, Arc::new(RegexCodemapExtractor), Arc::new(HeuristicImportResolver), Arc::new(RegexSearchBackend))
}
