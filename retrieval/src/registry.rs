//! Wires the in-tree collaborators and strategy set together into the
//! `Slicer` a caller constructs once per process (§4.6/§4.7).

use crate::codemap::RegexCodemapExtractor;
use crate::import_resolver::HeuristicImportResolver;
use crate::search::RegexSearchBackend;
use crate::strategies::AstStrategy;
use crate::strategies::ComplexityStrategy;
use crate::strategies::ConfigStrategy;
use crate::strategies::DiffStrategy;
use crate::strategies::DocsStrategy;
use crate::strategies::ExplicitStrategy;
use crate::strategies::ForestStrategy;
use crate::strategies::GraphStrategy;
use crate::strategies::InventoryStrategy;
use crate::strategies::KeywordStrategy;
use crate::strategies::SkeletonStrategy;
use crate::strategies::SymbolsStrategy;
use ivo_context::Slicer;
use ivo_context::Strategy;
use std::sync::Arc;

/// Every strategy this crate ships, in the order `default_strategies_for_intensity`
/// expects them to run: later strategies (`symbols`, `ast`, `graph`) seed
/// from files an earlier one already matched.
pub fn all_strategies() -> Vec<Arc<dyn Strategy>> {
    vec![
        Arc::new(ExplicitStrategy),
        Arc::new(SkeletonStrategy),
        Arc::new(KeywordStrategy),
        Arc::new(SymbolsStrategy),
        Arc::new(GraphStrategy),
        Arc::new(ConfigStrategy),
        Arc::new(DiffStrategy),
        Arc::new(DocsStrategy),
        Arc::new(ComplexityStrategy),
        Arc::new(AstStrategy),
        Arc::new(InventoryStrategy),
        Arc::new(ForestStrategy),
    ]
}

/// A [`Slicer`] wired with the in-tree regex codemap extractor, the
/// heuristic import resolver, and the regex search backend -- the
/// default collaborator stack for a repo with no external indexing
/// service available.
pub fn default_slicer() -> Slicer {
    Slicer::new(all_strategies(), Arc::new(RegexCodemapExtractor), Arc::new(HeuristicImportResolver), Arc::new(RegexSearchBackend))
}

#[cfg(test)]
#[path = "registry.test.rs"]
mod tests;
