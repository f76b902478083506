use super::*;
use crate::traits::Codemap;
use crate::traits::CodemapExtractor;
use crate::traits::ImportResolver;
use crate::traits::SearchBackend;
use crate::traits::SearchMatch;
use crate::traits::SearchOptions;
use async_trait::async_trait;
use std::path::Path;

struct NullCodemap;
impl CodemapExtractor for NullCodemap {
    fn extract(&self, _path: &Path, _content: &str) -> Option<Codemap> {
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

fn slicer(strategies: Vec<Arc<dyn Strategy>>) -> Slicer {
    Slicer::new(strategies, Arc::new(NullCodemap), Arc::new(NullImport), Arc::new(NullSearch))
}

fn candidate(strategy: &str, path: &str, score: f64, tokens: u64, representation: Representation) -> SliceCandidate {
    SliceCandidate {
        id: format!("{strategy}:{path}"),
        path: path.to_string(),
        strategy: strategy.to_string(),
        representation,
        score,
        tokens,
        reason: format!("matched by {strategy}"),
        source: strategy.to_string(),
        content: Some(format!("content of {path}")),
        codemap: None,
        alternates: Vec::new(),
    }
}

struct FixedStrategy {
    name: &'static str,
    candidates: Vec<SliceCandidate>,
    sidecar: Option<Sidecar>,
    budget_cap: Option<f64>,
}

#[async_trait]
impl Strategy for FixedStrategy {
    fn name(&self) -> &str {
        self.name
    }

    fn default_weight(&self) -> f64 {
        1.0
    }

    fn default_budget_cap(&self) -> Option<f64> {
        self.budget_cap
    }

    async fn execute(&self, _ctx: &mut StrategyContext) -> StrategyOutput {
        StrategyOutput {
            candidates: self.candidates.clone(),
            warnings: Vec::new(),
            sidecar: self.sidecar.clone(),
        }
    }
}

fn request() -> SliceRequest {
    let mut request = SliceRequest::new("fix the auth bug", "/repo");
    request.strategies = Some(vec!["keyword".to_string(), "explicit".to_string()]);
    request
}

#[tokio::test]
async fn plan_runs_registered_strategies_and_records_unknown_ones_as_warnings() {
    let keyword = FixedStrategy {
        name: "keyword",
        candidates: vec![candidate("keyword", "src/auth.rs", 0.6, 400, Representation::Snippet)],
        sidecar: None,
        budget_cap: None,
    };
    let mut request = request();
    request.strategies = Some(vec!["keyword".to_string(), "nonexistent".to_string()]);

    let slicer = slicer(vec![Arc::new(keyword)]);
    let plan = slicer.plan(&request).await;

    assert_eq!(plan.candidates.len(), 1);
    assert!(plan.warnings.iter().any(|w| w.contains("nonexistent")));
    assert_eq!(plan.strategy_totals["keyword"].tokens, 400);
}

#[tokio::test]
async fn plan_merges_duplicate_candidates_from_the_same_strategy_and_path() {
    let mut low = candidate("keyword", "src/auth.rs", 0.4, 100, Representation::Codemap);
    low.reason = "keyword hit".to_string();
    let mut high = candidate("keyword", "src/auth.rs", 0.8, 500, Representation::Full);
    high.reason = "exact match".to_string();

    let keyword = FixedStrategy {
        name: "keyword",
        candidates: vec![low, high],
        sidecar: None,
        budget_cap: None,
    };
    let mut request = request();
    request.strategies = Some(vec!["keyword".to_string()]);

    let slicer = slicer(vec![Arc::new(keyword)]);
    let plan = slicer.plan(&request).await;

    assert_eq!(plan.candidates.len(), 1);
    let merged = &plan.candidates[0];
    assert_eq!(merged.representation, Representation::Full);
    assert_eq!(merged.score, 0.8);
    assert!(merged.reason.contains("keyword hit"));
    assert!(merged.reason.contains("exact match"));
}

#[tokio::test]
async fn assemble_prefers_higher_score_and_skips_what_does_not_fit() {
    let explicit = FixedStrategy {
        name: "explicit",
        candidates: vec![candidate("explicit", "src/a.rs", 0.9, 300, Representation::Full)],
        sidecar: None,
        budget_cap: None,
    };
    let symbols = FixedStrategy {
        name: "symbols",
        candidates: vec![
            candidate("symbols", "src/b.rs", 0.7, 300, Representation::Snippet),
            candidate("symbols", "src/c.rs", 0.2, 300, Representation::Snippet),
        ],
        sidecar: None,
        budget_cap: None,
    };

    let mut request = request();
    request.budget_tokens = 700;

    let slicer = slicer(vec![Arc::new(explicit), Arc::new(symbols)]);
    let plan = slicer.plan(&request).await;
    let result = slicer.assemble(&plan, &request, None);

    let paths: Vec<&str> = result.selected.iter().map(|c| c.path.as_str()).collect();
    assert!(paths.contains(&"src/a.rs"));
    assert!(paths.contains(&"src/b.rs"));
    assert!(!paths.contains(&"src/c.rs"));
    assert!(result.total_tokens <= 700);
}

#[tokio::test]
async fn assemble_falls_back_to_a_cheaper_alternate_when_the_primary_does_not_fit() {
    let mut full = candidate("symbols", "src/big.rs", 0.9, 900, Representation::Full);
    full.alternates.push(ivo_protocol::SliceAlternate {
        representation: Representation::Snippet,
        tokens: 200,
        content: "snippet of big.rs".to_string(),
    });

    let symbols = FixedStrategy {
        name: "symbols",
        candidates: vec![full],
        sidecar: None,
        budget_cap: None,
    };

    let mut request = request();
    request.budget_tokens = 300;

    let slicer = slicer(vec![Arc::new(symbols)]);
    let plan = slicer.plan(&request).await;
    let result = slicer.assemble(&plan, &request, None);

    assert_eq!(result.selected.len(), 1);
    assert_eq!(result.selected[0].representation, Representation::Snippet);
    assert_eq!(result.selected[0].tokens, 200);
}

#[tokio::test]
async fn assemble_reserves_tree_and_forest_tokens_before_packing_candidates() {
    let keyword = FixedStrategy {
        name: "keyword",
        candidates: vec![candidate("keyword", "src/a.rs", 0.8, 500, Representation::Snippet)],
        sidecar: Some(Sidecar {
            key: "tree".to_string(),
            content: "src/\n  a.rs\n".to_string(),
            tokens: 50,
        }),
        budget_cap: None,
    };

    let mut request = request();
    request.budget_tokens = 500;

    let slicer = slicer(vec![Arc::new(keyword)]);
    let plan = slicer.plan(&request).await;
    let result = slicer.assemble(&plan, &request, None);

    assert!(result.context.tree.is_some());
    assert!(result.selected.is_empty(), "500 budget - 50 tree leaves 450, not enough for the 500-token candidate");
}

#[tokio::test]
async fn assemble_deep_intensity_upgrades_a_selected_candidate_when_budget_allows() {
    let mut snippet = candidate("keyword", "src/a.rs", 0.9, 100, Representation::Snippet);
    snippet.alternates.push(ivo_protocol::SliceAlternate {
        representation: Representation::Full,
        tokens: 150,
        content: "full body of a.rs".to_string(),
    });

    let keyword = FixedStrategy {
        name: "keyword",
        candidates: vec![snippet],
        sidecar: None,
        budget_cap: None,
    };

    let mut request = request();
    request.intensity = Intensity::Deep;
    request.budget_tokens = 1_000;

    let slicer = slicer(vec![Arc::new(keyword)]);
    let plan = slicer.plan(&request).await;
    let result = slicer.assemble(&plan, &request, None);

    assert_eq!(result.selected[0].representation, Representation::Full);
    assert_eq!(result.selected[0].tokens, 150);
}
