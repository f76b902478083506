//! The slicer engine (C7): `plan` gathers ranked candidates from every
//! applicable strategy under a token budget; `assemble` packs a final
//! selection and renders it into a [`ivo_protocol::ContextResult`].

use crate::keywords::expand_keywords;
use crate::keywords::extract_raw_keywords;
use crate::strategy::Strategy;
use crate::strategy::StrategyContext;
use crate::traits::CodemapExtractor;
use crate::traits::ImportResolver;
use crate::traits::SearchBackend;
use ivo_protocol::ContextFileEntry;
use ivo_protocol::ContextFileMode;
use ivo_protocol::ContextResult;
use ivo_protocol::Intensity;
use ivo_protocol::Representation;
use ivo_protocol::Sidecar;
use ivo_protocol::SliceCandidate;
use ivo_protocol::SlicePlan;
use ivo_protocol::SliceRequest;
use ivo_protocol::SliceResult;
use ivo_protocol::StrategyCap;
use ivo_protocol::StrategyTotals;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use tracing::warn;

/// Recognized per-strategy budget-fraction caps applied during `assemble`
/// (§4.7 step 3). A strategy not listed here competes against the
/// overall remaining budget with no separate cap, unless it supplies its
/// own [`Strategy::default_budget_cap`].
fn recognized_budget_cap(strategy: &str) -> Option<f64> {
    match strategy {
        "keyword" => Some(0.20),
        "diff" => Some(0.10),
        "graph" => Some(0.15),
        "semantic" => Some(0.15),
        "docs" => Some(0.10),
        "forest" => Some(0.25),
        _ => None,
    }
}

fn default_strategies_for_intensity(intensity: Intensity) -> Vec<String> {
    let base = ["explicit", "skeleton", "keyword"];
    let standard_extra = ["symbols", "graph", "config"];
    let deep_extra = ["diff", "docs", "complexity", "ast", "inventory", "forest"];

    let mut names: Vec<&str> = base.to_vec();
    if matches!(intensity, Intensity::Standard | Intensity::Deep) {
        names.extend(standard_extra);
    }
    if matches!(intensity, Intensity::Deep) {
        names.extend(deep_extra);
    }
    names.into_iter().map(str::to_string).collect()
}

/// Orchestrates the registered strategies and the shared helper handles
/// they execute against.
pub struct Slicer {
    strategies: Vec<Arc<dyn Strategy>>,
    codemap_extractor: Arc<dyn CodemapExtractor>,
    import_resolver: Arc<dyn ImportResolver>,
    search_backend: Arc<dyn SearchBackend>,
}

impl Slicer {
    pub fn new(
        strategies: Vec<Arc<dyn Strategy>>,
        codemap_extractor: Arc<dyn CodemapExtractor>,
        import_resolver: Arc<dyn ImportResolver>,
        search_backend: Arc<dyn SearchBackend>,
    ) -> Self {
        Self {
            strategies,
            codemap_extractor,
            import_resolver,
            search_backend,
        }
    }

    fn lookup(&self, name: &str) -> Option<&Arc<dyn Strategy>> {
        self.strategies.iter().find(|strategy| strategy.name() == name)
    }

    pub async fn plan(&self, request: &SliceRequest) -> SlicePlan {
        let strategy_names = request
            .strategies
            .clone()
            .unwrap_or_else(|| default_strategies_for_intensity(request.intensity));

        let raw_keywords = extract_raw_keywords(&request.task);
        let keywords = expand_keywords(&raw_keywords);

        let mut ctx = StrategyContext::new(
            request.repo_root.clone(),
            request.task.clone(),
            keywords,
            request.budget_tokens,
            request.intensity,
            Arc::clone(&self.codemap_extractor),
            Arc::clone(&self.import_resolver),
            Arc::clone(&self.search_backend),
        );

        let mut warnings = Vec::new();
        let mut candidates: Vec<SliceCandidate> = Vec::new();
        let mut sidecars: HashMap<String, Sidecar> = HashMap::new();

        for name in &strategy_names {
            let Some(strategy) = self.lookup(name) else {
                warnings.push(format!("unknown strategy: {name}"));
                continue;
            };
            if !strategy.is_available(&ctx) {
                debug!(strategy = name, "strategy not available for this request");
                continue;
            }

            let output = strategy.execute(&mut ctx).await;
            if !output.warnings.is_empty() {
                warn!(strategy = name, warnings = ?output.warnings, "strategy reported warnings");
            }
            warnings.extend(output.warnings);

            if let Some(sidecar) = output.sidecar {
                sidecars.insert(sidecar.key.clone(), sidecar);
            }

            let mut strategy_candidates = output.candidates;
            if let Some(cap) = request.strategy_caps.get(name) {
                apply_strategy_cap(&mut strategy_candidates, cap);
            }
            candidates.extend(strategy_candidates);
        }

        let candidates = merge_duplicate_candidates(candidates);

        let mut strategy_totals: HashMap<String, StrategyTotals> = HashMap::new();
        for candidate in &candidates {
            let totals = strategy_totals.entry(candidate.strategy.clone()).or_default();
            totals.candidates += 1;
            totals.tokens += candidate.tokens;
        }

        let tree = sidecars.get("tree").cloned();
        let forest = sidecars.get("forest").cloned();
        let candidate_tokens: u64 = candidates.iter().map(|c| c.tokens).sum();
        let total_tokens = candidate_tokens + tree.as_ref().map_or(0, |s| s.tokens) + forest.as_ref().map_or(0, |s| s.tokens);

        SlicePlan {
            request_strategies: strategy_names,
            candidates,
            strategy_totals,
            warnings,
            tree,
            forest,
            total_tokens,
        }
    }

    pub fn assemble(&self, plan: &SlicePlan, request: &SliceRequest, budget_override: Option<u64>) -> SliceResult {
        assemble(plan, request, budget_override, &self.strategies)
    }
}

fn budget_cap_for(strategy: &str, strategies: &[Arc<dyn Strategy>]) -> Option<f64> {
    recognized_budget_cap(strategy).or_else(|| strategies.iter().find(|s| s.name() == strategy).and_then(|s| s.default_budget_cap()))
}

/// Sort a strategy's raw candidates by score desc, tokens asc, path asc,
/// then take until `cap.max_items`/`cap.max_tokens` triggers.
fn apply_strategy_cap(candidates: &mut Vec<SliceCandidate>, cap: &StrategyCap) {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.tokens.cmp(&b.tokens))
            .then(a.path.cmp(&b.path))
    });

    let mut kept = Vec::new();
    let mut tokens_so_far = 0u64;
    for candidate in candidates.drain(..) {
        if let Some(max_items) = cap.max_items {
            if kept.len() >= max_items {
                break;
            }
        }
        if let Some(max_tokens) = cap.max_tokens {
            if tokens_so_far + candidate.tokens > max_tokens {
                break;
            }
        }
        tokens_so_far += candidate.tokens;
        kept.push(candidate);
    }
    *candidates = kept;
}

/// Merge candidates sharing `(strategy, path)`: keep the higher-rank
/// representation, union reasons/sources, take the max score.
fn merge_duplicate_candidates(candidates: Vec<SliceCandidate>) -> Vec<SliceCandidate> {
    let mut by_key: HashMap<(String, String), SliceCandidate> = HashMap::new();
    let mut order: Vec<(String, String)> = Vec::new();

    for candidate in candidates {
        let key = (candidate.strategy.clone(), candidate.path.clone());
        match by_key.get_mut(&key) {
            None => {
                order.push(key.clone());
                by_key.insert(key, candidate);
            }
            Some(existing) => {
                existing.score = existing.score.max(candidate.score);
                if !existing.reason.contains(&candidate.reason) {
                    existing.reason = format!("{}; {}", existing.reason, candidate.reason);
                }
                if !existing.source.contains(&candidate.source) {
                    existing.source = format!("{}; {}", existing.source, candidate.source);
                }
                if candidate.representation > existing.representation {
                    existing.representation = candidate.representation;
                    existing.tokens = candidate.tokens;
                    existing.content = candidate.content;
                    existing.codemap = candidate.codemap;
                }
                existing.alternates.extend(candidate.alternates);
            }
        }
    }

    order.into_iter().filter_map(|key| by_key.remove(&key)).collect()
}

fn strategy_order(strategy: &str, request_strategies: &[String]) -> i32 {
    if strategy == "explicit" {
        return -1;
    }
    request_strategies
        .iter()
        .position(|s| s == strategy)
        .map(|index| index as i32)
        .unwrap_or(999)
}

fn rank_candidates(candidates: &[SliceCandidate], request_strategies: &[String]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..candidates.len()).collect();
    indices.sort_by(|&a, &b| {
        let ca = &candidates[a];
        let cb = &candidates[b];
        cb.score
            .partial_cmp(&ca.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| strategy_order(&ca.strategy, request_strategies).cmp(&strategy_order(&cb.strategy, request_strategies)))
            .then_with(|| cb.representation.cmp(&ca.representation))
            .then_with(|| ca.tokens.cmp(&cb.tokens))
            .then_with(|| ca.path.cmp(&cb.path))
    });
    indices
}

struct Selected {
    candidate: SliceCandidate,
}

fn assemble(plan: &SlicePlan, request: &SliceRequest, budget_override: Option<u64>, strategies: &[Arc<dyn Strategy>]) -> SliceResult {
    let budget_tokens = budget_override.unwrap_or(request.budget_tokens);
    let mut remaining = budget_tokens;

    let tree = plan.tree.clone().filter(|sidecar| {
        if sidecar.tokens <= remaining {
            remaining -= sidecar.tokens;
            true
        } else {
            false
        }
    });
    let forest = plan.forest.clone().filter(|sidecar| {
        if sidecar.tokens <= remaining {
            remaining -= sidecar.tokens;
            true
        } else {
            false
        }
    });

    let order = rank_candidates(&plan.candidates, &plan.request_strategies);

    let mut spent_by_strategy: HashMap<String, u64> = HashMap::new();
    let mut selected: Vec<Selected> = Vec::new();
    let mut selected_keys: HashSet<(String, Representation)> = HashSet::new();

    for index in order {
        let candidate = &plan.candidates[index];
        let dedupe_key = (candidate.path.clone(), candidate.representation);
        if selected_keys.contains(&dedupe_key) {
            continue;
        }

        let strategy_cap_fraction = budget_cap_for(&candidate.strategy, strategies);
        let strategy_remaining = strategy_cap_fraction.map(|fraction| {
            let cap = (budget_tokens as f64 * fraction) as u64;
            let spent = spent_by_strategy.get(&candidate.strategy).copied().unwrap_or(0);
            cap.saturating_sub(spent)
        });
        let effective_remaining = match strategy_remaining {
            Some(strategy_remaining) => remaining.min(strategy_remaining),
            None => remaining,
        };

        let picked = if candidate.tokens <= effective_remaining {
            Some((candidate.representation, candidate.tokens, candidate.content.clone(), candidate.codemap.clone()))
        } else {
            candidate
                .alternates
                .iter()
                .find(|alt| alt.tokens <= effective_remaining)
                .map(|alt| (alt.representation, alt.tokens, Some(alt.content.clone()), None))
        };

        let Some((representation, tokens, content, codemap)) = picked else {
            continue;
        };

        let mut chosen = candidate.clone();
        chosen.representation = representation;
        chosen.tokens = tokens;
        chosen.content = content;
        chosen.codemap = codemap;

        remaining -= tokens;
        *spent_by_strategy.entry(chosen.strategy.clone()).or_insert(0) += tokens;
        selected_keys.insert(dedupe_key);
        selected.push(Selected { candidate: chosen });
    }

    if matches!(request.intensity, Intensity::Deep) {
        selected.sort_by_key(|s| s.candidate.representation.rank());
        for entry in selected.iter_mut() {
            let original = plan
                .candidates
                .iter()
                .find(|c| c.path == entry.candidate.path && c.strategy == entry.candidate.strategy);
            let Some(original) = original else { continue };

            let upgrade = original
                .alternates
                .iter()
                .filter(|alt| alt.representation > entry.candidate.representation)
                .min_by_key(|alt| alt.representation.rank());

            if let Some(alt) = upgrade {
                let extra_cost = alt.tokens.saturating_sub(entry.candidate.tokens);
                if extra_cost <= remaining {
                    remaining -= extra_cost;
                    entry.candidate.representation = alt.representation;
                    entry.candidate.content = Some(alt.content.clone());
                    entry.candidate.tokens = alt.tokens;
                }
            }
        }
    }

    let mut strategy_totals: HashMap<String, StrategyTotals> = HashMap::new();
    let mut files = Vec::with_capacity(selected.len());
    for entry in &selected {
        let candidate = &entry.candidate;
        let totals = strategy_totals.entry(candidate.strategy.clone()).or_default();
        totals.candidates += 1;
        totals.tokens += candidate.tokens;

        let mode = match candidate.representation {
            Representation::Full => ContextFileMode::Full,
            Representation::Snippet => ContextFileMode::Slice,
            Representation::Codemap | Representation::Reference => ContextFileMode::Codemap,
        };
        let (content, codemap) = match mode {
            ContextFileMode::Codemap => (None, candidate.codemap.clone().or_else(|| candidate.content.clone())),
            _ => (candidate.content.clone(), None),
        };

        files.push(ContextFileEntry {
            path: candidate.path.clone(),
            tokens: candidate.tokens,
            mode,
            content,
            codemap,
            relevance: (candidate.score * 100.0).round() / 100.0,
            reason: candidate.reason.clone(),
            strategy: candidate.strategy.clone(),
        });
    }

    let total_tokens = files.iter().map(|f| f.tokens).sum::<u64>()
        + tree.as_ref().map_or(0, |s| s.tokens)
        + forest.as_ref().map_or(0, |s| s.tokens);

    SliceResult {
        selected: selected.into_iter().map(|s| s.candidate).collect(),
        total_tokens,
        budget_tokens,
        context: ContextResult {
            task: request.task.clone(),
            files,
            tree: tree.map(|s| s.content),
            forest: forest.map(|s| s.content),
            strategy_totals,
        },
    }
}

#[cfg(test)]
#[path = "slicer.test.rs"]
mod tests;
