//! Context-slicer vocabulary: requests, candidates, plans, and results
//! shared between the retrieval strategies (C6), the slicer engine (C7),
//! and the context store (C8).

use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// How aggressively the slicer should search for context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Lite,
    Standard,
    Deep,
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Deep
    }
}

/// A retrieval strategy's name. Strategies are identified by name rather
/// than an enum so a caller's `strategies` override list can name any
/// strategy registered at runtime.
pub type StrategyName = String;

/// Request driving one slicer `plan` call.
#[derive(Debug, Clone)]
pub struct SliceRequest {
    pub task: String,
    pub repo_root: std::path::PathBuf,
    pub budget_tokens: u64,
    pub warning_threshold: f64,
    pub intensity: Intensity,
    pub strategies: Option<Vec<StrategyName>>,
    pub strategy_intensity: HashMap<StrategyName, Intensity>,
    pub strategy_caps: HashMap<StrategyName, StrategyCap>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub include_tree: bool,
}

impl SliceRequest {
    pub const DEFAULT_BUDGET_TOKENS: u64 = 32_000;
    pub const DEFAULT_WARNING_THRESHOLD: f64 = 0.75;

    pub fn new(task: impl Into<String>, repo_root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            task: task.into(),
            repo_root: repo_root.into(),
            budget_tokens: Self::DEFAULT_BUDGET_TOKENS,
            warning_threshold: Self::DEFAULT_WARNING_THRESHOLD,
            intensity: Intensity::default(),
            strategies: None,
            strategy_intensity: HashMap::new(),
            strategy_caps: HashMap::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            include_tree: false,
        }
    }
}

/// Per-strategy `{maxItems, maxTokens}` cap applied during `plan`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyCap {
    pub max_items: Option<usize>,
    pub max_tokens: Option<u64>,
}

/// Content-shape ordering used when deduping or upgrading candidates:
/// `full > snippet > codemap > reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Reference = 0,
    Codemap = 1,
    Snippet = 2,
    Full = 3,
}

impl Representation {
    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// An alternate, cheaper-or-richer rendering of a candidate's content,
/// considered during the assemble "pick" and "upgrade" steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceAlternate {
    pub representation: Representation,
    pub tokens: u64,
    pub content: String,
}

/// A proposed code artifact emitted by a retrieval strategy, ranked
/// against a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceCandidate {
    pub id: String,
    pub path: String,
    pub strategy: StrategyName,
    pub representation: Representation,
    pub score: f64,
    pub tokens: u64,
    pub reason: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codemap: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternates: Vec<SliceAlternate>,
}

impl SliceCandidate {
    pub const MIN_SCORE: f64 = 0.05;
    pub const MAX_SCORE: f64 = 1.0;

    pub fn clamp_score(score: f64) -> f64 {
        score.clamp(Self::MIN_SCORE, Self::MAX_SCORE)
    }
}

/// A non-per-file artifact attached to a plan: the repo tree or an
/// external knowledge-graph forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sidecar {
    pub key: String,
    pub content: String,
    pub tokens: u64,
}

/// Per-strategy totals collected during `plan`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrategyTotals {
    pub candidates: usize,
    pub tokens: u64,
}

/// The result of `Slicer::plan`.
#[derive(Debug, Clone)]
pub struct SlicePlan {
    pub request_strategies: Vec<StrategyName>,
    pub candidates: Vec<SliceCandidate>,
    pub strategy_totals: HashMap<StrategyName, StrategyTotals>,
    pub warnings: Vec<String>,
    pub tree: Option<Sidecar>,
    pub forest: Option<Sidecar>,
    pub total_tokens: u64,
}

/// One packed file entry in an assembled [`SliceResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextFileEntry {
    pub path: String,
    pub tokens: u64,
    pub mode: ContextFileMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codemap: Option<String>,
    pub relevance: f64,
    pub reason: String,
    pub strategy: StrategyName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextFileMode {
    Full,
    Slice,
    Codemap,
}

/// The structured, shape-agnostic packed context (§6: serialized by an
/// external formatter into `xml`/`markdown`/`json`, never produced here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextResult {
    pub task: String,
    pub files: Vec<ContextFileEntry>,
    pub tree: Option<String>,
    pub forest: Option<String>,
    pub strategy_totals: HashMap<StrategyName, StrategyTotals>,
}

/// The result of `Slicer::assemble`.
#[derive(Debug, Clone)]
pub struct SliceResult {
    pub selected: Vec<SliceCandidate>,
    pub total_tokens: u64,
    pub budget_tokens: u64,
    pub context: ContextResult,
}

/// Metadata persisted alongside an assembled context body in the context
/// store (C8).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextMeta {
    pub id: String,
    pub task: String,
    pub files: Vec<String>,
    pub tokens: u64,
    pub budget: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representation_rank_orders_full_highest() {
        assert!(Representation::Full > Representation::Snippet);
        assert!(Representation::Snippet > Representation::Codemap);
        assert!(Representation::Codemap > Representation::Reference);
    }

    #[test]
    fn clamp_score_respects_bounds() {
        assert_eq!(SliceCandidate::clamp_score(-1.0), 0.05);
        assert_eq!(SliceCandidate::clamp_score(5.0), 1.0);
        assert_eq!(SliceCandidate::clamp_score(0.5), 0.5);
    }

    #[test]
    fn slice_request_defaults() {
        let request = SliceRequest::new("fix bug", "/repo");
        assert_eq!(request.budget_tokens, 32_000);
        assert_eq!(request.intensity, Intensity::Deep);
    }
}
