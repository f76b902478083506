//! `forest`: an optional sidecar from an external knowledge-graph
//! service. No such backend ships in this crate, so the strategy is
//! permanently unavailable here; a deployment that wires one in
//! replaces this with a real [`Strategy`] impl rather than flipping a
//! flag, since the shape of that integration (auth, request payload)
//! isn't known yet (§4.6: "skip when unavailable or sub-threshold").

use async_trait::async_trait;
use ivo_context::Strategy;
use ivo_context::StrategyContext;
use ivo_context::StrategyOutput;

pub struct ForestStrategy;

#[async_trait]
impl Strategy for ForestStrategy {
    fn name(&self) -> &str {
        "forest"
    }

    fn default_weight(&self) -> f64 {
        0.50
    }

    fn default_budget_cap(&self) -> Option<f64> {
        Some(0.25)
    }

    fn is_available(&self, _ctx: &StrategyContext) -> bool {
        false
    }

    async fn execute(&self, _ctx: &mut StrategyContext) -> StrategyOutput {
        StrategyOutput::default()
    }
}

#[cfg(test)]
#[path = "forest.test.rs"]
mod tests;
