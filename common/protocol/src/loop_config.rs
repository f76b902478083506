//! The minimal configuration surface the agent loop needs from its caller.

use tokio_util::sync::CancellationToken;

/// Agent-loop configuration. The full provider/model/credential
/// resolution lives in the out-of-scope configuration collaborator and
/// reaches the loop as an already-resolved [`crate::ProviderConfig`].
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub max_tool_rounds: u32,
    pub cancel_token: CancellationToken,
}

impl LoopConfig {
    pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 50;

    pub fn new(cancel_token: CancellationToken) -> Self {
        Self {
            max_tool_rounds: Self::DEFAULT_MAX_TOOL_ROUNDS,
            cancel_token,
        }
    }

    pub fn with_max_tool_rounds(mut self, max_tool_rounds: u32) -> Self {
        self.max_tool_rounds = max_tool_rounds;
        self
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::new(CancellationToken::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_tool_rounds_is_fifty() {
        assert_eq!(LoopConfig::default().max_tool_rounds, 50);
    }
}
