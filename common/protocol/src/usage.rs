//! Token usage accounting shared between the provider clients, the agent
//! loop, and the scheduler.

use serde::Deserialize;
use serde::Serialize;

/// Authoritative usage counts reported by a provider; the local
/// `estimate_tokens` helper is only an approximation used for budget
/// arithmetic before a real count is available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u64,
    pub output: u64,
    pub total: u64,
}

impl TokenUsage {
    pub fn new(input: u64, output: u64) -> Self {
        Self {
            input,
            output,
            total: input + output,
        }
    }

    /// Fold a per-turn usage snapshot into a running accumulator.
    pub fn accumulate(&mut self, other: TokenUsage) {
        self.input += other.input;
        self.output += other.output;
        self.total += other.total;
    }
}

/// Canonical local token estimate: `ceil(len(content) / 4)` on character
/// length. Used wherever budget arithmetic occurs; authoritative counts
/// come only from provider usage events.
pub fn estimate_tokens(content: &str) -> u64 {
    let len = content.chars().count() as u64;
    len.div_ceil(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_tokens_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abc"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        assert_eq!(estimate_tokens("abcdefgh"), 2);
    }

    #[test]
    fn accumulate_sums_fields() {
        let mut total = TokenUsage::new(10, 5);
        total.accumulate(TokenUsage::new(3, 2));
        assert_eq!(total, TokenUsage { input: 13, output: 7, total: 20 });
    }
}
