//! Canonical hashing of a tool call's name and arguments, used by the
//! agent loop's repetitive-call ring buffer (§4.3).

use serde_json::Value;
use std::hash::Hash;
use std::hash::Hasher;

/// A canonical descriptor for one tool invocation: the tool name plus a
/// hash of its arguments with key order normalized, so two calls with the
/// same arguments serialized in a different key order still compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallDescriptor {
    name_hash: u64,
    args_hash: u64,
}

impl CallDescriptor {
    pub fn new(name: &str, arguments_json: &str) -> Self {
        let args: Value = serde_json::from_str(arguments_json).unwrap_or_else(|_| Value::Object(Default::default()));
        Self {
            name_hash: hash_str(name),
            args_hash: hash_canonical_json(&args),
        }
    }
}

fn hash_str(s: &str) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Hash a JSON value with object keys sorted, so key order never affects
/// the result.
fn hash_canonical_json(value: &Value) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    hash_value(value, &mut hasher);
    hasher.finish()
}

fn hash_value(value: &Value, hasher: &mut impl Hasher) {
    match value {
        Value::Null => 0u8.hash(hasher),
        Value::Bool(b) => {
            1u8.hash(hasher);
            b.hash(hasher);
        }
        Value::Number(n) => {
            2u8.hash(hasher);
            n.to_string().hash(hasher);
        }
        Value::String(s) => {
            3u8.hash(hasher);
            s.hash(hasher);
        }
        Value::Array(items) => {
            4u8.hash(hasher);
            for item in items {
                hash_value(item, hasher);
            }
        }
        Value::Object(map) => {
            5u8.hash(hasher);
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                key.hash(hasher);
                hash_value(&map[key], hasher);
            }
        }
    }
}

/// A fixed-size ring buffer (capacity 3) of recent call descriptors,
/// living on the agent-loop stack; not shared across tasks or turns.
#[derive(Debug, Clone, Default)]
pub struct RepetitionGuard {
    buffer: Vec<CallDescriptor>,
}

impl RepetitionGuard {
    pub const CAPACITY: usize = 3;

    /// Record a call and report whether the last `CAPACITY` recorded
    /// calls (including this one) are all identical.
    pub fn push(&mut self, name: &str, arguments_json: &str) -> bool {
        let descriptor = CallDescriptor::new(name, arguments_json);
        self.buffer.push(descriptor);
        if self.buffer.len() > Self::CAPACITY {
            self.buffer.remove(0);
        }
        self.buffer.len() == Self::CAPACITY && self.buffer.iter().all(|d| *d == descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_args_in_different_key_order_hash_equal() {
        let a = CallDescriptor::new("bash", r#"{"command":"ls","cwd":"."}"#);
        let b = CallDescriptor::new("bash", r#"{"cwd":".","command":"ls"}"#);
        assert_eq!(a, b);
    }

    #[test]
    fn trips_after_three_identical_calls() {
        let mut guard = RepetitionGuard::default();
        assert!(!guard.push("bash", r#"{"command":"ls"}"#));
        assert!(!guard.push("bash", r#"{"command":"ls"}"#));
        assert!(guard.push("bash", r#"{"command":"ls"}"#));
    }

    #[test]
    fn resets_when_a_different_call_interrupts() {
        let mut guard = RepetitionGuard::default();
        assert!(!guard.push("bash", r#"{"command":"ls"}"#));
        assert!(!guard.push("bash", r#"{"command":"pwd"}"#));
        assert!(!guard.push("bash", r#"{"command":"ls"}"#));
    }
}
