//! Tool-schema sanitization before it is sent to an OpenAI-compatible
//! provider (§4.2): recursively strip keys the wire format does not
//! tolerate.

use serde_json::Value;

const STRIPPED_KEYS: &[&str] = &["patternProperties", "additionalProperties", "$schema", "$id"];

/// Recursively strip `patternProperties`, `additionalProperties`,
/// `$schema`, and `$id` from a JSON schema.
pub fn sanitize_schema(schema: &Value) -> Value {
    match schema {
        Value::Object(map) => {
            let cleaned: serde_json::Map<String, Value> = map
                .iter()
                .filter(|(key, _)| !STRIPPED_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), sanitize_schema(value)))
                .collect();
            Value::Object(cleaned)
        }
        Value::Array(items) => Value::Array(items.iter().map(sanitize_schema).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "sanitize.test.rs"]
mod tests;
