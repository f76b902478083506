//! Tool-facing vocabulary: definitions, schemas, validation, and results.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Whether a tool may run concurrently with other tools in the same round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencySafety {
    #[default]
    Safe,
    Unsafe,
}

/// A single validation failure, optionally scoped to a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub path: Option<String>,
}

impl ValidationError {
    pub fn with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

/// The outcome of validating a tool's input against its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { errors: Vec<ValidationError> },
}

/// The outcome of a permission check before a tool executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionResult {
    Allowed,
    Denied { reason: String },
}

/// Tool call result content. Only text flows back into the model
/// transcript; other variants carry richer payload for callers that want
/// it (e.g. a CLI renderer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolResultContent {
    Text(String),
    Image { data: String, mime_type: String },
    Structured(Value),
}

impl ToolResultContent {
    /// The text that flows back into the model transcript for this content.
    pub fn as_transcript_text(&self) -> String {
        match self {
            ToolResultContent::Text(text) => text.clone(),
            ToolResultContent::Structured(value) => value.to_string(),
            ToolResultContent::Image { .. } => String::new(),
        }
    }
}

/// Output of one tool execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: ToolResultContent,
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
}

/// A registered tool's static description, as exposed to a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: Option<String>,
    pub parameter_schema: Value,
}

impl ToolDefinition {
    pub fn full(name: impl Into<String>, description: impl Into<String>, parameter_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            parameter_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_invalid_carries_errors() {
        let result = ValidationResult::Invalid {
            errors: vec![ValidationError::with_path("missing field", "path")],
        };
        assert!(matches!(result, ValidationResult::Invalid { .. }));
    }

    #[test]
    fn transcript_text_for_structured_content() {
        let content = ToolResultContent::Structured(serde_json::json!({"a": 1}));
        assert_eq!(content.as_transcript_text(), r#"{"a":1}"#);
    }
}
