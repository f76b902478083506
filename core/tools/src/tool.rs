//! Tool trait definition with a validate / check-permission / execute /
//! post-process / cleanup pipeline.

use crate::context::ToolContext;
use crate::error::ToolError;
use async_trait::async_trait;
use ivo_protocol::ConcurrencySafety;
use ivo_protocol::PermissionResult;
use ivo_protocol::ToolDefinition;
use ivo_protocol::ToolOutput;
use ivo_protocol::ToolResultContent;
use ivo_protocol::ValidationError;
use ivo_protocol::ValidationResult;
use serde_json::Value;

/// A tool that can be executed by the agent.
///
/// Tools implement a 5-stage pipeline: validate, check permission,
/// execute, post-process, cleanup. Only `execute` is required; every
/// other stage has a sensible default.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn input_schema(&self) -> Value;

    /// Default is `Safe` -- tools can run in parallel. Override to return
    /// `Unsafe` for tools that modify state (file writes, shell commands).
    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Safe
    }

    /// Default implementation checks required fields exist against the
    /// JSON schema.
    async fn validate(&self, input: &Value) -> ValidationResult {
        let schema = self.input_schema();
        if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
            for field in required {
                if let Some(field_name) = field.as_str() {
                    if input.get(field_name).is_none() {
                        return ValidationResult::Invalid {
                            errors: vec![ValidationError::with_path(
                                format!("Missing required field: {field_name}"),
                                field_name,
                            )],
                        };
                    }
                }
            }
        }
        ValidationResult::Valid
    }

    /// Default implementation always allows. Override for tools that
    /// need user permission (file writes, shell commands).
    async fn check_permission(&self, _input: &Value, _ctx: &ToolContext) -> PermissionResult {
        PermissionResult::Allowed
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError>;

    /// Default implementation returns output unchanged.
    async fn post_process(&self, output: ToolOutput, _ctx: &ToolContext) -> ToolOutput {
        output
    }

    /// Default implementation does nothing.
    async fn cleanup(&self, _ctx: &ToolContext) {}

    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition::full(self.name(), self.description(), self.input_schema())
    }

    fn is_concurrent_safe(&self) -> bool {
        matches!(self.concurrency_safety(), ConcurrencySafety::Safe)
    }
}

/// Extension constructors for [`ToolOutput`].
pub trait ToolOutputExt {
    fn text(content: impl Into<String>) -> Self;
    fn structured(value: Value) -> Self;
    fn error(message: impl Into<String>) -> Self;
    fn empty() -> Self;
}

impl ToolOutputExt for ToolOutput {
    fn text(content: impl Into<String>) -> Self {
        Self {
            content: ToolResultContent::Text(content.into()),
            is_error: false,
            modifiers: Vec::new(),
        }
    }

    fn structured(value: Value) -> Self {
        Self {
            content: ToolResultContent::Structured(value),
            is_error: false,
            modifiers: Vec::new(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            content: ToolResultContent::Text(message.into()),
            is_error: true,
            modifiers: Vec::new(),
        }
    }

    fn empty() -> Self {
        Self {
            content: ToolResultContent::Text(String::new()),
            is_error: false,
            modifiers: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "tool.test.rs"]
mod tests;
