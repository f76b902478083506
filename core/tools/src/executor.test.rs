use super::*;
use crate::error::ToolError;
use crate::tool::Tool;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

struct EchoTool;

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "echoes its message input"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({"type": "object", "required": ["message"]})
    }

    async fn execute(&self, input: Value, _ctx: &mut ToolContext) -> crate::error::Result<ToolOutput> {
        Ok(ToolOutput::text(input["message"].as_str().unwrap_or_default()))
    }
}

struct FailingTool;

#[async_trait]
impl Tool for FailingTool {
    fn name(&self) -> &str {
        "boom"
    }

    fn description(&self) -> &str {
        "always fails"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({"type": "object"})
    }

    async fn execute(&self, _input: Value, _ctx: &mut ToolContext) -> crate::error::Result<ToolOutput> {
        Err(ToolError::invalid_input("always fails"))
    }
}

fn ctx() -> ToolContext {
    ToolContext::new("/repo", CancellationToken::new())
}

#[tokio::test]
async fn unknown_tool_returns_not_found_error() {
    let registry = ToolRegistry::new();
    let err = execute(&registry, "1", "missing", "{}", &mut ctx()).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound { .. }));
}

#[tokio::test]
async fn malformed_args_dispatch_as_empty_object() {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(EchoTool)).unwrap();
    let output = execute(&registry, "1", "echo", "{not json", &mut ctx()).await.unwrap();
    assert!(output.is_error);
}

#[tokio::test]
async fn execution_failure_becomes_error_output_not_a_propagated_error() {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(FailingTool)).unwrap();
    let output = execute(&registry, "1", "boom", "{}", &mut ctx()).await.unwrap();
    assert!(output.is_error);
}

#[tokio::test]
async fn successful_call_returns_tool_text() {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(EchoTool)).unwrap();
    let output = execute(&registry, "1", "echo", r#"{"message":"hi"}"#, &mut ctx()).await.unwrap();
    assert!(!output.is_error);
}
