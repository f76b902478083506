use super::*;
use tokio_util::sync::CancellationToken;

struct DummyTool;

#[async_trait]
impl Tool for DummyTool {
    fn name(&self) -> &str {
        "dummy"
    }

    fn description(&self) -> &str {
        "A dummy tool for testing"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {"message": {"type": "string"}},
            "required": ["message"]
        })
    }

    async fn execute(&self, input: Value, _ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        let message = input["message"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("message must be a string"))?;
        Ok(ToolOutput::text(format!("Received: {message}")))
    }
}

#[tokio::test]
async fn test_tool_trait() {
    let tool = DummyTool;
    assert_eq!(tool.name(), "dummy");
    assert!(tool.is_concurrent_safe());
}

#[tokio::test]
async fn test_validation() {
    let tool = DummyTool;
    let valid = serde_json::json!({"message": "hello"});
    assert!(matches!(tool.validate(&valid).await, ValidationResult::Valid));

    let invalid = serde_json::json!({});
    assert!(matches!(tool.validate(&invalid).await, ValidationResult::Invalid { .. }));
}

#[tokio::test]
async fn test_execute_and_ctx() {
    let tool = DummyTool;
    let mut ctx = ToolContext::new("/repo", CancellationToken::new());
    let output = tool
        .execute(serde_json::json!({"message": "hi"}), &mut ctx)
        .await
        .unwrap();
    assert!(!output.is_error);
}

#[test]
fn test_tool_output_ext() {
    let text_output = ToolOutput::text("hello");
    assert!(!text_output.is_error);

    let error_output = ToolOutput::error("something failed");
    assert!(error_output.is_error);

    let structured = ToolOutput::structured(serde_json::json!({"key": "value"}));
    assert!(!structured.is_error);
}

#[test]
fn test_to_definition() {
    let tool = DummyTool;
    let def = tool.to_definition();
    assert_eq!(def.name, "dummy");
    assert!(def.description.is_some());
}
