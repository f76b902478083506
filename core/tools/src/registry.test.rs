use super::*;
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::ToolOutputExt;
use async_trait::async_trait;
use ivo_protocol::ToolOutput;
use serde_json::Value;

struct TestTool {
    name: &'static str,
}

#[async_trait]
impl Tool for TestTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        "a test tool"
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({"type": "object"})
    }

    async fn execute(&self, _input: Value, _ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::text("ok"))
    }
}

#[test]
fn register_and_lookup() {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(TestTool { name: "echo" })).unwrap();
    assert!(registry.lookup("echo").is_some());
    assert!(registry.lookup("missing").is_none());
}

#[test]
fn rejects_duplicate_registration() {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(TestTool { name: "echo" })).unwrap();
    let err = registry.register(Arc::new(TestTool { name: "echo" })).unwrap_err();
    assert!(matches!(err, ToolError::ExecutionFailed { .. }));
}

#[test]
fn list_definitions_is_sorted_by_name() {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(TestTool { name: "zeta" })).unwrap();
    registry.register(Arc::new(TestTool { name: "alpha" })).unwrap();
    let defs = registry.list_definitions();
    assert_eq!(defs[0].name, "alpha");
    assert_eq!(defs[1].name, "zeta");
}
