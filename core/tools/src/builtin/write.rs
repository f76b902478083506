//! Write tool: create or overwrite a file with the given contents.

use crate::context::ToolContext;
use crate::error::Result;
use crate::error::ToolError;
use crate::tool::Tool;
use crate::tool::ToolOutputExt;
use async_trait::async_trait;
use ivo_protocol::ConcurrencySafety;
use ivo_protocol::ToolOutput;
use serde_json::Value;

pub struct WriteTool;

#[async_trait]
impl Tool for WriteTool {
    fn name(&self) -> &str {
        "Write"
    }

    fn description(&self) -> &str {
        "Create or overwrite a file with the given contents."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {"type": "string"},
                "content": {"type": "string"},
            },
            "required": ["file_path", "content"],
        })
    }

    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Unsafe
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext) -> Result<ToolOutput> {
        let file_path = input["file_path"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("file_path must be a string"))?;
        let content = input["content"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("content must be a string"))?;
        let path = ctx.resolve(file_path);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content).await?;
        Ok(ToolOutput::text(format!("Wrote {} bytes to {file_path}", content.len())))
    }
}

#[cfg(test)]
#[path = "write.test.rs"]
mod tests;
