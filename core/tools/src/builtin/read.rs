//! Read tool: return a file's contents, optionally a line range.

use crate::context::ToolContext;
use crate::error::Result;
use crate::error::ToolError;
use crate::tool::Tool;
use crate::tool::ToolOutputExt;
use async_trait::async_trait;
use ivo_protocol::ToolOutput;
use serde_json::Value;

pub struct ReadTool;

#[async_trait]
impl Tool for ReadTool {
    fn name(&self) -> &str {
        "Read"
    }

    fn description(&self) -> &str {
        "Read a file's contents, optionally restricted to a line range."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {"type": "string"},
                "offset": {"type": "integer"},
                "limit": {"type": "integer"},
            },
            "required": ["file_path"],
        })
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext) -> Result<ToolOutput> {
        let file_path = input["file_path"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("file_path must be a string"))?;
        let path = ctx.resolve(file_path);
        let content = tokio::fs::read_to_string(&path).await?;

        let offset = input.get("offset").and_then(Value::as_u64).unwrap_or(0) as usize;
        let limit = input.get("limit").and_then(Value::as_u64).map(|n| n as usize);

        let lines: Vec<&str> = content.lines().collect();
        let selected = match limit {
            Some(limit) => lines.into_iter().skip(offset).take(limit).collect::<Vec<_>>(),
            None => lines.into_iter().skip(offset).collect(),
        };
        Ok(ToolOutput::text(selected.join("\n")))
    }
}

#[cfg(test)]
#[path = "read.test.rs"]
mod tests;
