//! Edit tool: replace an exact, unique occurrence of a string in a file.

use crate::context::ToolContext;
use crate::error::Result;
use crate::error::ToolError;
use crate::tool::Tool;
use crate::tool::ToolOutputExt;
use async_trait::async_trait;
use ivo_protocol::ConcurrencySafety;
use ivo_protocol::ToolOutput;
use serde_json::Value;

pub struct EditTool;

#[async_trait]
impl Tool for EditTool {
    fn name(&self) -> &str {
        "Edit"
    }

    fn description(&self) -> &str {
        "Replace an exact, unique occurrence of a string in a file."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {"type": "string"},
                "old_string": {"type": "string"},
                "new_string": {"type": "string"},
                "replace_all": {"type": "boolean"},
            },
            "required": ["file_path", "old_string", "new_string"],
        })
    }

    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Unsafe
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext) -> Result<ToolOutput> {
        let file_path = input["file_path"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("file_path must be a string"))?;
        let old_string = input["old_string"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("old_string must be a string"))?;
        let new_string = input["new_string"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("new_string must be a string"))?;
        let replace_all = input.get("replace_all").and_then(Value::as_bool).unwrap_or(false);

        if old_string == new_string {
            return Err(ToolError::invalid_input("old_string and new_string must differ"));
        }

        let path = ctx.resolve(file_path);
        let content = tokio::fs::read_to_string(&path).await?;
        let occurrences = content.matches(old_string).count();

        if occurrences == 0 {
            return Ok(ToolOutput::error(format!("Error: string not found in {file_path}")));
        }
        if occurrences > 1 && !replace_all {
            return Ok(ToolOutput::error(format!(
                "Error: string is not unique in {file_path} ({occurrences} matches); pass replace_all or provide more context"
            )));
        }

        let updated = content.replacen(old_string, new_string, if replace_all { occurrences } else { 1 });
        tokio::fs::write(&path, &updated).await?;
        Ok(ToolOutput::text(format!("Replaced {occurrences} occurrence(s) in {file_path}")))
    }
}

#[cfg(test)]
#[path = "edit.test.rs"]
mod tests;
