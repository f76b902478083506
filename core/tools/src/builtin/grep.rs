//! Grep tool: regex search over a file or directory tree.

use crate::context::ToolContext;
use crate::error::Result;
use crate::error::ToolError;
use crate::tool::Tool;
use crate::tool::ToolOutputExt;
use async_trait::async_trait;
use ivo_protocol::ToolOutput;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

const MAX_MATCHES: usize = 200;

pub struct GrepTool;

#[async_trait]
impl Tool for GrepTool {
    fn name(&self) -> &str {
        "Grep"
    }

    fn description(&self) -> &str {
        "Search file contents for a regular expression."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "pattern": {"type": "string"},
                "path": {"type": "string"},
            },
            "required": ["pattern"],
        })
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext) -> Result<ToolOutput> {
        let pattern = input["pattern"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("pattern must be a string"))?;
        let regex = Regex::new(pattern).map_err(|e| ToolError::invalid_input(format!("invalid pattern: {e}")))?;
        let search_path = input.get("path").and_then(Value::as_str).unwrap_or(".");
        let root = ctx.resolve(search_path);

        let mut matches = Vec::new();
        walk(&root, &mut |path, contents| {
            for (line_no, line) in contents.lines().enumerate() {
                if matches.len() >= MAX_MATCHES {
                    return;
                }
                if regex.is_match(line) {
                    matches.push(format!("{}:{}:{}", path.display(), line_no + 1, line));
                }
            }
        });

        Ok(ToolOutput::text(matches.join("\n")))
    }
}

fn walk(path: &Path, on_file: &mut impl FnMut(&Path, &str)) {
    if path.is_file() {
        if let Ok(contents) = std::fs::read_to_string(path) {
            on_file(path, &contents);
        }
        return;
    }
    let Ok(entries) = std::fs::read_dir(path) else {
        return;
    };
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.file_name().and_then(|n| n.to_str()) == Some(".git") {
            continue;
        }
        walk(&entry_path, on_file);
    }
}

#[cfg(test)]
#[path = "grep.test.rs"]
mod tests;
