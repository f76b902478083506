//! Bash tool: run a shell command and capture its output.
//!
//! Process sandboxing policy is an out-of-scope collaborator (§1); this
//! tool only runs the command, enforces a timeout, and reports the
//! read-only classification used elsewhere to size concurrency.

use crate::context::ToolContext;
use crate::error::Result;
use crate::error::ToolError;
use crate::tool::Tool;
use crate::tool::ToolOutputExt;
use async_trait::async_trait;
use ivo_protocol::ConcurrencySafety;
use ivo_protocol::ToolOutput;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 120;
const MAX_TIMEOUT_SECS: u64 = 600;

pub struct BashTool;

/// Whether `command` is read-only and safe to run concurrently with other
/// bash invocations.
pub fn is_read_only_command(command: &str) -> bool {
    let trimmed = command.trim();
    let is_simple = !trimmed.contains("&&")
        && !trimmed.contains("||")
        && !trimmed.contains(';')
        && !trimmed.contains('|')
        && !trimmed.contains('>')
        && !trimmed.contains('<');
    if !is_simple {
        return false;
    }
    let first_word = trimmed.split_whitespace().next().unwrap_or("");
    match first_word {
        "git" => {
            let subcommand = trimmed.split_whitespace().nth(1).unwrap_or("");
            matches!(
                subcommand,
                "status" | "log" | "diff" | "show" | "branch" | "remote" | "rev-parse"
            )
        }
        _ => matches!(first_word, "ls" | "cat" | "head" | "tail" | "wc" | "grep" | "rg" | "find" | "pwd"),
    }
}

#[async_trait]
impl Tool for BashTool {
    fn name(&self) -> &str {
        "Bash"
    }

    fn description(&self) -> &str {
        "Execute a shell command in the working directory."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "command": {"type": "string"},
                "timeout_secs": {"type": "integer"},
            },
            "required": ["command"],
        })
    }

    fn concurrency_safety(&self) -> ConcurrencySafety {
        ConcurrencySafety::Unsafe
    }

    async fn execute(&self, input: Value, ctx: &mut ToolContext) -> Result<ToolOutput> {
        let command = input["command"]
            .as_str()
            .ok_or_else(|| ToolError::invalid_input("command must be a string"))?;
        let timeout_secs = input
            .get("timeout_secs")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .min(MAX_TIMEOUT_SECS);

        let child = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(ctx.working_dir())
            .kill_on_drop(true)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()?;

        let output = tokio::select! {
            result = child.wait_with_output() => result?,
            _ = tokio::time::sleep(Duration::from_secs(timeout_secs)) => {
                return Err(ToolError::timeout(timeout_secs as i64));
            }
            _ = ctx.cancel_token().cancelled() => {
                return Err(ToolError::aborted("cancelled"));
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&stderr);
        }

        Ok(ToolOutput {
            content: ivo_protocol::ToolResultContent::Text(text),
            is_error: !output.status.success(),
            modifiers: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "bash.test.rs"]
mod tests;
