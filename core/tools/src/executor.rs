//! Runs a single tool call end to end: resolve from the registry, parse
//! arguments, validate, check permission, execute, and translate any
//! error into a structured `{is_error: true}` result instead of letting
//! it propagate.

use crate::context::ToolContext;
use crate::error::tool_error;
use crate::error::Result;
use crate::registry::ToolRegistry;
use crate::tool::ToolOutputExt;
use ivo_protocol::PermissionResult;
use ivo_protocol::ToolOutput;
use ivo_protocol::ValidationResult;
use serde_json::Value;
use tracing::debug;
use tracing::warn;

/// Execute `name` with `args_json` against `registry`. Unknown tools
/// return a `NotFound` error to the caller (the agent loop, §4.3, turns
/// this into an inline tool-message rather than failing the turn);
/// malformed `args_json` dispatches as an empty object.
pub async fn execute(
    registry: &ToolRegistry,
    call_id: &str,
    name: &str,
    args_json: &str,
    ctx: &mut ToolContext,
) -> Result<ToolOutput> {
    let tool = registry.lookup(name).ok_or_else(|| {
        tool_error::NotFoundSnafu { name: name.to_string() }.build()
    })?;

    let input: Value = serde_json::from_str(args_json).unwrap_or_else(|_| serde_json::json!({}));

    debug!(call_id, tool = name, "dispatching tool call");

    if let ValidationResult::Invalid { errors } = tool.validate(&input).await {
        let message = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Ok(ToolOutput::error(format!("Error: {message}")));
    }

    if let PermissionResult::Denied { reason } = tool.check_permission(&input, ctx).await {
        return Ok(ToolOutput::error(format!("Error: {reason}")));
    }

    let output = match tool.execute(input, ctx).await {
        Ok(output) => tool.post_process(output, ctx).await,
        Err(err) => {
            warn!(call_id, tool = name, error = %err, "tool execution failed");
            ToolOutput::error(format!("Error: {}", err.to_output_message()))
        }
    };

    tool.cleanup(ctx).await;
    Ok(output)
}

#[cfg(test)]
#[path = "executor.test.rs"]
mod tests;
