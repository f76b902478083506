//! A uniform registry of tools, keyed by name.

use crate::error::tool_error;
use crate::error::Result;
use crate::tool::Tool;
use ivo_protocol::ToolDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// Holds every tool available to an agent loop. Registration rejects
/// duplicate names.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return tool_error::ExecutionFailedSnafu {
                message: format!("duplicate tool registration: {name}"),
            }
            .fail();
        }
        self.tools.insert(name, tool);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn list_definitions(&self) -> Vec<ToolDefinition> {
        let mut names: Vec<&String> = self.tools.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| self.tools[name].to_definition())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
#[path = "registry.test.rs"]
mod tests;
