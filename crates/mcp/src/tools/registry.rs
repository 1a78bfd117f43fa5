// Tool trait and registry

use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use crate::tools::ToolResult;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: Value) -> ToolResult<Value>;

    /// Whether the tool changes state on the remote side
    fn tier(&self) -> ToolTier {
        ToolTier::ReadOnly
    }
}

/// Effect a tool has on the Feedbin account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolTier {
    /// Plain reads
    ReadOnly,
    /// Unread/starred state changes; repeating one has no further effect
    IdempotentWrite,
}

impl ToolTier {
    fn annotations(self) -> ToolAnnotations {
        ToolAnnotations {
            read_only_hint: self == ToolTier::ReadOnly,
            idempotent_hint: true,
        }
    }
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.clone(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, ordered by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .values()
            .map(|t| {
                let mut schema = t.schema();
                schema.annotations = Some(t.tier().annotations());
                schema
            })
            .collect()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Run a tool and fold its outcome into a `CallToolResult`.
    ///
    /// Returns `None` for an unknown tool. Tool failures become error results.
    pub async fn call(&self, name: &str, arguments: Value) -> Option<CallToolResult> {
        let tool = self.get(name)?;
        let started = Instant::now();

        let result = match tool.execute(arguments).await {
            Ok(output) => {
                debug!(tool = name, elapsed_ms = started.elapsed().as_millis() as u64, "Tool succeeded");
                CallToolResult::text(to_pretty_json(&output))
            }
            Err(err) => {
                warn!(tool = name, kind = err.kind(), error = %err, "Tool failed");
                CallToolResult::error(to_pretty_json(&err.to_payload()))
            }
        };
        Some(result)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn to_pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str) -> Value {
    serde_json::json!({
        "type": "integer",
        "description": description
    })
}

pub fn json_schema_array(items: Value, description: &str) -> Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "description": description
    })
}
