// Tool trait and registry

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use meraki_mcp_core::SdkCategory;
use serde_json::{json, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments
    async fn execute(&self, arguments: Value) -> Result<CallToolResult>;

    /// Get the tool's tier
    fn tier(&self) -> ToolTier {
        ToolTier::Tier0
    }

    /// The Dashboard operation this tool wraps, if any
    fn operation(&self) -> Option<(SdkCategory, &'static str)> {
        None
    }
}

/// Tool safety tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolTier {
    /// Read-only operations
    Tier0,
    /// Configuration writes
    Tier1,
    /// Destructive operations (require `confirmed=true`)
    Tier2,
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

    /// Register a tool, replacing any earlier tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::warn!(tool = %name, "Tool registered twice, keeping the later one");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
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

    /// Operation ids implemented by registered tools, per category
    pub fn operations(&self) -> BTreeMap<SdkCategory, BTreeSet<String>> {
        let mut ops: BTreeMap<SdkCategory, BTreeSet<String>> = BTreeMap::new();
        for (category, operation) in self.tools.values().filter_map(|t| t.operation()) {
            ops.entry(category)
                .or_default()
                .insert(operation.to_string());
        }
        ops
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_integer(description: &str, min: Option<i64>, max: Option<i64>) -> Value {
    let mut schema = json!({
        "type": "integer",
        "description": description
    });
    if let Some(min) = min {
        schema["minimum"] = json!(min);
    }
    if let Some(max) = max {
        schema["maximum"] = json!(max);
    }
    schema
}

pub fn json_schema_number(description: &str) -> Value {
    json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_array(items: Value, description: &str) -> Value {
    json!({
        "type": "array",
        "items": items,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str, Option<(SdkCategory, &'static str)>);

    #[async_trait::async_trait]
    impl Tool for Named {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.0.to_string(),
                description: String::new(),
                input_schema: json_schema_object(json!({}), vec![]),
                annotations: None,
            }
        }

        async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
            Ok(CallToolResult::text(self.0))
        }

        fn operation(&self) -> Option<(SdkCategory, &'static str)> {
            self.1
        }
    }

    #[test]
    fn test_list_schemas_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Named("zeta", None)));
        registry.register(Arc::new(Named("alpha", None)));
        registry.register(Arc::new(Named("mid", None)));

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_later_registration_replaces() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Named("dup", None)));
        registry.register(Arc::new(Named(
            "dup",
            Some((SdkCategory::Networks, "getNetwork")),
        )));

        assert_eq!(registry.len(), 1);
        let tool = registry.get("dup").unwrap();
        assert_eq!(tool.operation(), Some((SdkCategory::Networks, "getNetwork")));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_operations_grouped_by_category() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Named(
            "a",
            Some((SdkCategory::Switch, "getDeviceSwitchPorts")),
        )));
        registry.register(Arc::new(Named(
            "b",
            Some((SdkCategory::Switch, "cycleDeviceSwitchPorts")),
        )));
        registry.register(Arc::new(Named("helper", None)));

        let ops = registry.operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[&SdkCategory::Switch].len(), 2);
    }

    #[test]
    fn test_integer_schema_bounds() {
        let schema = json_schema_integer("VLAN", Some(1), Some(4094));
        assert_eq!(schema["minimum"], 1);
        assert_eq!(schema["maximum"], 4094);
        assert!(json_schema_integer("n", None, None).get("minimum").is_none());
    }
}
