//! Tool Registry
//!
//! The [`ToolRegistry`] maps tool names to [`CapabilityTool`]s and implements
//! [`ToolExecutorPort`]. It is built once at startup and not modified after.
//!
//! # Usage
//!
//! ```ignore
//! use scout_infrastructure::tools::{AvailabilityCheckerTool, PriceCheckerTool, ToolRegistry};
//!
//! let registry = ToolRegistry::new()
//!     .register(PriceCheckerTool::new(provider))
//!     .register(AvailabilityCheckerTool::new(client, lookup_base));
//!
//! assert!(registry.has_tool("price_checker_tool"));
//! let result = registry.execute(&invocation, &cancel).await;
//! ```
//!
//! Unknown names and tool failures produce a failed [`ToolResult`], never a
//! panic or an `Err`, so the model can react to them.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use scout_application::ports::{capability_tool::CapabilityTool, tool_executor::ToolExecutorPort};
use scout_domain::tool::{
    entities::{ToolDefinition, ToolInvocation},
    value_objects::{ToolError, ToolResult},
};
use tokio_util::sync::CancellationToken;

/// Immutable name to tool mapping
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn CapabilityTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A later registration under the same name replaces the earlier one.
    pub fn register<T: CapabilityTool + 'static>(self, tool: T) -> Self {
        self.register_arc(Arc::new(tool))
    }

    /// Register a tool (Arc version)
    pub fn register_arc(mut self, tool: Arc<dyn CapabilityTool>) -> Self {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::warn!(tool = %name, "Tool registered twice, keeping the latest");
        } else {
            tracing::debug!(tool = %name, "Registered tool");
        }
        self
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn definitions(&self) -> Vec<ToolDefinition> {
        let mut definitions: Vec<ToolDefinition> =
            self.tools.values().map(|t| t.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    async fn execute(&self, invocation: &ToolInvocation, cancel: &CancellationToken) -> ToolResult {
        let Some(tool) = self.tools.get(&invocation.name) else {
            tracing::warn!(tool = %invocation.name, "Tool not found");
            return ToolResult::failure(&invocation.name, ToolError::not_found(&invocation.name));
        };

        let domain = invocation.domain_argument();
        let start = Instant::now();
        let outcome = tool.invoke(&domain, cancel).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            Ok(output) => {
                tracing::debug!(tool = %invocation.name, %domain, %output, duration_ms, "Tool succeeded")
            }
            Err(error) => {
                tracing::debug!(tool = %invocation.name, %domain, %error, duration_ms, "Tool failed")
            }
        }
        ToolResult::from_outcome(&invocation.name, outcome).with_duration(duration_ms)
    }
}
