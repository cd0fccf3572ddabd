//! Tool Executor port
//!
//! Defines the interface for dispatching the tool invocations a model issues.

use async_trait::async_trait;
use scout_domain::tool::{
    entities::{ToolDefinition, ToolInvocation},
    value_objects::ToolResult,
};
use tokio_util::sync::CancellationToken;

/// Port for tool execution
///
/// Dispatch never fails at the Rust level: unknown tools and tool failures
/// come back as a failed [`ToolResult`] for the model to react to.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Definitions advertised to the model
    fn definitions(&self) -> Vec<ToolDefinition>;

    /// Check if a tool is available
    fn has_tool(&self, name: &str) -> bool {
        self.definitions().iter().any(|d| d.name == name)
    }

    /// Execute one invocation under the run's cancellation scope
    async fn execute(&self, invocation: &ToolInvocation, cancel: &CancellationToken)
    -> ToolResult;
}
