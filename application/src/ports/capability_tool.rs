//! Capability tool port
//!
//! A capability tool is one named unit of work the model may invoke with a
//! single domain string.

use async_trait::async_trait;
use scout_domain::tool::{entities::ToolDefinition, value_objects::ToolError};
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait CapabilityTool: Send + Sync {
    /// Dispatch key; must match `definition().name`
    fn name(&self) -> &str;

    /// Description and parameter schema advertised to the model
    fn definition(&self) -> ToolDefinition;

    /// Run the tool for `domain`, returning a short textual result.
    async fn invoke(&self, domain: &str, cancel: &CancellationToken) -> Result<String, ToolError>;
}
