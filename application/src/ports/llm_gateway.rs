//! LLM Gateway port
//!
//! Defines the interface for communicating with a tool-calling chat model.

use async_trait::async_trait;
use scout_domain::{MessageHistory, ModelReply, ToolDefinition};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed ({status}): {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// Failures are propagated to the caller; adapters do not retry.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send the full history with the advertised tools and return the ranked choices.
    async fn generate(
        &self,
        history: &MessageHistory,
        tools: &[ToolDefinition],
    ) -> Result<ModelReply, GatewayError>;

    /// Send the history asking for output constrained by a JSON schema.
    ///
    /// `schema_name` labels the schema for backends that require one.
    async fn generate_structured(
        &self,
        history: &MessageHistory,
        schema_name: &str,
        schema: &serde_json::Value,
    ) -> Result<ModelReply, GatewayError>;
}
