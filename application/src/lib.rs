//! Application layer for domain-scout
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_progress::{AgentProgressNotifier, NoAgentProgress},
    capability_tool::CapabilityTool,
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    price_stream::{PriceStream, PriceStreamError, PriceStreamPort},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::suggest_domains::SuggestDomainsUseCase;
pub use use_cases::suggest_with_tools::{MAX_AGENT_ITERATIONS, SuggestError, SuggestWithToolsUseCase};
