//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod agent_progress;
pub mod capability_tool;
pub mod conversation_logger;
pub mod llm_gateway;
pub mod price_stream;
pub mod tool_executor;
