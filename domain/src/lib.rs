//! Domain layer for domain-scout
//!
//! Core types for suggesting domain names with a tool-calling model.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Suggestion**: a request, its context bag and the ranked answer
//! - **Session**: the append-only conversation history of one run
//! - **Tool**: definitions advertised to the model and invocations it issues
//! - **Pricing**: raw upstream price records normalized into quotes

pub mod config;
pub mod pricing;
pub mod prompt;
pub mod session;
pub mod suggestion;
pub mod tool;

// Re-export commonly used types
pub use config::OutputFormat;
pub use pricing::entities::{
    Money, PriceQuote, PriceSearchMessage, ProductPrice, RawPriceData, UpstreamError,
    format_amount,
};
pub use prompt::{PLAIN_DEFAULT_MAX_RESULTS, SuggestionPrompt};
pub use session::{
    entities::{ChatMessage, MessageHistory, MessagePart, Role},
    response::{ModelChoice, ModelReply, StopReason},
};
pub use suggestion::{
    context::{ContextFields, SuggestionContext},
    entities::{AgentResponse, DEFAULT_MAX_RESULTS, DomainSuggestion, SuggestionRequest},
    evidence::{AVAILABILITY_TOOL, PRICE_TOOL, ToolEvidence},
    parsing::{ExtractionError, extract_agent_response, parse_structured_domains},
};
pub use tool::{
    entities::{ToolDefinition, ToolInvocation, ToolParameter},
    value_objects::{ToolError, ToolErrorKind, ToolResult},
};
