//! Model reply types for the tool-calling conversation.
//!
//! A reply carries one or more ranked choices. Each choice may hold text,
//! tool invocations, or both. The orchestrator only ever decides on the top
//! choice but records invocations from every choice.

use crate::tool::entities::ToolInvocation;
use serde::{Deserialize, Serialize};

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response
    EndTurn,
    /// The model wants tools executed
    ToolUse,
    /// Hit the token limit, response may be truncated
    MaxTokens,
    /// Provider-specific stop reason
    Other(String),
}

impl StopReason {
    /// Map an OpenAI-style `finish_reason` string.
    pub fn from_finish_reason(reason: &str) -> Self {
        match reason {
            "stop" | "end_turn" => StopReason::EndTurn,
            "tool_calls" | "function_call" | "tool_use" => StopReason::ToolUse,
            "length" | "max_tokens" => StopReason::MaxTokens,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A single ranked choice within a model reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelChoice {
    /// Text content (empty when the model produced none)
    pub content: String,
    /// Tool invocations in model-determined order
    pub tool_calls: Vec<ToolInvocation>,
    pub stop_reason: Option<StopReason>,
}

impl ModelChoice {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
            stop_reason: Some(StopReason::EndTurn),
        }
    }

    pub fn with_tool_calls(tool_calls: Vec<ToolInvocation>) -> Self {
        Self {
            content: String::new(),
            tool_calls,
            stop_reason: Some(StopReason::ToolUse),
        }
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// Completion is inferred: no tool calls and non-empty text.
    pub fn is_final(&self) -> bool {
        self.tool_calls.is_empty() && !self.content.is_empty()
    }
}

/// A reply from the conversational model service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelReply {
    pub choices: Vec<ModelChoice>,
    /// Model identifier (if returned by the service)
    pub model: Option<String>,
}

impl ModelReply {
    pub fn new(choices: Vec<ModelChoice>) -> Self {
        Self {
            choices,
            model: None,
        }
    }

    /// Single text-only choice
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![ModelChoice::text(text)])
    }

    pub fn top_choice(&self) -> Option<&ModelChoice> {
        self.choices.first()
    }
}
