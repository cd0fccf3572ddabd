//! Port for structured conversation logging.
//!
//! Separate from `tracing`-based diagnostics: this port captures the run
//! transcript (prompt, model replies, tool calls and results) in a
//! machine-readable form such as JSONL.

use serde_json::Value;

/// A structured conversation event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "model_reply", "tool_call")
    pub event_type: &'static str,
    /// Event-specific fields
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Records conversation events.
///
/// `log` is synchronous and infallible; write failures are dropped so a
/// broken log never aborts a run.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
