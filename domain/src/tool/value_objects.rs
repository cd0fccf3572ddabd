//! Tool outcomes
//!
//! Every dispatch through the tool registry produces a [`ToolResult`]. Failed
//! results are not run-fatal: the orchestrator renders them with
//! [`ToolResult::to_model_text`] and hands them back to the model.

use thiserror::Error;

/// Why a tool call produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    /// The model asked for a tool that is not registered
    NotFound,
    /// The argument string could not be used
    InvalidArgument,
    /// The tool ran and failed (upstream error, no price, ...)
    ExecutionFailed,
    /// The execution scope was cancelled mid-call
    Cancelled,
}

impl ToolErrorKind {
    /// Stable code used in logs and transcripts
    pub fn code(self) -> &'static str {
        match self {
            ToolErrorKind::NotFound => "NOT_FOUND",
            ToolErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ToolErrorKind::ExecutionFailed => "EXECUTION_FAILED",
            ToolErrorKind::Cancelled => "CANCELLED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {message}", .kind.code())]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl ToolError {
    fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(tool_name: impl AsRef<str>) -> Self {
        Self::new(
            ToolErrorKind::NotFound,
            format!("Tool not found: {}", tool_name.as_ref()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidArgument, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::ExecutionFailed, message)
    }

    pub fn cancelled() -> Self {
        Self::new(ToolErrorKind::Cancelled, "Operation cancelled")
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ToolErrorKind::Cancelled
    }
}

/// Outcome of one tool invocation, named after the tool that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    pub tool_name: String,
    pub outcome: Result<String, ToolError>,
    /// Wall-clock time spent in the tool, when measured
    pub duration_ms: Option<u64>,
}

impl ToolResult {
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self::from_outcome(tool_name, Ok(output.into()))
    }

    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self::from_outcome(tool_name, Err(error))
    }

    pub fn from_outcome(tool_name: impl Into<String>, outcome: Result<String, ToolError>) -> Self {
        Self {
            tool_name: tool_name.into(),
            outcome,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn output(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.outcome.as_ref().err()
    }

    /// Text handed back to the model as the tool-result turn.
    pub fn to_model_text(&self) -> String {
        match &self.outcome {
            Ok(output) => output.clone(),
            Err(err) => format!("Error executing tool: {}", err.message),
        }
    }
}
