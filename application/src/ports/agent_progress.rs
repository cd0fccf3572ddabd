//! Agent run progress port.
//!
//! [`AgentProgressNotifier`] is an **output port** that the presentation layer
//! implements to show a run's progress to the user.
//!
//! All methods have default no-op implementations, so implementers only
//! need to override the callbacks they care about.

use scout_domain::AgentResponse;

pub trait AgentProgressNotifier: Send + Sync {
    /// Called before each model round-trip (1-based)
    fn on_iteration(&self, _iteration: usize, _max_iterations: usize) {}

    /// Called when a tool is invoked
    fn on_tool_call(&self, _tool_name: &str, _argument: &str) {}

    /// Called when a tool returns a result
    fn on_tool_result(&self, _tool_name: &str, _success: bool) {}

    /// Called once a final answer has been extracted
    fn on_complete(&self, _response: &AgentResponse) {}

    /// Called when the run aborts
    fn on_failed(&self, _reason: &str) {}
}

/// No-op implementation for tests and quiet mode
pub struct NoAgentProgress;

impl AgentProgressNotifier for NoAgentProgress {}
