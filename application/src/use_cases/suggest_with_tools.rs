//! Suggest With Tools use case.
//!
//! Drives a bounded tool-calling conversation with the model and extracts
//! the final structured answer from its last text turn. Price and
//! availability fields survive only for domains a tool actually checked.
//!
//! ```text
//! Composing -> AwaitingModel -> ToolCallPending -> AwaitingModel ...
//!                            -> Terminated (text, no tool calls)
//!                            -> IterationExceeded
//! ```

use crate::ports::agent_progress::AgentProgressNotifier;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::tool_executor::ToolExecutorPort;
use scout_domain::{
    AgentResponse, ChatMessage, ExtractionError, MessageHistory, ModelReply, SuggestionPrompt,
    SuggestionRequest, ToolEvidence, ToolInvocation, extract_agent_response,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Model round-trips allowed per run
pub const MAX_AGENT_ITERATIONS: usize = 10;

/// Run-fatal errors. Tool failures never surface here.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("model returned no choices")]
    NoModelChoices,

    #[error("agent exceeded maximum iterations ({0})")]
    AgentExceededIterations(usize),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl SuggestError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SuggestError::Cancelled)
    }
}

/// Use case for the agentic suggestion flow.
pub struct SuggestWithToolsUseCase<G: LlmGateway, T: ToolExecutorPort> {
    gateway: Arc<G>,
    tool_executor: Arc<T>,
    cancellation_token: CancellationToken,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway, T: ToolExecutorPort> SuggestWithToolsUseCase<G, T> {
    pub fn new(gateway: Arc<G>, tool_executor: Arc<T>) -> Self {
        Self {
            gateway,
            tool_executor,
            cancellation_token: CancellationToken::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Scope whose cancellation aborts the run, including in-flight tools
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        request: &SuggestionRequest,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<AgentResponse, SuggestError> {
        match self.run(request, progress).await {
            Ok(response) => {
                info!("Agent finished with {} suggestions", response.domains.len());
                self.conversation_logger.log(ConversationEvent::new(
                    "run_finished",
                    serde_json::json!({
                        "domains": response.domains.len(),
                        "final_message": response.final_message,
                    }),
                ));
                progress.on_complete(&response);
                Ok(response)
            }
            Err(e) => {
                warn!("Agent run failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "run_failed",
                    serde_json::json!({ "error": e.to_string() }),
                ));
                progress.on_failed(&e.to_string());
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        request: &SuggestionRequest,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<AgentResponse, SuggestError> {
        let tools = self.tool_executor.definitions();
        let mut history = MessageHistory::seeded(SuggestionPrompt::agent(request));
        let mut evidence = ToolEvidence::new();

        self.conversation_logger.log(ConversationEvent::new(
            "run_started",
            serde_json::json!({
                "query": request.query(),
                "max_results": request.effective_max_results(),
                "tools": tools.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            }),
        ));

        for iteration in 1..=MAX_AGENT_ITERATIONS {
            self.check_cancelled()?;
            progress.on_iteration(iteration, MAX_AGENT_ITERATIONS);
            debug!("Agent iteration {}/{}", iteration, MAX_AGENT_ITERATIONS);

            let reply = tokio::select! {
                biased;
                _ = self.cancellation_token.cancelled() => return Err(SuggestError::Cancelled),
                reply = self.gateway.generate(&history, &tools) => reply?,
            };
            self.log_reply(iteration, &reply);

            let top = reply.top_choice().ok_or(SuggestError::NoModelChoices)?;

            if top.is_final() {
                let mut response = extract_agent_response(&top.content)?;
                let scrubbed = evidence.scrub(&mut response);
                if scrubbed > 0 {
                    warn!(
                        "Dropped price or availability fields no tool call backs on {} suggestion(s)",
                        scrubbed
                    );
                }
                return Ok(response);
            }

            if !top.has_tool_calls() {
                debug!("Model returned neither text nor tool calls, continuing");
                continue;
            }

            for choice in reply.choices.iter().filter(|c| c.has_tool_calls()) {
                history.push(ChatMessage::tool_calls(&choice.tool_calls));
                for invocation in &choice.tool_calls {
                    let content = self.dispatch(invocation, &mut evidence, progress).await?;
                    history.push(ChatMessage::tool_result(
                        &invocation.id,
                        &invocation.name,
                        content,
                    ));
                }
            }
        }

        Err(SuggestError::AgentExceededIterations(MAX_AGENT_ITERATIONS))
    }

    /// Execute one invocation and return the text fed back to the model.
    async fn dispatch(
        &self,
        invocation: &ToolInvocation,
        evidence: &mut ToolEvidence,
        progress: &dyn AgentProgressNotifier,
    ) -> Result<String, SuggestError> {
        self.check_cancelled()?;

        let argument = invocation.domain_argument();
        progress.on_tool_call(&invocation.name, &argument);
        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "id": invocation.id,
                "tool": invocation.name,
                "arguments": invocation.arguments,
            }),
        ));

        // Tools honor the token themselves so their workers are joined before returning.
        let result = self
            .tool_executor
            .execute(invocation, &self.cancellation_token)
            .await;
        self.check_cancelled()?;

        match result.error() {
            Some(err) => warn!("Tool {} failed: {}", invocation.name, err),
            None => evidence.record_success(&invocation.name, &argument),
        }
        progress.on_tool_result(&invocation.name, result.is_success());

        let content = result.to_model_text();
        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            serde_json::json!({
                "id": invocation.id,
                "tool": invocation.name,
                "success": result.is_success(),
                "content": content,
                "duration_ms": result.duration_ms,
            }),
        ));
        Ok(content)
    }

    fn log_reply(&self, iteration: usize, reply: &ModelReply) {
        self.conversation_logger.log(ConversationEvent::new(
            "model_reply",
            serde_json::json!({
                "iteration": iteration,
                "model": reply.model,
                "choices": reply.choices.iter().map(|c| serde_json::json!({
                    "content": c.content,
                    "tool_calls": c.tool_calls.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
                })).collect::<Vec<_>>(),
            }),
        ));
    }

    fn check_cancelled(&self) -> Result<(), SuggestError> {
        if self.cancellation_token.is_cancelled() {
            return Err(SuggestError::Cancelled);
        }
        Ok(())
    }
}
