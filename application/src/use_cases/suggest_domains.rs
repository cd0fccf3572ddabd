//! Suggest Domains use case.
//!
//! Single-shot generator: one schema-constrained model call, no tools.
//! Results carry positional scores and never any price or availability data.

use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::suggest_with_tools::SuggestError;
use scout_domain::{
    AgentResponse, ChatMessage, DomainSuggestion, MessageHistory, SuggestionPrompt,
    SuggestionRequest, parse_structured_domains,
};
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const SCHEMA_NAME: &str = "domain_suggestions";

pub struct SuggestDomainsUseCase<G: LlmGateway> {
    gateway: Arc<G>,
    cancellation_token: CancellationToken,
}

impl<G: LlmGateway> SuggestDomainsUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    pub async fn execute(&self, request: &SuggestionRequest) -> Result<AgentResponse, SuggestError> {
        let mut history = MessageHistory::new();
        history.push(ChatMessage::system(SuggestionPrompt::plain_system()));
        history.push(ChatMessage::human(SuggestionPrompt::plain(request)));

        let schema = response_schema(request);
        debug!("Requesting structured suggestions for '{}'", request.query());

        let reply = tokio::select! {
            biased;
            _ = self.cancellation_token.cancelled() => return Err(SuggestError::Cancelled),
            reply = self.gateway.generate_structured(&history, SCHEMA_NAME, &schema) => reply?,
        };

        let top = reply.top_choice().ok_or(SuggestError::NoModelChoices)?;
        let names = parse_structured_domains(&top.content)?;

        info!("Generated {} suggestions", names.len());
        Ok(AgentResponse {
            domains: positional_scores(names),
            final_message: None,
        })
    }
}

/// JSON schema for `{"domains": [string, ...]}`
pub fn response_schema(request: &SuggestionRequest) -> serde_json::Value {
    let mut domains = json!({
        "type": "array",
        "minItems": 1,
        "items": { "type": "string" },
    });
    if request.max_results() > 0 {
        domains["maxItems"] = json!(request.max_results());
    }

    json!({
        "type": "object",
        "required": ["domains"],
        "additionalProperties": false,
        "properties": { "domains": domains },
    })
}

fn positional_scores(names: Vec<String>) -> Vec<DomainSuggestion> {
    let total = names.len() as f64;
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| DomainSuggestion::new(name, 0.85 + i as f64 / total * 0.1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use scout_domain::{ExtractionError, ModelReply, Role, ToolDefinition};
    use std::sync::Mutex;

    struct StructuredGateway {
        reply: Mutex<Option<ModelReply>>,
        seen: Mutex<Vec<(MessageHistory, serde_json::Value)>>,
    }

    impl StructuredGateway {
        fn new(reply: ModelReply) -> Self {
            Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmGateway for StructuredGateway {
        async fn generate(
            &self,
            _history: &MessageHistory,
            _tools: &[ToolDefinition],
        ) -> Result<ModelReply, GatewayError> {
            Err(GatewayError::Other("tools not expected".to_string()))
        }

        async fn generate_structured(
            &self,
            history: &MessageHistory,
            schema_name: &str,
            schema: &serde_json::Value,
        ) -> Result<ModelReply, GatewayError> {
            assert_eq!(schema_name, SCHEMA_NAME);
            self.seen
                .lock()
                .unwrap()
                .push((history.clone(), schema.clone()));
            self.reply
                .lock()
                .unwrap()
                .take()
                .ok_or_else(|| GatewayError::Other("called twice".to_string()))
        }
    }

    #[tokio::test]
    async fn test_positional_scores_and_no_tool_fields() {
        let gateway = Arc::new(StructuredGateway::new(ModelReply::from_text(
            r#"{"domains": ["brewly.com", "roastr.io"]}"#,
        )));
        let uc = SuggestDomainsUseCase::new(gateway.clone());

        let response = uc
            .execute(&SuggestionRequest::new("coffee", 0))
            .await
            .unwrap();

        assert_eq!(response.domains.len(), 2);
        assert_eq!(response.domains[0].domain, "brewly.com");
        assert!((response.domains[0].score - 0.85).abs() < 1e-9);
        assert!((response.domains[1].score - 0.90).abs() < 1e-9);
        assert!(response.domains.iter().all(|d| !d.is_priced() && d.available.is_none()));

        let seen = gateway.seen.lock().unwrap();
        let (history, schema) = &seen[0];
        let roles: Vec<Role> = history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::Human]);
        assert!(history.messages()[1].text().contains("Generate 12 excellent"));
        assert!(schema["properties"]["domains"].get("maxItems").is_none());
    }

    #[test]
    fn test_schema_caps_items_when_requested() {
        let schema = response_schema(&SuggestionRequest::new("coffee", 5));
        assert_eq!(schema["properties"]["domains"]["maxItems"], 5);
        assert_eq!(schema["required"][0], "domains");
    }

    #[tokio::test]
    async fn test_empty_list_is_error() {
        let gateway = Arc::new(StructuredGateway::new(ModelReply::from_text(
            r#"{"domains": []}"#,
        )));
        let err = SuggestDomainsUseCase::new(gateway)
            .execute(&SuggestionRequest::new("coffee", 3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SuggestError::Extraction(ExtractionError::EmptyResult)
        ));
    }

    #[tokio::test]
    async fn test_no_choices() {
        let gateway = Arc::new(StructuredGateway::new(ModelReply::new(vec![])));
        let err = SuggestDomainsUseCase::new(gateway)
            .execute(&SuggestionRequest::new("coffee", 3))
            .await
            .unwrap_err();
        assert!(matches!(err, SuggestError::NoModelChoices));
    }
}
