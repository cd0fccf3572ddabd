//! Suggestion request and result entities

use super::context::SuggestionContext;
use serde::{Deserialize, Serialize};

/// Count used in the agent prompt when the caller asks for `<= 0` results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// A caller's request for domain suggestions. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    query: String,
    max_results: i64,
    #[serde(default)]
    context: SuggestionContext,
}

impl SuggestionRequest {
    pub fn new(query: impl Into<String>, max_results: i64) -> Self {
        Self {
            query: query.into(),
            max_results,
            context: SuggestionContext::default(),
        }
    }

    pub fn with_context(mut self, context: SuggestionContext) -> Self {
        self.context = context;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw requested count, as supplied by the caller
    pub fn max_results(&self) -> i64 {
        self.max_results
    }

    pub fn context(&self) -> &SuggestionContext {
        &self.context
    }

    /// Requested count, or `default` when the caller asked for `<= 0`.
    pub fn max_results_or(&self, default: usize) -> usize {
        if self.max_results > 0 {
            self.max_results as usize
        } else {
            default
        }
    }

    pub fn effective_max_results(&self) -> usize {
        self.max_results_or(DEFAULT_MAX_RESULTS)
    }
}

/// A single suggested domain.
///
/// Optional fields are only present when a tool supplied them; an absent
/// `available` is not the same as `Some(false)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainSuggestion {
    pub domain: String,
    #[serde(rename = "relevance_score", default)]
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewal_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

impl DomainSuggestion {
    pub fn new(domain: impl Into<String>, score: f64) -> Self {
        Self {
            domain: domain.into(),
            score,
            available: None,
            price: None,
            currency: None,
            renewal_price: None,
            promotion: None,
            reasoning: None,
        }
    }

    /// Whether any tool-sourced pricing field is present
    pub fn is_priced(&self) -> bool {
        self.price.is_some() || self.renewal_price.is_some() || self.currency.is_some()
    }
}

/// Final answer of a run: a non-empty ordered list plus an optional message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub domains: Vec<DomainSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_message: Option<String>,
}
