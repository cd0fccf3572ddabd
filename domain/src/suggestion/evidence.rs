//! Tool-backed facts gathered during one agent run.
//!
//! The model may only report price or availability for a domain when the
//! matching tool actually succeeded for it in the same run.
//! [`ToolEvidence::scrub`] drops every optional field the run cannot back.

use super::entities::{AgentResponse, DomainSuggestion};
use std::collections::HashSet;

/// Name under which the price lookup is advertised
pub const PRICE_TOOL: &str = "price_checker_tool";
/// Name under which the availability lookup is advertised
pub const AVAILABILITY_TOOL: &str = "availability_checker_tool";

/// Domains with a successful price or availability lookup, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ToolEvidence {
    priced: HashSet<String>,
    availability_checked: HashSet<String>,
}

impl ToolEvidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful call of `tool_name` for `domain`. Other tools are ignored.
    pub fn record_success(&mut self, tool_name: &str, domain: &str) {
        match tool_name {
            PRICE_TOOL => {
                self.priced.insert(key(domain));
            }
            AVAILABILITY_TOOL => {
                self.availability_checked.insert(key(domain));
            }
            _ => {}
        }
    }

    pub fn is_priced(&self, domain: &str) -> bool {
        self.priced.contains(&key(domain))
    }

    pub fn is_availability_checked(&self, domain: &str) -> bool {
        self.availability_checked.contains(&key(domain))
    }

    /// Clear unbacked fields on every suggestion; returns how many suggestions changed.
    pub fn scrub(&self, response: &mut AgentResponse) -> usize {
        response
            .domains
            .iter_mut()
            .map(|suggestion| self.scrub_one(suggestion))
            .filter(|changed| *changed)
            .count()
    }

    fn scrub_one(&self, suggestion: &mut DomainSuggestion) -> bool {
        let mut changed = false;

        if !self.is_priced(&suggestion.domain) {
            changed |= suggestion.price.take().is_some();
            changed |= suggestion.currency.take().is_some();
            changed |= suggestion.renewal_price.take().is_some();
            changed |= suggestion.promotion.take().is_some();
        }
        if !self.is_availability_checked(&suggestion.domain) {
            changed |= suggestion.available.take().is_some();
        }

        changed
    }
}

fn key(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}
