//! availability_checker_tool: registry lookup reduced to "true"/"false"
//!
//! | Lookup outcome | Result |
//! |----------------|--------|
//! | HTTP 200 (record exists) | `"false"` |
//! | Any other status | `"true"` |
//! | Network error | `"true"` (fail-open) |
//!
//! The fail-open row biases toward optimistic answers: an unreachable
//! registry never blocks the agent loop, so a `"true"` is only inconclusive.

use async_trait::async_trait;
use scout_application::ports::capability_tool::CapabilityTool;
use scout_domain::tool::{
    entities::{ToolDefinition, ToolParameter},
    value_objects::ToolError,
};
use tokio_util::sync::CancellationToken;

/// Tool name constant
pub const AVAILABILITY_CHECKER: &str = scout_domain::AVAILABILITY_TOOL;

/// Default registry lookup base (RDAP for .com)
pub const DEFAULT_LOOKUP_BASE: &str = "https://rdap.verisign.com/com/v1/domain";

pub struct AvailabilityCheckerTool {
    client: reqwest::Client,
    lookup_base: String,
}

impl AvailabilityCheckerTool {
    pub fn new(client: reqwest::Client, lookup_base: impl Into<String>) -> Self {
        Self {
            client,
            lookup_base: lookup_base.into(),
        }
    }

    /// Lookup URL for `domain`; the domain is used as given.
    fn lookup_url(&self, domain: &str) -> String {
        format!("{}/{}", self.lookup_base.trim_end_matches('/'), domain)
    }
}

#[async_trait]
impl CapabilityTool for AvailabilityCheckerTool {
    fn name(&self) -> &str {
        AVAILABILITY_CHECKER
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            AVAILABILITY_CHECKER,
            "This is a service that is able to check the availability of a domain",
        )
        .with_parameter(
            ToolParameter::new(
                "name",
                "The full domain name and tld to check availability for, e.g. escobar.com",
                true,
            )
            .with_type("string"),
        )
    }

    async fn invoke(&self, domain: &str, cancel: &CancellationToken) -> Result<String, ToolError> {
        let url = self.lookup_url(domain);

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ToolError::cancelled()),
            response = self.client.get(&url).send() => response,
        };

        let available = match response {
            Ok(response) => {
                let status = response.status();
                tracing::debug!(%domain, status = status.as_u16(), "Registry lookup");
                status != reqwest::StatusCode::OK
            }
            Err(e) => {
                tracing::warn!(%domain, error = %e, "Registry lookup failed, assuming available");
                true
            }
        };

        Ok(available.to_string())
    }
}
