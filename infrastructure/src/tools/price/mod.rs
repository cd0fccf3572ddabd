//! price_checker_tool: registration price for a domain via the price stream

mod reducer;

pub use reducer::first_price;

use async_trait::async_trait;
use scout_application::ports::{
    capability_tool::CapabilityTool,
    price_stream::{PriceStreamError, PriceStreamPort},
};
use scout_domain::tool::{
    entities::{ToolDefinition, ToolParameter},
    value_objects::ToolError,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Tool name constant
pub const PRICE_CHECKER: &str = scout_domain::PRICE_TOOL;

pub struct PriceCheckerTool {
    provider: Arc<dyn PriceStreamPort>,
}

impl PriceCheckerTool {
    pub fn new(provider: Arc<dyn PriceStreamPort>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CapabilityTool for PriceCheckerTool {
    fn name(&self) -> &str {
        PRICE_CHECKER
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            PRICE_CHECKER,
            "This is a service that is able to perform price check for a domain",
        )
        .with_parameter(
            ToolParameter::new(
                "name",
                "The full domain name and tld to get price for, e.g. escobar.com",
                true,
            )
            .with_type("string"),
        )
    }

    async fn invoke(&self, domain: &str, cancel: &CancellationToken) -> Result<String, ToolError> {
        match first_price(self.provider.as_ref(), domain, cancel).await {
            Ok(quote) => Ok(quote.format_cost()),
            Err(PriceStreamError::Cancelled) => Err(ToolError::cancelled()),
            Err(e) => Err(ToolError::execution_failed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use futures::stream;
    use scout_application::ports::price_stream::PriceStream;
    use scout_domain::{PriceQuote, PriceSearchMessage, UpstreamError};

    struct StaticProvider(Vec<PriceSearchMessage>);

    #[async_trait]
    impl PriceStreamPort for StaticProvider {
        async fn search(&self, _domain: &str) -> Result<PriceStream, PriceStreamError> {
            Ok(stream::iter(self.0.clone().into_iter().map(Ok)).boxed())
        }
    }

    fn quote(cost: rust_decimal::Decimal) -> PriceSearchMessage {
        PriceSearchMessage::Price(PriceQuote {
            domain: "beanhaus.com".to_string(),
            currency: "USD".to_string(),
            cost,
            renewal_cost: None,
            promotion: false,
            labels: vec![],
            available: true,
        })
    }

    #[tokio::test]
    async fn test_returns_two_decimal_cost() {
        let tool = PriceCheckerTool::new(Arc::new(StaticProvider(vec![quote(
            rust_decimal::Decimal::new(1299, 2),
        )])));
        let out = tool
            .invoke("beanhaus.com", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(out, "12.99");

        let tool = PriceCheckerTool::new(Arc::new(StaticProvider(vec![quote(
            rust_decimal::Decimal::from(45),
        )])));
        let out = tool.invoke("x.io", &CancellationToken::new()).await.unwrap();
        assert_eq!(out, "45.00");
    }

    #[tokio::test]
    async fn test_error_record_is_not_a_zero_price() {
        let tool = PriceCheckerTool::new(Arc::new(StaticProvider(vec![
            PriceSearchMessage::Error(UpstreamError {
                code: "UNAVAILABLE".to_string(),
                message: "registry offline".to_string(),
            }),
        ])));
        let err = tool
            .invoke("beanhaus.com", &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "EXECUTION_FAILED");
        assert!(err.message.contains("registry offline"));
    }

    #[tokio::test]
    async fn test_no_price() {
        let tool = PriceCheckerTool::new(Arc::new(StaticProvider(vec![])));
        let err = tool
            .invoke("beanhaus.com", &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.message, "no price available for beanhaus.com");
    }

    #[test]
    fn test_definition_schema() {
        let tool = PriceCheckerTool::new(Arc::new(StaticProvider(vec![])));
        let schema = tool.definition().parameters_schema();
        assert_eq!(schema["required"][0], "name");
        assert_eq!(schema["properties"]["name"]["type"], "string");
    }
}
