//! Streaming price service port

use async_trait::async_trait;
use futures::stream::BoxStream;
use scout_domain::{PriceSearchMessage, UpstreamError};
use thiserror::Error;

/// Errors surfaced while searching prices
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceStreamError {
    #[error("no price available for {0}")]
    NoPriceAvailable(String),

    #[error("price service error: {0}")]
    Upstream(UpstreamError),

    #[error("price service transport error: {0}")]
    Transport(String),

    #[error("invalid price service message: {0}")]
    Decode(String),

    #[error("price search cancelled")]
    Cancelled,
}

/// Messages of one price search. An `Err` item ends the stream.
pub type PriceStream = BoxStream<'static, Result<PriceSearchMessage, PriceStreamError>>;

/// Port for the upstream price service.
///
/// Dropping the returned stream must stop consumption and release the
/// underlying transport.
#[async_trait]
pub trait PriceStreamPort: Send + Sync {
    async fn search(&self, domain: &str) -> Result<PriceStream, PriceStreamError>;
}
