//! Reduce a streamed price search to a single quote.
//!
//! A worker task drains the stream under a child of the caller's token and
//! hands the first price over a capacity-1 channel. It stops draining as soon
//! as that price is sent; a worker that kept reading would block on the
//! second send once the caller stopped receiving. The caller then cancels
//! the scope and joins the worker, so the stream (and its transport) is
//! dropped before the quote is returned.

use futures::StreamExt;
use scout_application::ports::price_stream::{PriceStream, PriceStreamError, PriceStreamPort};
use scout_domain::{PriceQuote, PriceSearchMessage};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// First usable quote for `domain`.
///
/// Error records are remembered; if the stream ends without a price the last
/// one is returned, otherwise [`PriceStreamError::NoPriceAvailable`].
pub async fn first_price(
    provider: &dyn PriceStreamPort,
    domain: &str,
    cancel: &CancellationToken,
) -> Result<PriceQuote, PriceStreamError> {
    let scope = cancel.child_token();
    let _guard = scope.clone().drop_guard();

    let stream = tokio::select! {
        biased;
        _ = scope.cancelled() => return Err(PriceStreamError::Cancelled),
        stream = provider.search(domain) => stream?,
    };

    let (tx, mut rx) = mpsc::channel(1);
    let worker = tokio::spawn(drain(stream, tx, scope.clone(), domain.to_string()));

    match rx.recv().await {
        Some(quote) => {
            scope.cancel();
            join(worker).await?;
            Ok(quote)
        }
        None => match join(worker).await {
            Ok(()) => Err(PriceStreamError::NoPriceAvailable(domain.to_string())),
            Err(e) => Err(e),
        },
    }
}

async fn drain(
    mut stream: PriceStream,
    tx: mpsc::Sender<PriceQuote>,
    scope: CancellationToken,
    domain: String,
) -> Result<(), PriceStreamError> {
    let mut last_error = None;

    loop {
        let next = tokio::select! {
            biased;
            _ = scope.cancelled() => return Err(PriceStreamError::Cancelled),
            next = stream.next() => next,
        };

        match next {
            Some(Ok(PriceSearchMessage::Price(quote))) => {
                debug!(%domain, ?quote, "Received price");
                // Receiver only disappears when the caller was dropped.
                let _ = tx.send(quote).await;
                return Ok(());
            }
            Some(Ok(PriceSearchMessage::Error(error))) => {
                warn!(%domain, %error, "Price service returned an error record");
                last_error = Some(PriceStreamError::Upstream(error));
            }
            Some(Err(e)) => return Err(e),
            None => break,
        }
    }

    Err(last_error.unwrap_or(PriceStreamError::NoPriceAvailable(domain)))
}

async fn join(
    worker: tokio::task::JoinHandle<Result<(), PriceStreamError>>,
) -> Result<(), PriceStreamError> {
    worker
        .await
        .map_err(|e| PriceStreamError::Transport(format!("price worker failed: {}", e)))?
}
