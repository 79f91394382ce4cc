//! `async` wrappers over the callback API.
//!
//! Each function starts the matching [`Backend`] operation and awaits its callback, turning
//! [`Status::Failure`] into [`TdError::Failed`]. If the operation is cancelled through its
//! handle before completing, the callback is dropped and the future resolves to
//! [`TdError::Cancelled`].

use chrono::{DateTime, Utc};
use tokio::sync::oneshot;

use crate::backend::Backend;
use crate::core::TdError;
use crate::core::models::{Exchange, Granularity, Granule, Quote, Status, Ticker};
use crate::core::operation::{AsyncOperation, Callback};

fn channel<T: Send + 'static>() -> (Option<Callback<T>>, oneshot::Receiver<(Status, T)>) {
    let (tx, rx) = oneshot::channel();
    let cb: Callback<T> = Box::new(move |status, _op: AsyncOperation, value| {
        // Receiver gone means the caller stopped waiting.
        let _ = tx.send((status, value));
    });
    (Some(cb), rx)
}

async fn settle<T>(
    operation: &'static str,
    rx: oneshot::Receiver<(Status, T)>,
) -> Result<T, TdError> {
    match rx.await {
        Ok((Status::Ok, value)) => Ok(value),
        Ok((Status::Failure, _)) => Err(TdError::Failed { operation }),
        Err(_) => Err(TdError::Cancelled { operation }),
    }
}

/// Lists the exchanges known to `backend`.
///
/// # Errors
///
/// Returns `TdError::Failed` if the backend reports a failure.
pub async fn exchanges<B: Backend + ?Sized>(backend: &B) -> Result<Vec<Exchange>, TdError> {
    let (cb, rx) = channel();
    backend.get_exchanges(cb)?;
    settle("get_exchanges", rx).await
}

/// Searches tickers matching `query`.
///
/// # Errors
///
/// Returns `TdError::Failed` on transport, HTTP or parse failures, and any error the
/// backend raises before starting the request.
pub async fn find_ticker<B: Backend + ?Sized>(
    backend: &B,
    query: &str,
) -> Result<Vec<Ticker>, TdError> {
    let (cb, rx) = channel();
    backend.find_ticker(query, cb)?;
    settle("find_ticker", rx).await
}

/// Fetches the current quote for `symbol`.
///
/// # Errors
///
/// Same as [`find_ticker`].
pub async fn quote<B: Backend + ?Sized>(backend: &B, symbol: &str) -> Result<Quote, TdError> {
    let (cb, rx) = channel();
    backend.get_quote(symbol, cb)?;
    settle("get_quote", rx).await
}

/// Fetches intraday history for `symbol` ending at `to`.
///
/// # Errors
///
/// Same as [`find_ticker`], plus `TdError::UnsupportedGranularity`.
pub async fn prices<B: Backend + ?Sized>(
    backend: &B,
    symbol: &str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    granularity: Granularity,
) -> Result<Vec<Granule>, TdError> {
    let (cb, rx) = channel();
    backend.get_prices(symbol, from, to, granularity, cb)?;
    settle("get_prices", rx).await
}
