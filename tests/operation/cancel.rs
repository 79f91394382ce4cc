use std::time::Duration;

use httpmock::Method::GET;
use chrono::{DateTime, Utc};
use tradier_rs::{
    AsyncOperation, Backend, Callback, ConfigNode, Exchange, Granularity, Granule, Quote, TdError,
    Ticker, fetch,
};

use crate::common;

#[tokio::test]
async fn cancel_after_callback_returns_false() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/quotes");
        then.status(200).body(common::fixture("quote_AAPL"));
    });

    let backend = common::backend(&server);
    let (cb, rx) = common::capture();
    let op = backend.get_quote("AAPL", cb).unwrap();

    let (_status, handle, _q) = rx.await.unwrap();
    mock.assert();

    assert!(op.is_finished());
    assert!(!op.cancel());
    assert!(!handle.cancel());
}

#[tokio::test]
async fn cancel_in_flight_suppresses_the_callback() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/quotes");
        then.status(200)
            .delay(Duration::from_secs(2))
            .body(common::fixture("quote_AAPL"));
    });

    let backend = common::backend(&server);
    let (cb, rx) = common::capture();
    let op = backend.get_quote("AAPL", cb).unwrap();

    assert!(!op.is_finished());
    assert!(op.cancel());
    // a second cancel has nothing left to stop
    assert!(!op.cancel());

    // the callback is dropped without running
    let delivered = tokio::time::timeout(Duration::from_secs(1), rx)
        .await
        .expect("task finished well before the mocked delay");
    assert!(delivered.is_err());

    assert!(op.is_finished());
    assert!(!op.cancel());
}

/// Drops every callback unrun, as a backend does for cancelled requests.
struct Dropping;

impl Backend for Dropping {
    fn id(&self) -> &'static str {
        "dropping"
    }

    fn set_config(&mut self, _config: &[ConfigNode]) {}

    fn get_exchanges(
        &self,
        _callback: Option<Callback<Vec<Exchange>>>,
    ) -> Result<AsyncOperation, TdError> {
        Ok(AsyncOperation::default())
    }

    fn find_ticker(
        &self,
        _query: &str,
        _callback: Option<Callback<Vec<Ticker>>>,
    ) -> Result<AsyncOperation, TdError> {
        Ok(AsyncOperation::default())
    }

    fn get_quote(
        &self,
        _symbol: &str,
        _callback: Option<Callback<Quote>>,
    ) -> Result<AsyncOperation, TdError> {
        Ok(AsyncOperation::default())
    }

    fn get_prices(
        &self,
        _symbol: &str,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
        _granularity: Granularity,
        _callback: Option<Callback<Vec<Granule>>>,
    ) -> Result<AsyncOperation, TdError> {
        Ok(AsyncOperation::default())
    }
}

#[tokio::test]
async fn async_wrappers_report_dropped_callbacks_as_cancelled() {
    let backend = Dropping;

    let err = fetch::quote(&backend, "AAPL").await.unwrap_err();
    assert!(matches!(err, TdError::Cancelled { operation: "get_quote" }));

    let err = fetch::find_ticker(&backend, "apple").await.unwrap_err();
    assert!(matches!(err, TdError::Cancelled { operation: "find_ticker" }));

    let now = Utc::now();
    let err = fetch::prices(&backend, "SPY", now, now, Granularity::Minute)
        .await
        .unwrap_err();
    assert!(matches!(err, TdError::Cancelled { operation: "get_prices" }));

    // also usable as a trait object
    let dynamic: &dyn Backend = &backend;
    let err = fetch::exchanges(dynamic).await.unwrap_err();
    assert!(matches!(err, TdError::Cancelled { operation: "get_exchanges" }));
}
