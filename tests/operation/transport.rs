use std::time::Duration;

use futures::future::join_all;
use httpmock::Method::GET;
use tradier_rs::{Backend, Status, TdError, Tradier, fetch};
use url::Url;

use crate::common;

#[tokio::test]
async fn unreachable_host_is_a_failure() {
    // Nothing listens on port 9 (discard) locally.
    let backend = Tradier::builder()
        .base_url(Url::parse("http://127.0.0.1:9/v1/").unwrap())
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let (cb, rx) = common::capture();
    let op = backend.find_ticker("apple", cb).unwrap();

    let (status, _handle, tickers) = rx.await.unwrap();
    assert_eq!(status, Status::Failure);
    assert!(tickers.is_empty());
    assert!(!op.cancel());
}

#[test]
fn starting_a_request_outside_a_runtime_is_rejected() {
    let backend = Tradier::builder().build().unwrap();
    let (cb, _rx) = common::capture::<tradier_rs::Quote>();
    let err = backend.get_quote("AAPL", cb).unwrap_err();
    assert!(matches!(err, TdError::NoRuntime));
}

#[test]
fn explicit_runtime_handle_is_used_from_plain_threads() {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();

    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v1/markets/quotes");
        then.status(200).body(common::fixture("quote_AAPL"));
    });

    let backend = Tradier::builder()
        .base_url(common::base_url(&server))
        .runtime(rt.handle().clone())
        .build()
        .unwrap();

    let (tx, rx) = std::sync::mpsc::channel();
    backend
        .get_quote(
            "AAPL",
            tradier_rs::callback(move |status, _op, q: tradier_rs::Quote| {
                tx.send((status, q.volume, std::thread::current().id())).unwrap();
            }),
        )
        .unwrap();

    let (status, volume, thread) = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    mock.assert();
    assert_eq!(status, Status::Ok);
    assert_eq!(volume, 71_311_109);
    // delivered on a runtime worker, not the calling thread
    assert_ne!(thread, std::thread::current().id());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_operations_resolve_independently() {
    let server = common::setup_server();
    let ok = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/quotes")
            .query_param("symbols", "AAPL");
        then.status(200).body(common::fixture("quote_AAPL"));
    });
    let slow = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/quotes")
            .query_param("symbols", "MSFT");
        then.status(200)
            .delay(Duration::from_millis(300))
            .body(common::fixture("quote_premarket"));
    });
    let bad = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/markets/quotes")
            .query_param("symbols", "FAIL");
        then.status(502).body("bad gateway");
    });

    let backend = common::backend(&server);
    let results = join_all(
        ["AAPL", "MSFT", "FAIL", "AAPL"]
            .into_iter()
            .map(|s| fetch::quote(&backend, s)),
    )
    .await;

    ok.assert_calls(2);
    slow.assert();
    bad.assert();

    assert_eq!(results[0].as_ref().unwrap().volume, 71_311_109);
    assert!((results[1].as_ref().unwrap().last - 250.79).abs() < 1e-9);
    assert!(matches!(
        results[2],
        Err(TdError::Failed {
            operation: "get_quote"
        })
    ));
    assert_eq!(results[3].as_ref().unwrap().volume, 71_311_109);
}
