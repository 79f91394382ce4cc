//! HTTP transport: one spawned task per request, cancellable through a oneshot signal.

use std::sync::{Arc, Mutex, Weak};

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use url::Url;

/// Transport-level outcome of a call, independent of the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransportStatus {
    Ok,
    Error,
}

/// Status line and raw body of a completed call.
#[derive(Debug, Default)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: Vec<u8>,
}

/// The live half of an in-flight request.
///
/// The spawned task holds the only strong reference and releases it as soon as the call
/// finishes, before the completion handler runs. Handles observe it through a [`Weak`].
#[derive(Debug)]
pub(crate) struct HttpRequest {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    url: Url,
    stop_tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl HttpRequest {
    /// Asks the task to abandon the call. Returns `false` if a cancel was already
    /// delivered or the task stopped listening.
    pub(crate) fn cancel(&self) -> bool {
        let Ok(mut guard) = self.stop_tx.lock() else {
            return false;
        };
        let accepted = guard.take().is_some_and(|tx| tx.send(()).is_ok());
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.url, accepted, "cancel requested");
        accepted
    }
}

/// A prepared call that has not been started yet.
pub(crate) struct Call {
    request: Arc<HttpRequest>,
    builder: RequestBuilder,
    stop_rx: oneshot::Receiver<()>,
}

impl Call {
    pub(crate) fn new(http: &Client, url: Url, headers: HeaderMap) -> Self {
        let (stop_tx, stop_rx) = oneshot::channel();
        let builder = http.get(url.clone()).headers(headers);
        Self {
            request: Arc::new(HttpRequest {
                url,
                stop_tx: Mutex::new(Some(stop_tx)),
            }),
            builder,
            stop_rx,
        }
    }

    pub(crate) fn request(&self) -> Weak<HttpRequest> {
        Arc::downgrade(&self.request)
    }

    /// Spawns the call on `runtime`. `on_done` runs at most once, on a runtime worker; it is
    /// skipped when the call is cancelled before the transport completes.
    pub(crate) fn start<F>(self, runtime: &Handle, on_done: F)
    where
        F: FnOnce(TransportStatus, HttpResponse) + Send + 'static,
    {
        let Call {
            request,
            builder,
            mut stop_rx,
        } = self;

        runtime.spawn(async move {
            let outcome = tokio::select! {
                res = execute(builder) => Some(res),
                _ = &mut stop_rx => None,
            };

            #[cfg(feature = "tracing")]
            let url = request.url.to_string();
            // Release the request first: a handle must read as finished once the
            // completion handler is running.
            drop(request);

            match outcome {
                Some(Ok(resp)) => on_done(TransportStatus::Ok, resp),
                Some(Err(_e)) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%url, error = %_e, "transport failure");
                    on_done(TransportStatus::Error, HttpResponse::default());
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%url, "request cancelled before completion");
                }
            }
        });
    }
}

async fn execute(builder: RequestBuilder) -> Result<HttpResponse, reqwest::Error> {
    let resp = builder.send().await?;
    let status = resp.status().as_u16();
    let body = resp.bytes().await?.to_vec();
    Ok(HttpResponse { status, body })
}
