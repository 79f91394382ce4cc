use thiserror::Error;

use crate::core::models::Granularity;

/// The primary error type for all fallible operations in this crate.
///
/// Errors raised while a request is in flight never reach the caller as a `TdError`; the
/// backend converts them into [`Status::Failure`](crate::Status::Failure) on the callback.
/// The variants that are returned synchronously are the programmer errors: a missing
/// callback, an unsupported granularity or the absence of a runtime to run the transport on.
#[derive(Debug, Error)]
pub enum TdError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An operation was started without a completion callback.
    #[error("{operation}(): passed in callback is missing")]
    MissingCallback {
        /// The backend operation that was invoked.
        operation: &'static str,
    },

    /// Historical prices were requested at a granularity the provider path does not implement.
    #[error("price history at {0:?} granularity is not supported")]
    UnsupportedGranularity(Granularity),

    /// No tokio runtime was configured or current when a request had to be started.
    #[error("no tokio runtime available to run the request")]
    NoRuntime,

    /// The operation was cancelled before its callback was delivered.
    #[error("{operation}() was cancelled")]
    Cancelled {
        /// The backend operation that was cancelled.
        operation: &'static str,
    },

    /// The operation completed with [`Status::Failure`](crate::Status::Failure).
    #[error("{operation}() completed with failure status")]
    Failed {
        /// The backend operation that failed.
        operation: &'static str,
    },
}
