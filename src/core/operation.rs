use std::fmt;
use std::sync::Weak;

use crate::core::models::Status;
use crate::core::net::HttpRequest;

/// One-shot completion handler for a backend operation.
///
/// Receives the outcome, the handle that was returned to the caller, and the result (a
/// default/empty value when `status` is [`Status::Failure`]).
pub type Callback<T> = Box<dyn FnOnce(Status, AsyncOperation, T) + Send + 'static>;

/// Boxes a closure as a [`Callback`], ready to hand to a backend operation.
pub fn callback<T, F>(f: F) -> Option<Callback<T>>
where
    F: FnOnce(Status, AsyncOperation, T) + Send + 'static,
{
    Some(Box::new(f))
}

/// Handle to one in-flight or completed fetch.
///
/// The handle observes the transport request without owning it: once the request has
/// completed and been released, the handle is inert. Clones refer to the same operation.
#[derive(Clone, Default)]
pub struct AsyncOperation {
    request: Weak<HttpRequest>,
}

impl AsyncOperation {
    pub(crate) fn new(request: Weak<HttpRequest>) -> Self {
        Self { request }
    }

    /// A handle for an operation that finished without a transport request.
    pub(crate) fn finished() -> Self {
        Self::default()
    }

    /// Tries to cancel the operation.
    ///
    /// Returns `false` when the transport request has already finished (cancelling is then a
    /// no-op), otherwise whatever the transport reports. A completion that raced ahead of the
    /// cancel may still be delivered.
    pub fn cancel(&self) -> bool {
        match self.request.upgrade() {
            Some(r) => r.cancel(),
            None => false,
        }
    }

    /// Whether the transport request has been released.
    pub fn is_finished(&self) -> bool {
        self.request.strong_count() == 0
    }
}

impl fmt::Debug for AsyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncOperation")
            .field("finished", &self.is_finished())
            .finish()
    }
}
