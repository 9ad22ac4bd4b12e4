//! The request façade: build, send, classify, decode, deliver.
//!
//! # Design
//! Both execution modes drive the same four stages; the shared tail lives in
//! `conclude` so the two public entry points stay thin adapters. The
//! awaitable mode surfaces every failure as the `Err` of the call itself.
//! The callback mode never fails the issuing call: every outcome, including
//! a request-construction failure, arrives through exactly one invocation of
//! the callback, enqueued on the caller-supplied runtime handle.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::decode::Decode;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::Method;
use crate::request;
use crate::response::{classify, RawOutcome};
use crate::transport::Transport;

/// Generic API client over an injected transport.
///
/// Holds no per-call state; the transport handle is long-lived, shared, and
/// only ever read. `Clone` shares the same transport.
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: Arc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Awaitable execution mode.
    ///
    /// Suspends at the transport call on the caller's runtime. `Ok(None)` is
    /// the no-content outcome (status 204); any failure, including URL
    /// construction, is the `Err` of this call.
    pub async fn fetch<D: Decode>(
        &self,
        endpoint: &dyn Endpoint,
        method: Method,
        decoder: &D,
    ) -> Result<Option<D::Output>, ApiError> {
        let request = request::build(endpoint, &method)?;
        debug!(verb = %request.verb, url = %request.url, "sending request");
        let outcome = self.transport.send(request).await;
        conclude(outcome, decoder)
    }
}

impl<T: Transport + 'static> ApiClient<T> {
    /// Callback execution mode.
    ///
    /// Spawns the transport round-trip onto `queue` and delivers the outcome
    /// through exactly one invocation of `on_complete` on that queue. A
    /// request that fails before the transport step returns `None` and still
    /// delivers the failure; otherwise the returned [`CallHandle`] can cancel
    /// the in-flight call, suppressing delivery best-effort.
    pub fn fetch_with_callback<D, F>(
        &self,
        endpoint: &dyn Endpoint,
        method: Method,
        decoder: D,
        queue: &Handle,
        on_complete: F,
    ) -> Option<CallHandle>
    where
        D: Decode + Send + 'static,
        D::Output: Send + 'static,
        F: FnOnce(Result<Option<D::Output>, ApiError>) + Send + 'static,
    {
        let request = match request::build(endpoint, &method) {
            Ok(request) => request,
            Err(err) => {
                queue.spawn(async move { on_complete(Err(err)) });
                return None;
            }
        };
        debug!(verb = %request.verb, url = %request.url, "dispatching request");

        let transport = Arc::clone(&self.transport);
        let task = queue.spawn(async move {
            let outcome = transport.send(request).await;
            on_complete(conclude(outcome, &decoder));
        });
        Some(CallHandle {
            task: task.abort_handle(),
        })
    }
}

/// Shared pipeline tail: classify the outcome, then decode unless absent.
fn conclude<D: Decode>(outcome: RawOutcome, decoder: &D) -> Result<Option<D::Output>, ApiError> {
    match classify(outcome)? {
        None => Ok(None),
        Some(bytes) => decoder.decode(&bytes).map(Some),
    }
}

/// Handle to an in-flight callback-mode call.
#[derive(Debug)]
pub struct CallHandle {
    task: AbortHandle,
}

impl CallHandle {
    /// Abort the in-flight call. Cancelling after delivery has no effect;
    /// cancelling earlier suppresses delivery but not necessarily the
    /// transport work already underway.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
