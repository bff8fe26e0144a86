//! HTTP client traits.
//!
//! [`HttpClient`] is the seam to the underlying network primitive: anything
//! that can turn a [`Request`] into a [`Response`]. [`HttpClientExt`] layers
//! cancellable dispatch on top of any implementation.

use std::future::Future;

use futures_util::future::{AbortHandle, Abortable};

use crate::{Canceller, Error, Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations issue exactly one network call per [`execute`] and
/// surface all failures to the caller — no retries, no deduplication.
///
/// [`execute`]: HttpClient::execute
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails for any reason:
    /// - Network errors
    /// - TLS errors
    /// - Invalid response
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}

/// Extension trait for [`HttpClient`] adding cancellable dispatch.
pub trait HttpClientExt: HttpClient {
    /// Execute a request, optionally wired to a [`Canceller`].
    ///
    /// With a canceller, a fresh abort handle is armed **before** the network
    /// future is first polled — the caller can cancel even before the call
    /// settles — and triggering it makes the pending result settle with
    /// [`Error::Cancelled`]. Without one, the call is not cancellable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] when aborted, otherwise whatever the
    /// underlying call returns.
    fn execute_cancellable(
        &self,
        request: Request,
        canceller: Option<&Canceller>,
    ) -> impl Future<Output = Result<Response>> + Send {
        // Arm synchronously, ahead of the await, so the trigger is live
        // before the network call starts.
        let registration = canceller.map(|canceller| {
            let (handle, registration) = AbortHandle::new_pair();
            canceller.arm(handle);
            registration
        });

        async move {
            match registration {
                Some(registration) => {
                    match Abortable::new(self.execute(request), registration).await {
                        Ok(settled) => settled,
                        Err(_aborted) => Err(Error::Cancelled),
                    }
                }
                None => self.execute(request).await,
            }
        }
    }
}

// Blanket implementation for all HttpClient implementors
impl<T: HttpClient> HttpClientExt for T {}
