//! Cooperative request cancellation.
//!
//! A [`Canceller`] is a cloneable slot shared between the caller and the
//! dispatcher. The dispatcher arms it with a fresh abort handle before each
//! network call starts; the caller triggers it at any point to make the
//! pending result settle with [`crate::Error::Cancelled`].
//!
//! # Example
//!
//! ```ignore
//! let canceller = Canceller::new();
//! let endpoint = Endpoint::new(url).with_canceller(canceller.clone());
//!
//! let pending = tokio::spawn(async move {
//!     endpoint.get(RequestOptions::new()).query(Record::new(), []).await
//! });
//! canceller.cancel();
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::AbortHandle;

/// Cancellation handle for in-flight requests.
///
/// Cancellation is cooperative: triggering drops the in-flight call locally,
/// with no guarantee the remote side observes the abort. Cancelling with
/// nothing armed is a no-op; arming replaces any previous handle.
#[derive(Debug, Clone, Default)]
pub struct Canceller {
    inner: Arc<Mutex<Option<AbortHandle>>>,
}

impl Canceller {
    /// Create an unarmed canceller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the armed in-flight request, if any.
    ///
    /// Takes the handle, so each armed call can be cancelled once.
    pub fn cancel(&self) {
        let handle = self.lock().take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    /// Returns `true` while a dispatched call is armed for cancellation.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.lock().is_some()
    }

    /// Arm with the abort handle of the call about to be dispatched.
    pub(crate) fn arm(&self, handle: AbortHandle) {
        *self.lock() = Some(handle);
    }

    fn lock(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_without_armed_handle_is_noop() {
        let canceller = Canceller::new();
        assert!(!canceller.is_armed());
        canceller.cancel();
        assert!(!canceller.is_armed());
    }

    #[test]
    fn arm_and_cancel() {
        let canceller = Canceller::new();
        let (handle, _registration) = AbortHandle::new_pair();
        let probe = handle.clone();

        canceller.arm(handle);
        assert!(canceller.is_armed());

        canceller.cancel();
        assert!(!canceller.is_armed());
        assert!(probe.is_aborted());
    }

    #[test]
    fn arming_replaces_previous_handle() {
        let canceller = Canceller::new();
        let (first, _first_registration) = AbortHandle::new_pair();
        let (second, _second_registration) = AbortHandle::new_pair();
        let first_probe = first.clone();
        let second_probe = second.clone();

        canceller.arm(first);
        canceller.arm(second);
        canceller.cancel();

        assert!(!first_probe.is_aborted());
        assert!(second_probe.is_aborted());
    }

    #[test]
    fn clones_share_the_slot() {
        let canceller = Canceller::new();
        let clone = canceller.clone();
        let (handle, _registration) = AbortHandle::new_pair();
        let probe = handle.clone();

        canceller.arm(handle);
        clone.cancel();

        assert!(probe.is_aborted());
        assert!(!canceller.is_armed());
    }
}
