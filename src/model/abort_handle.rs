use std::fmt;
use std::sync::Arc;

type AbortFn = dyn Fn() + Send + Sync;

/// Cancellation callback carried by progress actions.
///
/// The default handle is a no-op; handles compare equal when they share the
/// same callback.
#[derive(Clone, Default)]
pub struct AbortHandle {
    callback: Option<Arc<AbortFn>>,
}

impl AbortHandle {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        AbortHandle {
            callback: Some(Arc::new(callback)),
        }
    }

    pub fn noop() -> Self {
        AbortHandle::default()
    }

    /// Returns true when a real callback is set
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Runs the callback, does nothing for the no-op handle
    pub fn abort(&self) {
        if let Some(callback) = &self.callback {
            callback();
        }
    }
}

impl PartialEq for AbortHandle {
    fn eq(&self, other: &Self) -> bool {
        match (&self.callback, &other.callback) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for AbortHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "AbortHandle(set)")
        } else {
            write!(f, "AbortHandle(noop)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_noop_is_not_set() {
        let handle = AbortHandle::noop();
        assert!(!handle.is_set());
        handle.abort();
    }

    #[test]
    fn test_abort_runs_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handle = AbortHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        handle.abort();
        handle.clone().abort();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_equality_is_by_identity() {
        let a = AbortHandle::new(|| {});
        let b = AbortHandle::new(|| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a, AbortHandle::noop());
        assert_eq!(AbortHandle::noop(), AbortHandle::default());
    }
}
