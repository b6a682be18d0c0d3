use std::fmt;
use std::sync::Arc;

type HandlerFn<A> = dyn Fn(&A) + Send + Sync;

/// A callable registered against an [`Event`](crate::Event).
///
/// Closures have no identity of their own, so a `Handler` wraps one in an `Arc`
/// and compares by pointer. Clones of a handler are the same reference; two
/// handlers built from identical closures are not.
pub struct Handler<A> {
    inner: Arc<HandlerFn<A>>,
}

impl<A> Handler<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, args: &A) {
        (self.inner)(args)
    }

    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A> Clone for Handler<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> PartialEq for Handler<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<A> Eq for Handler<A> {}

impl<A> fmt::Debug for Handler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("ptr", &(Arc::as_ptr(&self.inner) as *const ()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_clone_is_same_handler() {
        let handler = Handler::<()>::new(|_| {});
        let clone = handler.clone();
        assert_eq!(handler, clone);
        assert!(handler.same_as(&clone));
    }

    #[test]
    fn test_identical_closures_are_distinct() {
        let a = Handler::<()>::new(|_| {});
        let b = Handler::<()>::new(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_call_passes_args() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = seen.clone();
        let handler = Handler::new(move |n: &usize| {
            sink.fetch_add(*n, Ordering::SeqCst);
        });

        handler.call(&3);
        handler.call(&4);

        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
