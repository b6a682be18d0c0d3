use crate::handler::Handler;
use std::sync::atomic::{AtomicBool, Ordering};

/// A registration record: one handler plus its once-flag.
///
/// `live` flips to false exactly once, when the record leaves the collection
/// or when a once-listener is claimed by a trigger pass.
pub(crate) struct Listener<A> {
    handler: Handler<A>,
    once: bool,
    live: AtomicBool,
}

impl<A> Listener<A> {
    pub(crate) fn new(handler: Handler<A>, once: bool) -> Self {
        Self {
            handler,
            once,
            live: AtomicBool::new(true),
        }
    }

    pub(crate) fn handler(&self) -> &Handler<A> {
        &self.handler
    }

    pub(crate) fn is_once(&self) -> bool {
        self.once
    }

    pub(crate) fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Marks the record dead. Returns true only for the caller that flipped it.
    pub(crate) fn retire(&self) -> bool {
        self.live.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retire_only_succeeds_once() {
        let listener = Listener::new(Handler::<()>::new(|_| {}), true);
        assert!(listener.is_live());
        assert!(listener.is_once());

        assert!(listener.retire());
        assert!(!listener.retire());
        assert!(!listener.is_live());
    }
}
