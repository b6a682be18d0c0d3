use crate::event::Registry;
use crate::handler::Handler;
use std::fmt;
use std::sync::Weak;

/// Unsubscribe token returned by [`Event::subscribe`](crate::Event::subscribe)
/// and [`Event::once`](crate::Event::once).
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) has the same effect as
/// `event.unsubscribe(handler)`. It can be called any number of times, and
/// does nothing once the handler is gone or the event has been dropped.
/// Dropping the token leaves the handler subscribed.
pub struct Subscription<A> {
    registry: Weak<Registry<A>>,
    handler: Handler<A>,
}

impl<A> Subscription<A> {
    pub(crate) fn new(registry: Weak<Registry<A>>, handler: Handler<A>) -> Self {
        Self { registry, handler }
    }

    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove_handler(&self.handler);
        }
    }

    /// Whether the handler still has at least one registration on a live event.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(&self.handler))
    }

    pub fn handler(&self) -> &Handler<A> {
        &self.handler
    }
}

impl<A> fmt::Debug for Subscription<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handler", &self.handler)
            .field("active", &self.is_active())
            .finish()
    }
}
