use crate::config::EventConfig;
use crate::handler::Handler;
use crate::listener::Listener;
use crate::subscription::Subscription;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Listener storage shared between an [`Event`] and the subscriptions it hands out.
pub(crate) struct Registry<A> {
    label: String,
    max_listeners: Option<usize>,
    listeners: Mutex<Vec<Arc<Listener<A>>>>,
    leak_warned: AtomicBool,
}

impl<A> Registry<A> {
    fn new(config: &EventConfig) -> Self {
        Self {
            label: config.label_or_default().to_string(),
            max_listeners: config.max_listeners,
            listeners: Mutex::new(Vec::new()),
            leak_warned: AtomicBool::new(false),
        }
    }

    fn push(&self, handler: &Handler<A>, once: bool) {
        let count = {
            let mut listeners = self.listeners.lock();
            listeners.push(Arc::new(Listener::new(handler.clone(), once)));
            listeners.len()
        };

        tracing::trace!(event = %self.label, once, listeners = count, "listener added");
        self.check_leak(count);
    }

    /// Drops every record holding `handler`. Returns how many were removed.
    pub(crate) fn remove_handler(&self, handler: &Handler<A>) -> usize {
        let (removed, remaining) = {
            let mut listeners = self.listeners.lock();
            let before = listeners.len();
            listeners.retain(|listener| {
                if listener.handler() == handler {
                    listener.retire();
                    false
                } else {
                    true
                }
            });
            (before - listeners.len(), listeners.len())
        };

        if removed > 0 {
            tracing::trace!(
                event = %self.label,
                removed,
                listeners = remaining,
                "listener removed"
            );
        }
        removed
    }

    fn remove_listener(&self, target: &Arc<Listener<A>>) {
        self.listeners
            .lock()
            .retain(|listener| !Arc::ptr_eq(listener, target));
    }

    pub(crate) fn contains(&self, handler: &Handler<A>) -> bool {
        self.listeners
            .lock()
            .iter()
            .any(|listener| listener.handler() == handler)
    }

    fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    fn clear(&self) {
        let drained: Vec<_> = self.listeners.lock().drain(..).collect();
        for listener in &drained {
            listener.retire();
        }
        tracing::trace!(event = %self.label, removed = drained.len(), "listeners cleared");
    }

    fn snapshot(&self) -> Vec<Arc<Listener<A>>> {
        self.listeners.lock().clone()
    }

    fn check_leak(&self, count: usize) {
        let Some(max) = self.max_listeners else {
            return;
        };

        if count > max && !self.leak_warned.swap(true, Ordering::Relaxed) {
            tracing::warn!(
                event = %self.label,
                listeners = count,
                max_listeners = max,
                "Possible listener leak: listener count exceeds max_listeners"
            );
        }
    }
}

/// A synchronous, typed notifier.
///
/// `A` is the argument type every handler receives; use a tuple for several
/// arguments. Handlers run on the caller's thread, in subscription order, each
/// time [`trigger`](Event::trigger) is called.
///
/// All methods take `&self`. The listener lock is never held while a handler
/// runs, so handlers may subscribe, unsubscribe or trigger the same event.
pub struct Event<A> {
    registry: Arc<Registry<A>>,
    config: EventConfig,
}

impl<A> Event<A> {
    pub fn new() -> Self {
        Self::with_config(EventConfig::default())
    }

    pub fn with_config(config: EventConfig) -> Self {
        Self {
            registry: Arc::new(Registry::new(&config)),
            config,
        }
    }

    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Appends `handler` to the listener list.
    ///
    /// The same handler may be subscribed more than once; each registration
    /// fires separately. The returned [`Subscription`] removes every
    /// registration of `handler` when invoked.
    pub fn subscribe(&self, handler: &Handler<A>) -> Subscription<A> {
        self.registry.push(handler, false);
        Subscription::new(Arc::downgrade(&self.registry), handler.clone())
    }

    /// Like [`subscribe`](Event::subscribe), but the listener removes itself
    /// after its first invocation.
    ///
    /// A once-listener is claimed before its handler runs, so it fires at most
    /// once even when the handler re-triggers this event. After it returns,
    /// every remaining registration of the same handler is removed as well.
    pub fn once(&self, handler: &Handler<A>) -> Subscription<A> {
        self.registry.push(handler, true);
        Subscription::new(Arc::downgrade(&self.registry), handler.clone())
    }

    /// Removes every registration of `handler`. Unknown handlers are ignored.
    pub fn unsubscribe(&self, handler: &Handler<A>) {
        self.registry.remove_handler(handler);
    }

    /// Invokes the current listeners in subscription order.
    ///
    /// The pass iterates the listeners present when it starts. Listeners added
    /// during the pass wait for the next trigger; listeners removed during the
    /// pass are skipped if not yet reached. A panicking handler aborts the pass
    /// and the panic reaches the caller.
    pub fn trigger(&self, args: A) {
        let snapshot = self.registry.snapshot();
        tracing::trace!(event = %self.registry.label, listeners = snapshot.len(), "triggering");

        for listener in snapshot {
            if listener.is_once() {
                if !listener.retire() {
                    continue;
                }
                self.registry.remove_listener(&listener);
                listener.handler().call(&args);
                self.registry.remove_handler(listener.handler());
            } else if listener.is_live() {
                listener.handler().call(&args);
            }
        }
    }

    pub fn contains(&self, handler: &Handler<A>) -> bool {
        self.registry.contains(handler)
    }

    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listener_count() == 0
    }

    /// Removes every listener. Outstanding subscriptions become no-ops.
    pub fn clear(&self) {
        self.registry.clear();
    }
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("label", &self.registry.label)
            .field("listeners", &self.listener_count())
            .finish()
    }
}
