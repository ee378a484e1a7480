//! Lifecycle hooks and external listeners.
//!
//! Hooks are the object's own reaction to an interaction (a door opening, a lamp
//! switching). Listeners are everyone else. On every transition the hook runs first,
//! then listeners in registration order.

use interactables_core::{ActorId, ObjectId};
use std::fmt;
use tracing::{info, warn};

/// Per-object-type reaction to interactions. Both methods default to no-ops.
///
/// `invoker` is `None` for activations no actor caused (for example `start_active`).
pub trait InteractionHooks {
    /// Called when an interaction starts, before listeners are notified.
    fn on_interaction_started(&mut self, invoker: Option<ActorId>) {
        let _ = invoker;
    }

    /// Called when an interaction ends, before listeners are notified.
    fn on_interaction_ended(&mut self, invoker: Option<ActorId>) {
        let _ = invoker;
    }
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl InteractionHooks for NoopHooks {}

/// Hooks that log every transition at `info` level.
#[derive(Debug, Clone)]
pub struct TracingHooks {
    object: ObjectId,
    name: String,
}

impl TracingHooks {
    /// Log transitions of `object` under `name`.
    pub fn new(object: ObjectId, name: impl Into<String>) -> Self {
        Self {
            object,
            name: name.into(),
        }
    }
}

impl InteractionHooks for TracingHooks {
    fn on_interaction_started(&mut self, invoker: Option<ActorId>) {
        info!(object = %self.object, name = %self.name, invoker = ?invoker, "interaction started");
    }

    fn on_interaction_ended(&mut self, invoker: Option<ActorId>) {
        info!(object = %self.object, name = %self.name, invoker = ?invoker, "interaction ended");
    }
}

/// External callback for one transition kind.
pub type Listener = Box<dyn FnMut(Option<ActorId>) -> anyhow::Result<()>>;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Ordered list of listeners for one transition kind.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl Listeners {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener; it runs after every listener subscribed before it.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Option<ActorId>) -> anyhow::Result<()> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call every listener in order. A failing listener is logged and skipped;
    /// the rest still run. Returns how many failed.
    pub fn notify(&mut self, event: &'static str, invoker: Option<ActorId>) -> usize {
        let mut failures = 0;
        for (id, listener) in &mut self.entries {
            if let Err(err) = listener(invoker) {
                failures += 1;
                warn!(listener = ?id, event, "interaction listener failed: {err:#}");
            }
        }
        failures
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
