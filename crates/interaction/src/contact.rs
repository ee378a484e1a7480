//! Physical-contact activation gate.

use interactables_core::ActorId;

/// Minimum time between two contact activations, in seconds.
pub const CONTACT_COOLDOWN: f64 = 1.0;

/// Decides whether a physical contact should activate an interactable.
///
/// Only the local player counts, and contacts arriving within the cooldown of the
/// last accepted one are dropped. The cooldown is stamped on acceptance only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactTrigger {
    enabled: bool,
    cooldown: f64,
    last_trigger: Option<f64>,
}

impl Default for ContactTrigger {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ContactTrigger {
    /// Trigger with the default cooldown.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            cooldown: CONTACT_COOLDOWN,
            last_trigger: None,
        }
    }

    /// Builder: override the cooldown.
    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = cooldown.max(0.0);
        self
    }

    /// Whether contacts activate at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Time of the last accepted contact.
    pub fn last_trigger(&self) -> Option<f64> {
        self.last_trigger
    }

    /// Forget the last accepted contact.
    pub fn clear(&mut self) {
        self.last_trigger = None;
    }

    /// Returns true if `actor` touching the object at `now` should activate it.
    pub fn admit(&mut self, now: f64, actor: ActorId, player: Option<ActorId>) -> bool {
        if !self.enabled {
            return false;
        }
        if self.last_trigger.is_some_and(|at| now - at < self.cooldown) {
            tracing::trace!(%actor, now, "contact ignored during cooldown");
            return false;
        }
        if player != Some(actor) {
            return false;
        }
        self.last_trigger = Some(now);
        true
    }
}
