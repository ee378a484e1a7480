//! Collection of interactables evaluated together each step.

use crate::context::StepContext;
use crate::error::{InteractableError, Result};
use crate::interactable::Interactable;
use crate::state_machine::StepReport;
use interactables_core::ObjectId;
use interactables_physics::{ColliderWorld, ContactEvent};
use interactables_ui3d::PresentationSink;
use std::collections::BTreeMap;

/// Interactables keyed by object, evaluated in ascending id order.
///
/// Also remembers which object owns each child collider, so a contact with a
/// child reaches the interactable it belongs to.
#[derive(Debug, Default)]
pub struct InteractableSet {
    entries: BTreeMap<ObjectId, Interactable>,
    owners: BTreeMap<ObjectId, ObjectId>,
}

impl InteractableSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interactable without touching any colliders.
    ///
    /// Fails if the object is already registered, either on its own or as a child
    /// collider of another interactable.
    pub fn insert(&mut self, interactable: Interactable) -> Result<()> {
        let object = interactable.object();
        if self.owners.contains_key(&object) {
            return Err(InteractableError::DuplicateObject(object));
        }
        self.owners.insert(object, object);
        self.entries.insert(object, interactable);
        Ok(())
    }

    /// Add an interactable and tag its colliders in `world`. Returns how many were tagged.
    ///
    /// Each collider belongs to at most one interactable: the object and its children
    /// must not already be claimed. Nothing is tagged when registration fails.
    pub fn register(&mut self, world: &mut ColliderWorld, interactable: Interactable) -> Result<usize> {
        let object = interactable.object();
        if self.owners.contains_key(&object) {
            return Err(InteractableError::DuplicateObject(object));
        }
        let children: Vec<ObjectId> = world.children_of(object).map(|c| c.object).collect();
        if let Some(&claimed) = children.iter().find(|child| self.owners.contains_key(child)) {
            return Err(InteractableError::DuplicateObject(claimed));
        }

        let tagged = interactable.register(world);
        self.insert(interactable)?;
        for child in children {
            self.owners.insert(child, object);
        }
        Ok(tagged)
    }

    /// Remove and return an interactable.
    pub fn remove(&mut self, object: ObjectId) -> Result<Interactable> {
        let removed = self
            .entries
            .remove(&object)
            .ok_or(InteractableError::UnknownObject(object))?;
        self.owners.retain(|_, owner| *owner != object);
        Ok(removed)
    }

    /// Look up an interactable.
    pub fn get(&self, object: ObjectId) -> Option<&Interactable> {
        self.entries.get(&object)
    }

    /// Look up an interactable mutably.
    pub fn get_mut(&mut self, object: ObjectId) -> Option<&mut Interactable> {
        self.entries.get_mut(&object)
    }

    /// Interactable that owns `collider`, which may be its own or a child's.
    pub fn owner_of(&self, collider: ObjectId) -> Option<ObjectId> {
        self.owners.get(&collider).copied()
    }

    /// Number of interactables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Interactable> {
        self.entries.values()
    }

    /// Evaluate every interactable against the same context.
    ///
    /// Returns the objects that had at least one transition this step.
    pub fn update(
        &mut self,
        ctx: &StepContext<'_>,
        sink: &mut dyn PresentationSink,
    ) -> Vec<(ObjectId, StepReport)> {
        let mut changed = Vec::new();
        for (object, interactable) in &mut self.entries {
            let report = interactable.evaluate(ctx, sink);
            if !report.is_empty() {
                changed.push((*object, report));
            }
        }
        changed
    }

    /// Route contact notifications to their owners. Returns the objects that activated.
    pub fn dispatch_contacts(&mut self, events: &[ContactEvent], ctx: &StepContext<'_>) -> Vec<ObjectId> {
        let mut activated = Vec::new();
        for event in events {
            let Some(owner) = self.owner_of(event.object) else {
                continue;
            };
            let Some(interactable) = self.entries.get_mut(&owner) else {
                continue;
            };
            if interactable.on_contact(event.actor, ctx) {
                activated.push(owner);
            }
        }
        activated
    }
}
