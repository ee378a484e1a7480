//! Output side of the feedback loop: where material swaps and label updates go.

use crate::components::Text3D;
use crate::material::MaterialHandle;
use interactables_core::ObjectId;
use std::collections::BTreeMap;

/// Receives presentation changes. Both operations are fire-and-forget.
pub trait PresentationSink {
    /// Make `object` render with `material`.
    fn assign_material(&mut self, object: ObjectId, material: MaterialHandle);

    /// Replace the drawn state of the label attached to `object`.
    fn update_label(&mut self, object: ObjectId, label: &Text3D);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn assign_material(&mut self, _object: ObjectId, _material: MaterialHandle) {}

    fn update_label(&mut self, _object: ObjectId, _label: &Text3D) {}
}

/// Sink that remembers the latest state per object, for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct PresentationLog {
    materials: BTreeMap<ObjectId, MaterialHandle>,
    assignments: BTreeMap<ObjectId, u32>,
    labels: BTreeMap<ObjectId, Text3D>,
}

impl PresentationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Material most recently assigned to `object`.
    pub fn material(&self, object: ObjectId) -> Option<MaterialHandle> {
        self.materials.get(&object).copied()
    }

    /// How many times a material was assigned to `object`.
    pub fn assignment_count(&self, object: ObjectId) -> u32 {
        self.assignments.get(&object).copied().unwrap_or(0)
    }

    /// Latest label state for `object`.
    pub fn label(&self, object: ObjectId) -> Option<&Text3D> {
        self.labels.get(&object)
    }
}

impl PresentationSink for PresentationLog {
    fn assign_material(&mut self, object: ObjectId, material: MaterialHandle) {
        self.materials.insert(object, material);
        *self.assignments.entry(object).or_insert(0) += 1;
    }

    fn update_label(&mut self, object: ObjectId, label: &Text3D) {
        match self.labels.get_mut(&object) {
            Some(existing) => existing.clone_from(label),
            None => {
                self.labels.insert(object, label.clone());
            }
        }
    }
}
