//! 3D UI Components
//!
//! World-space elements attached to interactable objects.

pub mod billboard;
pub mod label;
pub mod text3d;

pub use billboard::y_axis_facing;
pub use label::{FloatingLabel, LabelPlacement};
pub use text3d::Text3D;

use glam::{Quat, Vec3};

/// Base trait for all 3D UI components
pub trait UIComponent {
    /// Get the world position of this component
    fn position(&self) -> Vec3;

    /// Set the world position of this component
    fn set_position(&mut self, position: Vec3);
}

/// Transform in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// World position.
    pub position: Vec3,
    /// World orientation.
    pub rotation: Quat,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform3D {
    /// Transform at `position` with identity rotation.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}
