//! 3D Text Component

use super::{Transform3D, UIComponent};
use glam::{Quat, Vec3};
use interactables_core::{Rgba, WHITE};

/// Text placed in 3D world space
#[derive(Debug, Clone, PartialEq)]
pub struct Text3D {
    /// World transform of the text
    pub transform: Transform3D,

    /// Text content
    pub text: String,

    /// Text color (RGBA)
    pub color: Rgba,
}

impl Default for Text3D {
    fn default() -> Self {
        Self {
            transform: Transform3D::default(),
            text: String::new(),
            color: WHITE,
        }
    }
}

impl Text3D {
    /// Create a new Text3D component
    pub fn new(position: Vec3, text: impl Into<String>) -> Self {
        Self {
            transform: Transform3D::new(position),
            text: text.into(),
            ..Default::default()
        }
    }

    /// Update the text content
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get a reference to the text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current orientation
    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    /// Set orientation
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }

    /// Alpha channel of the color
    pub fn alpha(&self) -> f32 {
        self.color[3]
    }
}

impl UIComponent for Text3D {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }
}
