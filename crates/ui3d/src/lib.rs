#![warn(missing_docs)]
//! World-space presentation for interactable objects.
//!
//! This crate models what an interactable shows: the material for its current
//! feedback slot and an optional floating label that follows the object, turns toward
//! the camera, and fades with hover. Drawing is left to whatever implements
//! [`PresentationSink`].
//!
//! # Example
//!
//! ```rust
//! use glam::Vec3;
//! use interactables_core::ObjectId;
//! use interactables_ui3d::{FloatingLabel, LabelPlacement, PresentationLog, PresentationSink};
//!
//! let mut label = FloatingLabel::attach(Vec3::ZERO, Vec3::new(0.0, 1.5, 0.0));
//! label.place(Vec3::ZERO, LabelPlacement::Above, None);
//! label.fade(true, 4.0, 0.1);
//! label.refresh("Lever", [1.0, 1.0, 1.0, 1.0]);
//!
//! let mut sink = PresentationLog::new();
//! sink.update_label(ObjectId(1), label.text());
//! assert_eq!(sink.label(ObjectId(1)).unwrap().text(), "Lever");
//! ```

pub mod components;
pub mod material;
pub mod sink;

// Re-export commonly used types
pub use components::{y_axis_facing, FloatingLabel, LabelPlacement, Text3D, Transform3D, UIComponent};
pub use material::{MaterialHandle, MaterialSlot, MaterialSlots};
pub use sink::{NullSink, PresentationLog, PresentationSink};
