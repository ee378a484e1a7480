#![warn(missing_docs)]
//! Interaction behavior for world objects.
//!
//! Each step an [`Interactable`] decides whether the pointer is over it, turns
//! pointer input into start and end transitions according to its
//! [`ActivationMode`], and pushes material and label feedback to a
//! [`PresentationSink`](interactables_ui3d::PresentationSink). Physical contact with
//! the local player is a second way to start an interaction.
//!
//! Everything an interactable reads during a step arrives through a [`StepContext`].
//!
//! ```rust
//! use glam::Vec3;
//! use interactables_core::{ObjectId, SimClock};
//! use interactables_input::PointerSnapshot;
//! use interactables_interaction::{ActivationMode, Interactable, InteractableConfig, StepContext};
//! use interactables_physics::ColliderWorld;
//! use interactables_ui3d::NullSink;
//!
//! let config = InteractableConfig::named("Lamp")
//!     .with_mode(ActivationMode::Toggle)
//!     .with_start_active(true);
//! let mut lamp = Interactable::new(ObjectId(1), Vec3::ZERO, &config).unwrap();
//!
//! let world = ColliderWorld::new();
//! let clock = SimClock::new();
//! let ctx = StepContext::new(&clock, PointerSnapshot::default(), &world);
//! lamp.evaluate(&ctx, &mut NullSink);
//! assert!(lamp.is_pressed());
//! ```

pub mod config;
pub mod contact;
pub mod context;
pub mod error;
pub mod feedback;
pub mod hooks;
pub mod interactable;
pub mod mode;
pub mod set;
pub mod state_machine;

pub use config::{InteractableConfig, DEFAULT_FADE_RATE};
pub use contact::{ContactTrigger, CONTACT_COOLDOWN};
pub use context::StepContext;
pub use error::{InteractableError, Result};
pub use feedback::{select_material, FeedbackFrame, FeedbackPresenter, LabelStyle, DEBOUNCE_WINDOW};
pub use hit_test::{HitTester, DEFAULT_HIT_RANGE};
pub use hooks::{InteractionHooks, Listener, ListenerId, Listeners, NoopHooks, TracingHooks};
pub use interactable::Interactable;
pub use mode::ActivationMode;
pub use set::InteractableSet;
pub use state_machine::{InteractionStateMachine, StepReport};
