//! Setup errors.

use interactables_core::ObjectId;
use thiserror::Error;

/// Errors raised while configuring or registering interactables.
#[derive(Debug, Error, PartialEq)]
pub enum InteractableError {
    /// Label fade rate is not a positive finite number.
    #[error("invalid label fade rate: {0}")]
    InvalidFadeRate(f32),

    /// Hit range is not a positive finite distance.
    #[error("invalid hit range: {0}")]
    InvalidHitRange(f32),

    /// An interactable with this object id is already registered.
    #[error("object already registered: {0}")]
    DuplicateObject(ObjectId),

    /// No interactable is registered under this object id.
    #[error("unknown object: {0}")]
    UnknownObject(ObjectId),
}

/// Result alias for interactable setup.
pub type Result<T> = std::result::Result<T, InteractableError>;
