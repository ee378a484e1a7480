//! Activation modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How pointer input maps to start/end transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Click-through: one press starts and immediately ends the interaction.
    #[default]
    Press,
    /// Sticky: each press flips between active and idle.
    Toggle,
    /// Active for as long as the button stays held over the object.
    Hold,
}

impl fmt::Display for ActivationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Press => "press",
            Self::Toggle => "toggle",
            Self::Hold => "hold",
        };
        f.write_str(name)
    }
}
