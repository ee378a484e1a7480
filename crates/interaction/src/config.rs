//! Authored settings for one interactable.

use crate::error::{InteractableError, Result};
use crate::mode::ActivationMode;
use interactables_core::{Rgba, WHITE};
use interactables_ui3d::MaterialSlots;
use serde::{Deserialize, Serialize};

/// Default alpha change per second for floating labels.
pub const DEFAULT_FADE_RATE: f32 = 4.0;

/// Per-object interaction settings as they appear in a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractableConfig {
    /// Text shown on the floating label.
    pub display_name: String,
    /// Longer description for UI that wants one.
    pub tooltip: String,
    /// How pointer input maps to transitions.
    pub mode: ActivationMode,
    /// Start once automatically on the first evaluation.
    pub start_active: bool,
    /// Let the player activate the object by touching it.
    pub touch_activates: bool,
    /// Label tint.
    pub label_color: Rgba,
    /// Label alpha change per second.
    pub label_fade_rate: f32,
    /// Keep the authored label offset and lean toward the camera instead of floating above.
    pub label_faces_pointer: bool,
    /// Feedback materials.
    pub materials: MaterialSlots,
}

impl Default for InteractableConfig {
    fn default() -> Self {
        Self {
            display_name: "Placeholder".to_string(),
            tooltip: String::new(),
            mode: ActivationMode::Press,
            start_active: false,
            touch_activates: false,
            label_color: WHITE,
            label_fade_rate: DEFAULT_FADE_RATE,
            label_faces_pointer: false,
            materials: MaterialSlots::default(),
        }
    }
}

impl InteractableConfig {
    /// Default settings under a display name.
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Builder: set the activation mode.
    pub fn with_mode(mut self, mode: ActivationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder: set the tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Builder: start once on the first evaluation.
    pub fn with_start_active(mut self, start_active: bool) -> Self {
        self.start_active = start_active;
        self
    }

    /// Builder: enable contact activation.
    pub fn with_touch_activates(mut self, touch_activates: bool) -> Self {
        self.touch_activates = touch_activates;
        self
    }

    /// Builder: set the feedback materials.
    pub fn with_materials(mut self, materials: MaterialSlots) -> Self {
        self.materials = materials;
        self
    }

    /// Builder: set label tint and fade rate.
    pub fn with_label_style(mut self, color: Rgba, fade_rate: f32) -> Self {
        self.label_color = color;
        self.label_fade_rate = fade_rate;
        self
    }

    /// Builder: lean the label toward the camera.
    pub fn with_label_faces_pointer(mut self, faces_pointer: bool) -> Self {
        self.label_faces_pointer = faces_pointer;
        self
    }

    /// Check values that would make the presentation misbehave.
    pub fn validate(&self) -> Result<()> {
        let rate = self.label_fade_rate;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(InteractableError::InvalidFadeRate(rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_authored_component() {
        let config = InteractableConfig::default();
        assert_eq!(config.display_name, "Placeholder");
        assert_eq!(config.label_color, WHITE);
        assert_eq!(config.label_fade_rate, 4.0);
        assert_eq!(config.mode, ActivationMode::Press);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fade_rate_must_be_positive() {
        let zero = InteractableConfig::default().with_label_style(WHITE, 0.0);
        assert_eq!(zero.validate(), Err(InteractableError::InvalidFadeRate(0.0)));

        let nan = InteractableConfig::default().with_label_style(WHITE, f32::NAN);
        assert!(matches!(nan.validate(), Err(InteractableError::InvalidFadeRate(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: InteractableConfig = serde_json::from_str(
            r#"{ "display_name": "Lamp", "mode": "toggle", "materials": { "pressed": 7 } }"#,
        )
        .unwrap();
        assert_eq!(config.display_name, "Lamp");
        assert_eq!(config.mode, ActivationMode::Toggle);
        assert_eq!(config.materials.pressed, Some(interactables_ui3d::MaterialHandle(7)));
        assert_eq!(config.materials.idle, None);
        assert_eq!(config.label_fade_rate, DEFAULT_FADE_RATE);
    }
}
