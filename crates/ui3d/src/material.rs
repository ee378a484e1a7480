//! Material handles and the three feedback slots of an interactable.

use serde::{Deserialize, Serialize};

/// Opaque reference to a material owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialHandle(pub u32);

/// Which feedback material an object should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialSlot {
    /// Not targeted.
    Idle,
    /// Under the pointer.
    Hovered,
    /// Pressed, or activated very recently.
    Pressed,
}

/// Materials for each feedback slot. Any slot may be left unassigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSlots {
    /// Material shown while idle.
    pub idle: Option<MaterialHandle>,
    /// Material shown while hovered.
    pub hovered: Option<MaterialHandle>,
    /// Material shown while pressed.
    pub pressed: Option<MaterialHandle>,
}

impl MaterialSlots {
    /// Slots with all three materials assigned.
    pub fn new(idle: MaterialHandle, hovered: MaterialHandle, pressed: MaterialHandle) -> Self {
        Self {
            idle: Some(idle),
            hovered: Some(hovered),
            pressed: Some(pressed),
        }
    }

    /// Material assigned to `slot`, if any.
    pub fn get(&self, slot: MaterialSlot) -> Option<MaterialHandle> {
        match slot {
            MaterialSlot::Idle => self.idle,
            MaterialSlot::Hovered => self.hovered,
            MaterialSlot::Pressed => self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_lookup() {
        let slots = MaterialSlots::new(MaterialHandle(1), MaterialHandle(2), MaterialHandle(3));
        assert_eq!(slots.get(MaterialSlot::Idle), Some(MaterialHandle(1)));
        assert_eq!(slots.get(MaterialSlot::Hovered), Some(MaterialHandle(2)));
        assert_eq!(slots.get(MaterialSlot::Pressed), Some(MaterialHandle(3)));
        assert_eq!(MaterialSlots::default().get(MaterialSlot::Pressed), None);
    }
}
