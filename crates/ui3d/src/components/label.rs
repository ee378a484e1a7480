//! Floating name label that hovers near an interactable object.

use super::billboard::y_axis_facing;
use super::text3d::Text3D;
use super::UIComponent;
use glam::Vec3;
use interactables_core::Rgba;

/// Where a floating label sits relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Keep the authored offset and lean one unit toward the camera.
    TowardCamera,
    /// Straight above the anchor at the authored distance.
    Above,
}

impl LabelPlacement {
    /// Placement for the `faces_pointer` flag of an interactable.
    pub fn from_faces_pointer(faces_pointer: bool) -> Self {
        if faces_pointer {
            Self::TowardCamera
        } else {
            Self::Above
        }
    }
}

/// A text label that follows an anchor, turns toward the camera, and fades in and out.
///
/// The offset and distance to the anchor are captured once from the label's
/// authored placement and never change afterwards.
#[derive(Debug, Clone)]
pub struct FloatingLabel {
    text: Text3D,
    base_offset: Vec3,
    anchor_distance: f32,
    alpha: f32,
}

impl FloatingLabel {
    /// Attach a label authored at `label_position` to an object anchored at `anchor`.
    ///
    /// The label starts fully transparent.
    pub fn attach(anchor: Vec3, label_position: Vec3) -> Self {
        let mut text = Text3D::new(label_position, "");
        text.color[3] = 0.0;
        Self {
            text,
            base_offset: label_position - anchor,
            anchor_distance: anchor.distance(label_position),
            alpha: 0.0,
        }
    }

    /// Offset from the anchor captured at attach time.
    pub fn base_offset(&self) -> Vec3 {
        self.base_offset
    }

    /// Distance from the anchor captured at attach time.
    pub fn anchor_distance(&self) -> f32 {
        self.anchor_distance
    }

    /// Current fade alpha in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The text element as it should be drawn.
    pub fn text(&self) -> &Text3D {
        &self.text
    }

    /// Move the label for the current anchor and camera.
    ///
    /// Without a camera, `TowardCamera` falls back to the plain authored offset.
    pub fn place(&mut self, anchor: Vec3, placement: LabelPlacement, camera: Option<Vec3>) {
        let position = match placement {
            LabelPlacement::TowardCamera => {
                let lean = camera
                    .map(|eye| (eye - anchor).normalize_or_zero())
                    .unwrap_or(Vec3::ZERO);
                anchor + self.base_offset + lean
            }
            LabelPlacement::Above => anchor + Vec3::Y * self.anchor_distance,
        };
        self.text.set_position(position);
    }

    /// Turn the label toward the camera about the vertical axis.
    pub fn face(&mut self, camera: Vec3) {
        if let Some(rotation) = y_axis_facing(self.text.position(), camera) {
            self.text.set_rotation(rotation);
        }
    }

    /// Step the fade toward opaque (`visible`) or transparent by `rate * dt`.
    pub fn fade(&mut self, visible: bool, rate: f32, dt: f32) -> f32 {
        let step = (rate * dt).max(0.0);
        self.alpha = if visible {
            (self.alpha + step).min(1.0)
        } else {
            (self.alpha - step).max(0.0)
        };
        self.alpha
    }

    /// Refresh content and tint; the tint's alpha is replaced by the fade alpha.
    pub fn refresh(&mut self, content: &str, color: Rgba) {
        if self.text.text() != content {
            self.text.set_text(content);
        }
        self.text.color = [color[0], color[1], color[2], self.alpha];
    }
}

impl UIComponent for FloatingLabel {
    fn position(&self) -> Vec3 {
        self.text.position()
    }

    fn set_position(&mut self, position: Vec3) {
        self.text.set_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_captures_offset_once() {
        let anchor = Vec3::new(1.0, 0.0, 0.0);
        let label = FloatingLabel::attach(anchor, Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(label.base_offset(), Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(label.anchor_distance(), 2.0);
        assert_eq!(label.alpha(), 0.0);
    }

    #[test]
    fn above_placement_uses_anchor_distance() {
        let mut label = FloatingLabel::attach(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0));
        label.place(Vec3::new(5.0, 0.0, 0.0), LabelPlacement::Above, None);
        assert_eq!(label.position(), Vec3::new(5.0, 2.0, 0.0));
    }

    #[test]
    fn toward_camera_leans_one_unit() {
        let mut label = FloatingLabel::attach(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        label.place(
            Vec3::ZERO,
            LabelPlacement::TowardCamera,
            Some(Vec3::new(10.0, 0.0, 0.0)),
        );
        assert!((label.position() - Vec3::new(1.0, 1.0, 0.0)).length() < 0.001);

        label.place(Vec3::ZERO, LabelPlacement::TowardCamera, None);
        assert_eq!(label.position(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn fade_is_rate_limited_and_clamped() {
        let mut label = FloatingLabel::attach(Vec3::ZERO, Vec3::Y);
        assert_eq!(label.fade(true, 4.0, 0.125), 0.5);
        assert_eq!(label.fade(true, 4.0, 0.5), 1.0);
        assert_eq!(label.fade(false, 4.0, 0.125), 0.5);
        assert_eq!(label.fade(false, 4.0, 10.0), 0.0);
    }

    #[test]
    fn refresh_substitutes_alpha() {
        let mut label = FloatingLabel::attach(Vec3::ZERO, Vec3::Y);
        label.fade(true, 1.0, 0.25);
        label.refresh("Lever", [0.2, 0.4, 0.6, 1.0]);
        assert_eq!(label.text().text(), "Lever");
        assert_eq!(label.text().color, [0.2, 0.4, 0.6, 0.25]);
    }

    #[test]
    fn face_keeps_rotation_when_camera_overhead() {
        let mut label = FloatingLabel::attach(Vec3::ZERO, Vec3::Y);
        label.face(Vec3::new(4.0, 1.0, 0.0));
        let turned = label.text().rotation();
        label.face(Vec3::new(0.0, 9.0, 0.0));
        assert_eq!(label.text().rotation(), turned);
    }

    #[test]
    fn placement_from_flag() {
        assert_eq!(
            LabelPlacement::from_faces_pointer(true),
            LabelPlacement::TowardCamera
        );
        assert_eq!(LabelPlacement::from_faces_pointer(false), LabelPlacement::Above);
    }
}
