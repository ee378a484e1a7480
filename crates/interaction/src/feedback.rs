//! Material swap and floating label presentation.

use glam::Vec3;
use interactables_core::{ObjectId, Rgba};
use interactables_ui3d::{
    FloatingLabel, LabelPlacement, MaterialHandle, MaterialSlot, MaterialSlots, PresentationSink,
};

/// How long after an activation the pressed material stays up, in seconds.
pub const DEBOUNCE_WINDOW: f64 = 0.3;

/// Pick the feedback slot for the current step.
///
/// Pressed wins while the interaction is active and for strictly less than
/// [`DEBOUNCE_WINDOW`] after the last activation; then hover; then idle.
pub fn select_material(
    pressed: bool,
    last_activation: Option<f64>,
    now: f64,
    hovered: bool,
) -> MaterialSlot {
    let recently_activated = last_activation.is_some_and(|at| now - at < DEBOUNCE_WINDOW);
    if pressed || recently_activated {
        MaterialSlot::Pressed
    } else if hovered {
        MaterialSlot::Hovered
    } else {
        MaterialSlot::Idle
    }
}

/// Label tint, fade speed, and placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    /// Tint; its alpha is replaced by the fade alpha.
    pub color: Rgba,
    /// Alpha change per second.
    pub fade_rate: f32,
    /// Where the label sits relative to the object.
    pub placement: LabelPlacement,
}

/// Inputs for one presentation pass.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackFrame<'a> {
    /// Current time in seconds.
    pub now: f64,
    /// Step length in seconds.
    pub dt: f32,
    /// Pointer over the object this step.
    pub hovered: bool,
    /// State machine's pressed flag after this step's transitions.
    pub pressed: bool,
    /// Time of the last start-transition.
    pub last_activation: Option<f64>,
    /// Object position in world space.
    pub anchor: Vec3,
    /// Camera position, if a camera is active.
    pub camera_eye: Option<Vec3>,
    /// Text the label shows.
    pub display_name: &'a str,
}

/// Drives an object's material and optional label from its interaction state.
#[derive(Debug, Clone)]
pub struct FeedbackPresenter {
    object: ObjectId,
    materials: MaterialSlots,
    applied: Option<MaterialHandle>,
    label: Option<FloatingLabel>,
    style: LabelStyle,
}

impl FeedbackPresenter {
    /// Presenter without a label.
    pub fn new(object: ObjectId, materials: MaterialSlots, style: LabelStyle) -> Self {
        Self {
            object,
            materials,
            applied: None,
            label: None,
            style,
        }
    }

    /// Builder: attach a floating label.
    pub fn with_label(mut self, label: FloatingLabel) -> Self {
        self.label = Some(label);
        self
    }

    /// The attached label, if any.
    pub fn label(&self) -> Option<&FloatingLabel> {
        self.label.as_ref()
    }

    /// Material most recently sent to the sink.
    pub fn applied_material(&self) -> Option<MaterialHandle> {
        self.applied
    }

    /// Label styling.
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Update material and label for this step and push the changes to `sink`.
    ///
    /// A material is only sent when it differs from the one already applied. An
    /// unassigned slot keeps whatever is currently applied.
    pub fn present(&mut self, frame: &FeedbackFrame<'_>, sink: &mut dyn PresentationSink) -> MaterialSlot {
        let slot = select_material(frame.pressed, frame.last_activation, frame.now, frame.hovered);

        if let Some(material) = self.materials.get(slot) {
            if self.applied != Some(material) {
                sink.assign_material(self.object, material);
                self.applied = Some(material);
            }
        }

        if let Some(label) = self.label.as_mut() {
            label.place(frame.anchor, self.style.placement, frame.camera_eye);
            if let Some(eye) = frame.camera_eye {
                label.face(eye);
            }
            label.fade(frame.hovered, self.style.fade_rate, frame.dt);
            label.refresh(frame.display_name, self.style.color);
            sink.update_label(self.object, label.text());
        }

        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interactables_core::WHITE;
    use interactables_ui3d::{PresentationLog, UIComponent};

    const OBJECT: ObjectId = ObjectId(1);
    const IDLE: MaterialHandle = MaterialHandle(10);
    const HOVER: MaterialHandle = MaterialHandle(11);
    const PRESS: MaterialHandle = MaterialHandle(12);

    fn style(placement: LabelPlacement) -> LabelStyle {
        LabelStyle {
            color: [1.0, 0.5, 0.0, 1.0],
            fade_rate: 4.0,
            placement,
        }
    }

    fn frame(now: f64, hovered: bool, pressed: bool, last_activation: Option<f64>) -> FeedbackFrame<'static> {
        FeedbackFrame {
            now,
            dt: 0.125,
            hovered,
            pressed,
            last_activation,
            anchor: Vec3::ZERO,
            camera_eye: Some(Vec3::new(0.0, 0.0, 10.0)),
            display_name: "Switch",
        }
    }

    fn presenter() -> FeedbackPresenter {
        FeedbackPresenter::new(OBJECT, MaterialSlots::new(IDLE, HOVER, PRESS), style(LabelPlacement::Above))
    }

    #[test]
    fn pressed_beats_hover_beats_idle() {
        assert_eq!(select_material(true, None, 0.0, true), MaterialSlot::Pressed);
        assert_eq!(select_material(false, None, 0.0, true), MaterialSlot::Hovered);
        assert_eq!(select_material(false, None, 0.0, false), MaterialSlot::Idle);
    }

    #[test]
    fn debounce_window_is_exclusive() {
        assert_eq!(select_material(false, Some(1.0), 1.25, false), MaterialSlot::Pressed);
        assert_eq!(select_material(false, Some(0.0), 0.3, false), MaterialSlot::Idle);
        assert_eq!(select_material(false, Some(0.0), 0.3, true), MaterialSlot::Hovered);
    }

    #[test]
    fn debounce_expires_after_long_uptime() {
        let mut clock = interactables_core::SimClock::starting_at(1.0e6);
        let clicked = clock.now();
        for _ in 0..600 {
            clock.advance(1.0 / 60.0);
        }
        assert_eq!(
            select_material(false, Some(clicked), clock.now(), false),
            MaterialSlot::Idle
        );
    }

    #[test]
    fn steady_state_does_not_churn() {
        let mut presenter = presenter();
        let mut log = PresentationLog::new();

        for step in 0..10 {
            presenter.present(&frame(step as f64, true, false, None), &mut log);
        }

        assert_eq!(log.material(OBJECT), Some(HOVER));
        assert_eq!(log.assignment_count(OBJECT), 1);
    }

    #[test]
    fn switches_once_when_debounce_expires() {
        let mut presenter = presenter();
        let mut log = PresentationLog::new();

        presenter.present(&frame(0.0, true, false, Some(0.0)), &mut log);
        presenter.present(&frame(0.125, true, false, Some(0.0)), &mut log);
        assert_eq!(log.material(OBJECT), Some(PRESS));

        presenter.present(&frame(0.5, true, false, Some(0.0)), &mut log);
        presenter.present(&frame(0.625, true, false, Some(0.0)), &mut log);
        assert_eq!(log.material(OBJECT), Some(HOVER));
        assert_eq!(log.assignment_count(OBJECT), 2);
    }

    #[test]
    fn missing_slot_keeps_previous_material() {
        let materials = MaterialSlots {
            idle: Some(IDLE),
            hovered: None,
            pressed: Some(PRESS),
        };
        let mut presenter = FeedbackPresenter::new(OBJECT, materials, style(LabelPlacement::Above));
        let mut log = PresentationLog::new();

        presenter.present(&frame(0.0, false, false, None), &mut log);
        let slot = presenter.present(&frame(1.0, true, false, None), &mut log);

        assert_eq!(slot, MaterialSlot::Hovered);
        assert_eq!(log.material(OBJECT), Some(IDLE));
        assert_eq!(presenter.applied_material(), Some(IDLE));
    }

    #[test]
    fn no_label_means_no_label_updates() {
        let mut presenter = presenter();
        let mut log = PresentationLog::new();
        presenter.present(&frame(0.0, true, false, None), &mut log);
        assert!(log.label(OBJECT).is_none());
        assert!(presenter.label().is_none());
    }

    #[test]
    fn label_fades_in_and_out_with_hover() {
        let mut presenter =
            presenter().with_label(FloatingLabel::attach(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0)));
        let mut log = PresentationLog::new();

        presenter.present(&frame(0.0, true, false, None), &mut log);
        let label = log.label(OBJECT).unwrap();
        assert_eq!(label.text(), "Switch");
        assert_eq!(label.color, [1.0, 0.5, 0.0, 0.5]);
        assert_eq!(label.position(), Vec3::new(0.0, 2.0, 0.0));

        for step in 1..4 {
            presenter.present(&frame(step as f64, true, false, None), &mut log);
        }
        assert_eq!(log.label(OBJECT).unwrap().alpha(), 1.0);

        presenter.present(&frame(5.0, false, false, None), &mut log);
        assert_eq!(log.label(OBJECT).unwrap().alpha(), 0.5);
    }

    #[test]
    fn label_leans_toward_camera_when_configured() {
        let mut presenter = FeedbackPresenter::new(
            OBJECT,
            MaterialSlots::default(),
            LabelStyle {
                color: WHITE,
                fade_rate: 1.0,
                placement: LabelPlacement::TowardCamera,
            },
        )
        .with_label(FloatingLabel::attach(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0)));
        let mut log = PresentationLog::new();

        presenter.present(&frame(0.0, false, false, None), &mut log);
        let label = log.label(OBJECT).unwrap();
        assert!((label.position() - Vec3::new(0.0, 1.0, 1.0)).length() < 0.001);
        assert_eq!(log.assignment_count(OBJECT), 0);
    }
}
