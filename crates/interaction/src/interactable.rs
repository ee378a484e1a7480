//! A world object that reacts to the pointer and to contact.

use crate::config::InteractableConfig;
use crate::context::StepContext;
use crate::contact::ContactTrigger;
use crate::error::{InteractableError, Result};
use crate::feedback::{FeedbackFrame, FeedbackPresenter, LabelStyle};
use crate::hit_test::HitTester;
use crate::hooks::{InteractionHooks, ListenerId};
use crate::mode::ActivationMode;
use crate::state_machine::{InteractionStateMachine, StepReport};
use glam::Vec3;
use interactables_core::{ActorId, ObjectId};
use interactables_physics::ColliderWorld;
use interactables_ui3d::{FloatingLabel, LabelPlacement, PresentationSink};
use tracing::debug;

/// One interactable object: hover detection, activation state, feedback and contact
/// activation, all owned together.
#[derive(Debug)]
pub struct Interactable {
    object: ObjectId,
    anchor: Vec3,
    display_name: String,
    tooltip: String,
    hit_tester: HitTester,
    machine: InteractionStateMachine,
    presenter: FeedbackPresenter,
    contact: ContactTrigger,
}

impl Interactable {
    /// Build an interactable for `object` positioned at `anchor`.
    pub fn new(object: ObjectId, anchor: Vec3, config: &InteractableConfig) -> Result<Self> {
        config.validate()?;

        let style = LabelStyle {
            color: config.label_color,
            fade_rate: config.label_fade_rate,
            placement: LabelPlacement::from_faces_pointer(config.label_faces_pointer),
        };

        Ok(Self {
            object,
            anchor,
            display_name: config.display_name.clone(),
            tooltip: config.tooltip.clone(),
            hit_tester: HitTester::new(object),
            machine: InteractionStateMachine::new(config.mode)
                .with_start_active(config.start_active),
            presenter: FeedbackPresenter::new(object, config.materials, style),
            contact: ContactTrigger::new(config.touch_activates),
        })
    }

    /// Builder: attach a floating label authored at `label_position`.
    pub fn with_label(mut self, label_position: Vec3) -> Self {
        self.presenter = self
            .presenter
            .with_label(FloatingLabel::attach(self.anchor, label_position));
        self
    }

    /// Builder: install the object's own transition hooks.
    pub fn with_hooks(mut self, hooks: impl InteractionHooks + 'static) -> Self {
        self.machine = self.machine.with_hooks(hooks);
        self
    }

    /// Builder: change the pointer picking distance.
    pub fn with_hit_range(mut self, range: f32) -> Result<Self> {
        if !range.is_finite() || range <= 0.0 {
            return Err(InteractableError::InvalidHitRange(range));
        }
        self.hit_tester = self.hit_tester.with_range(range);
        Ok(self)
    }

    /// Builder: override the contact cooldown.
    pub fn with_contact_cooldown(mut self, cooldown: f64) -> Self {
        self.contact = self.contact.with_cooldown(cooldown);
        self
    }

    /// Tag the object's colliders so the pointer can pick them. Returns how many were tagged.
    pub fn register(&self, world: &mut ColliderWorld) -> usize {
        let tagged = self.hit_tester.register(world);
        if tagged == 0 {
            debug!(object = %self.object, "no collider to tag");
        }
        tagged
    }

    /// Object this interactable belongs to.
    pub fn object(&self) -> ObjectId {
        self.object
    }

    /// Current world position.
    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    /// Move the object; the label follows on the next evaluation.
    pub fn set_anchor(&mut self, anchor: Vec3) {
        self.anchor = anchor;
    }

    /// Label text.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Tooltip text.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Activation mode.
    pub fn mode(&self) -> ActivationMode {
        self.machine.mode()
    }

    /// Whether an interaction is in progress.
    pub fn is_pressed(&self) -> bool {
        self.machine.is_pressed()
    }

    /// Time of the last start-transition.
    pub fn last_activation(&self) -> Option<f64> {
        self.machine.last_activation()
    }

    /// Whether touching the object can activate it.
    pub fn touch_activates(&self) -> bool {
        self.contact.is_enabled()
    }

    /// Feedback state, for inspection.
    pub fn presenter(&self) -> &FeedbackPresenter {
        &self.presenter
    }

    /// Subscribe to start-transitions.
    pub fn on_started<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Option<ActorId>) -> anyhow::Result<()> + 'static,
    {
        self.machine.on_started(listener)
    }

    /// Subscribe to end-transitions.
    pub fn on_ended<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Option<ActorId>) -> anyhow::Result<()> + 'static,
    {
        self.machine.on_ended(listener)
    }

    /// Remove a start listener.
    pub fn unsubscribe_started(&mut self, id: ListenerId) -> bool {
        self.machine.unsubscribe_started(id)
    }

    /// Remove an end listener.
    pub fn unsubscribe_ended(&mut self, id: ListenerId) -> bool {
        self.machine.unsubscribe_ended(id)
    }

    /// Run one step: hover, then transitions, then presentation.
    pub fn evaluate(&mut self, ctx: &StepContext<'_>, sink: &mut dyn PresentationSink) -> StepReport {
        let _span = tracing::debug_span!("interactable", object = %self.object).entered();

        let hovered = self.hit_tester.is_hovered(ctx);
        let report = self.machine.evaluate(ctx.now, hovered, &ctx.pointer, ctx.player);

        let frame = FeedbackFrame {
            now: ctx.now,
            dt: ctx.dt,
            hovered,
            pressed: self.machine.is_pressed(),
            last_activation: self.machine.last_activation(),
            anchor: self.anchor,
            camera_eye: ctx.camera_eye(),
            display_name: &self.display_name,
        };
        self.presenter.present(&frame, sink);

        report
    }

    /// `actor` started touching the object. Returns true if that activated it.
    pub fn on_contact(&mut self, actor: ActorId, ctx: &StepContext<'_>) -> bool {
        if !self.contact.admit(ctx.now, actor, ctx.player) {
            return false;
        }
        debug!(object = %self.object, %actor, "contact activation");
        self.machine.start(ctx.now, Some(actor));
        true
    }

    /// End an interaction in progress, such as one started by contact.
    pub fn reset(&mut self, invoker: Option<ActorId>) -> StepReport {
        self.machine.reset(invoker)
    }
}
