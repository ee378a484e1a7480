//! Pressed/unpressed state machine driven by hover and pointer input.

use crate::hooks::{InteractionHooks, ListenerId, Listeners, NoopHooks};
use crate::mode::ActivationMode;
use interactables_core::ActorId;
use interactables_input::PointerSnapshot;
use std::fmt;
use tracing::debug;

/// Transitions performed during one evaluation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Start-transitions performed.
    pub started: u32,
    /// End-transitions performed.
    pub ended: u32,
}

impl StepReport {
    /// Returns true if nothing happened.
    pub fn is_empty(&self) -> bool {
        self.started == 0 && self.ended == 0
    }

    /// Add another report's counts to this one.
    pub fn merge(&mut self, other: StepReport) {
        self.started += other.started;
        self.ended += other.ended;
    }
}

/// Owns the pressed flag and applies the activation mode to each step's input.
///
/// `pressed` is true exactly between a start-transition and its matching
/// end-transition. A start-transition stamps the activation time, runs the
/// started hook, notifies started listeners, and only then commits `pressed = true`;
/// an end-transition mirrors that with `pressed = false`.
pub struct InteractionStateMachine {
    mode: ActivationMode,
    pressed: bool,
    last_activation: Option<f64>,
    start_active: bool,
    has_run: bool,
    hooks: Box<dyn InteractionHooks>,
    started: Listeners,
    ended: Listeners,
}

impl InteractionStateMachine {
    /// Idle machine with no-op hooks.
    pub fn new(mode: ActivationMode) -> Self {
        Self {
            mode,
            pressed: false,
            last_activation: None,
            start_active: false,
            has_run: false,
            hooks: Box::new(NoopHooks),
            started: Listeners::new(),
            ended: Listeners::new(),
        }
    }

    /// Builder: start an interaction automatically on the first evaluation.
    pub fn with_start_active(mut self, start_active: bool) -> Self {
        self.start_active = start_active;
        self
    }

    /// Builder: replace the lifecycle hooks.
    pub fn with_hooks(mut self, hooks: impl InteractionHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Activation mode.
    pub fn mode(&self) -> ActivationMode {
        self.mode
    }

    /// Whether an interaction is in progress.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Time of the most recent start-transition, if there has been one.
    pub fn last_activation(&self) -> Option<f64> {
        self.last_activation
    }

    /// Subscribe to start-transitions.
    pub fn on_started<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Option<ActorId>) -> anyhow::Result<()> + 'static,
    {
        self.started.subscribe(listener)
    }

    /// Subscribe to end-transitions.
    pub fn on_ended<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Option<ActorId>) -> anyhow::Result<()> + 'static,
    {
        self.ended.subscribe(listener)
    }

    /// Remove a start listener.
    pub fn unsubscribe_started(&mut self, id: ListenerId) -> bool {
        self.started.unsubscribe(id)
    }

    /// Remove an end listener.
    pub fn unsubscribe_ended(&mut self, id: ListenerId) -> bool {
        self.ended.unsubscribe(id)
    }

    /// Apply one step of input.
    ///
    /// `player` is used as the invoker for pointer-driven transitions.
    pub fn evaluate(
        &mut self,
        now: f64,
        hovered: bool,
        pointer: &PointerSnapshot,
        player: Option<ActorId>,
    ) -> StepReport {
        let mut report = StepReport::default();

        if !self.has_run {
            self.has_run = true;
            if std::mem::take(&mut self.start_active) {
                debug!("starting active");
                report.merge(self.start(now, None));
            }
        }

        if hovered && pointer.just_pressed {
            match self.mode {
                ActivationMode::Press => {
                    report.merge(self.start(now, player));
                    report.merge(self.end(player));
                }
                ActivationMode::Toggle => {
                    if self.pressed {
                        report.merge(self.end(player));
                    } else {
                        report.merge(self.start(now, player));
                    }
                }
                ActivationMode::Hold => {
                    if pointer.held && !self.pressed {
                        report.merge(self.start(now, player));
                    }
                }
            }
        } else if self.mode == ActivationMode::Hold
            && (!hovered || !pointer.held)
            && self.pressed
        {
            report.merge(self.end(player));
        }

        report
    }

    /// Start-transition. Also the entry point for contact activation.
    pub fn start(&mut self, now: f64, invoker: Option<ActorId>) -> StepReport {
        self.last_activation = Some(now);
        self.hooks.on_interaction_started(invoker);
        self.started.notify("started", invoker);
        self.pressed = true;
        debug!(invoker = ?invoker, mode = %self.mode, "interaction started");
        StepReport {
            started: 1,
            ended: 0,
        }
    }

    /// End-transition.
    pub fn end(&mut self, invoker: Option<ActorId>) -> StepReport {
        self.hooks.on_interaction_ended(invoker);
        self.ended.notify("ended", invoker);
        self.pressed = false;
        debug!(invoker = ?invoker, mode = %self.mode, "interaction ended");
        StepReport {
            started: 0,
            ended: 1,
        }
    }

    /// End the current interaction if one is in progress.
    pub fn reset(&mut self, invoker: Option<ActorId>) -> StepReport {
        if self.pressed {
            self.end(invoker)
        } else {
            StepReport::default()
        }
    }
}

impl fmt::Debug for InteractionStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionStateMachine")
            .field("mode", &self.mode)
            .field("pressed", &self.pressed)
            .field("last_activation", &self.last_activation)
            .field("start_active", &self.start_active)
            .field("has_run", &self.has_run)
            .field("started", &self.started)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}
