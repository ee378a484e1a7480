//! End-to-end interaction scenarios through `Interactable::evaluate`.

use glam::Vec3;
use interactables_camera::Camera;
use interactables_core::{ActorId, ObjectId, SimClock};
use interactables_input::PointerSnapshot;
use interactables_interaction::{
    ActivationMode, Interactable, InteractableConfig, InteractableSet, InteractionHooks, StepContext,
};
use interactables_physics::{Aabb, Collider, ColliderWorld};
use interactables_ui3d::{MaterialHandle, MaterialSlots, PresentationLog};
use std::cell::RefCell;
use std::rc::Rc;

const SWITCH: ObjectId = ObjectId(1);
const PLAYER: ActorId = ActorId(1);
const DT: f32 = 1.0 / 20.0;

type Journal = Rc<RefCell<Vec<String>>>;

struct JournalHooks(Journal);

impl InteractionHooks for JournalHooks {
    fn on_interaction_started(&mut self, _invoker: Option<ActorId>) {
        self.0.borrow_mut().push("hook:started".into());
    }

    fn on_interaction_ended(&mut self, _invoker: Option<ActorId>) {
        self.0.borrow_mut().push("hook:ended".into());
    }
}

struct Harness {
    world: ColliderWorld,
    camera: Camera,
    clock: SimClock,
    log: PresentationLog,
    set: InteractableSet,
}

impl Harness {
    fn new(config: InteractableConfig, journal: &Journal) -> Self {
        let mut world = ColliderWorld::new();
        world.insert(Collider::new(SWITCH, Aabb::from_center_size(Vec3::ZERO, Vec3::ONE)));

        let mut switch = Interactable::new(SWITCH, Vec3::ZERO, &config)
            .unwrap()
            .with_label(Vec3::new(0.0, 1.0, 0.0))
            .with_hooks(JournalHooks(Rc::clone(journal)));
        {
            let journal = Rc::clone(journal);
            switch.on_started(move |invoker| {
                journal.borrow_mut().push(format!("started:{invoker:?}"));
                Ok(())
            });
        }
        {
            let journal = Rc::clone(journal);
            switch.on_ended(move |invoker| {
                journal.borrow_mut().push(format!("ended:{invoker:?}"));
                Ok(())
            });
        }

        let mut set = InteractableSet::new();
        set.register(&mut world, switch).unwrap();

        Self {
            world,
            camera: Camera::new(Vec3::new(0.0, 0.0, 8.0))
                .with_viewport(320, 240)
                .looking_at(Vec3::ZERO),
            clock: SimClock::new(),
            log: PresentationLog::new(),
            set,
        }
    }

    fn step(&mut self, pointer: PointerSnapshot) -> bool {
        self.clock.advance(DT);
        let ctx = StepContext::new(&self.clock, pointer, &self.world)
            .with_camera(&self.camera)
            .with_player(PLAYER);
        self.set.update(&ctx, &mut self.log);
        self.set.get(SWITCH).unwrap().is_pressed()
    }
}

fn over() -> PointerSnapshot {
    PointerSnapshot::at(160.0, 120.0)
}

fn away() -> PointerSnapshot {
    PointerSnapshot::at(2.0, 2.0)
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

#[test]
fn toggle_three_edges_alternates() {
    let journal = Journal::default();
    let mut harness = Harness::new(
        InteractableConfig::named("Lamp").with_mode(ActivationMode::Toggle),
        &journal,
    );

    let mut states = Vec::new();
    for _ in 0..3 {
        states.push(harness.step(over().pressing()));
        harness.step(over());
    }

    assert_eq!(states, vec![true, false, true]);
    assert_eq!(
        entries(&journal),
        vec![
            "hook:started",
            "started:Some(ActorId(1))",
            "hook:ended",
            "ended:Some(ActorId(1))",
            "hook:started",
            "started:Some(ActorId(1))",
        ]
    );
}

#[test]
fn press_delivers_start_and_end_in_one_step() {
    let journal = Journal::default();
    let mut harness = Harness::new(InteractableConfig::named("Bell"), &journal);

    assert!(!harness.step(over().pressing()));
    assert_eq!(
        entries(&journal),
        vec![
            "hook:started",
            "started:Some(ActorId(1))",
            "hook:ended",
            "ended:Some(ActorId(1))",
        ]
    );
    assert!(harness.set.get(SWITCH).unwrap().last_activation().is_some());
}

#[test]
fn hold_ends_once_when_hover_is_lost() {
    let journal = Journal::default();
    let mut harness = Harness::new(
        InteractableConfig::named("Crank").with_mode(ActivationMode::Hold),
        &journal,
    );

    assert!(harness.step(over().pressing()));
    for _ in 0..5 {
        assert!(harness.step(over().holding()));
    }
    assert!(!harness.step(away().holding()));
    for _ in 0..10 {
        assert!(!harness.step(away().holding()));
    }

    let ended = entries(&journal)
        .iter()
        .filter(|entry| entry.starts_with("ended"))
        .count();
    assert_eq!(ended, 1);
}

#[test]
fn hold_ends_on_release() {
    let journal = Journal::default();
    let mut harness = Harness::new(
        InteractableConfig::named("Crank").with_mode(ActivationMode::Hold),
        &journal,
    );

    assert!(harness.step(over().pressing()));
    assert!(harness.step(over().holding()));
    assert!(!harness.step(over()));
}

#[test]
fn start_active_fires_once_without_invoker() {
    let journal = Journal::default();
    let mut harness = Harness::new(
        InteractableConfig::named("Beacon")
            .with_mode(ActivationMode::Toggle)
            .with_start_active(true),
        &journal,
    );

    for _ in 0..5 {
        assert!(harness.step(PointerSnapshot::default()));
    }
    assert_eq!(entries(&journal), vec!["hook:started", "started:None"]);
}

#[test]
fn failing_listener_still_commits_pressed() {
    let journal = Journal::default();
    let mut harness = Harness::new(
        InteractableConfig::named("Lamp").with_mode(ActivationMode::Toggle),
        &journal,
    );
    harness
        .set
        .get_mut(SWITCH)
        .unwrap()
        .on_started(|_| anyhow::bail!("listener exploded"));

    assert!(harness.step(over().pressing()));
}

#[test]
fn materials_follow_hover_and_press() {
    let journal = Journal::default();
    let mut harness = Harness::new(
        InteractableConfig::named("Lamp")
            .with_mode(ActivationMode::Toggle)
            .with_materials(MaterialSlots::new(MaterialHandle(1), MaterialHandle(2), MaterialHandle(3))),
        &journal,
    );

    harness.step(away());
    assert_eq!(harness.log.material(SWITCH), Some(MaterialHandle(1)));
    harness.step(over());
    assert_eq!(harness.log.material(SWITCH), Some(MaterialHandle(2)));
    harness.step(over().pressing());
    assert_eq!(harness.log.material(SWITCH), Some(MaterialHandle(3)));

    // Stays pressed while toggled on, even after the pointer leaves
    for _ in 0..20 {
        harness.step(away());
    }
    assert_eq!(harness.log.material(SWITCH), Some(MaterialHandle(3)));
    assert_eq!(harness.log.assignment_count(SWITCH), 3);
}
