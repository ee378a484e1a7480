//! Fixed-step headless run of a scene driven by a scripted input timeline.

use crate::config::RunnerConfig;
use crate::scene::Scene;
use crate::scripted_input::ScriptedInputPlayer;
use anyhow::Result;
use interactables_core::{ActorId, ObjectId, SimClock, SimTick};
use interactables_input::InputState;
use interactables_interaction::{InteractableSet, StepContext};
use interactables_physics::{Aabb, ContactTracker};
use interactables_testkit::{
    EventRecord, InteractionReport, InteractionReportBuilder, JsonlSink, ReportSink, RunResult,
    TransitionKind,
};
use interactables_ui3d::PresentationLog;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info};

pub struct HeadlessConfig {
    pub runner: RunnerConfig,
    pub scene: PathBuf,
    pub script: PathBuf,
    pub events_out: Option<PathBuf>,
    pub summary_out: Option<PathBuf>,
    pub max_ticks: Option<u64>,
}

pub struct RunOutcome {
    pub events: Vec<EventRecord>,
    pub report: InteractionReport,
    pub presentation: PresentationLog,
}

type Journal = Rc<RefCell<Vec<(ObjectId, TransitionKind, Option<ActorId>)>>>;

pub fn run(cfg: HeadlessConfig) -> Result<RunOutcome> {
    let scene = Scene::load(&cfg.scene, &cfg.runner)?;
    let script = ScriptedInputPlayer::from_path(&cfg.script)?;
    let max_ticks = cfg.max_ticks.or(cfg.runner.max_ticks);

    info!(
        scene = %scene.name,
        interactables = scene.interactables.len(),
        script_seconds = script.total_duration(),
        "Starting headless run"
    );

    let mut events_sink = cfg.events_out.as_ref().map(JsonlSink::create).transpose()?;
    let outcome = run_scene(scene, script, &cfg.runner, max_ticks, events_sink.as_mut())?;
    if let Some(sink) = events_sink.as_mut() {
        sink.flush()?;
    }

    if let Some(path) = &cfg.summary_out {
        ReportSink::create(path)?.write(&outcome.report)?;
    }

    info!(
        ticks = outcome.report.ticks,
        events = outcome.report.events,
        result = ?outcome.report.result,
        "Headless run finished"
    );
    Ok(outcome)
}

/// Drive `scene` with `script` at the configured tick rate until the script ends
/// or `max_ticks` is reached.
pub fn run_scene(
    mut scene: Scene,
    mut script: ScriptedInputPlayer,
    runner: &RunnerConfig,
    max_ticks: Option<u64>,
    mut sink: Option<&mut JsonlSink>,
) -> Result<RunOutcome> {
    let journal = Journal::default();
    subscribe_all(&mut scene.interactables, &journal);

    let mut report = InteractionReportBuilder::new(scene.name.clone());
    for interactable in scene.interactables.iter() {
        report = report.object(
            interactable.object(),
            interactable.display_name(),
            interactable.mode().to_string(),
        );
    }

    let dt = runner.tick_seconds();
    let mut clock = SimClock::new();
    let mut tick = SimTick::ZERO;
    let mut ticks = 0u64;
    let mut input = InputState::new();
    let mut contacts = ContactTracker::new();
    let mut presentation = PresentationLog::new();
    let mut events = Vec::new();

    while !script.is_finished() {
        if max_ticks.is_some_and(|limit| ticks >= limit) {
            debug!(ticks, "tick limit reached");
            break;
        }
        clock.advance(dt);
        tick = tick.advance(1);
        ticks += 1;

        let frame = script.advance(dt, &mut input);
        if let (Some(player), Some(position)) = (scene.player.as_mut(), frame.player_position) {
            player.move_to(position);
        }
        let bodies: Vec<(ActorId, Aabb)> = scene
            .player
            .iter()
            .map(|player| (player.actor, player.body))
            .collect();
        let entered = contacts.update(&scene.world, &bodies);

        let mut ctx = StepContext::new(&clock, input.snapshot(), &scene.world)
            .with_camera(&scene.camera);
        if let Some(player) = &scene.player {
            ctx = ctx.with_player(player.actor);
        }

        for object in scene.interactables.dispatch_contacts(&entered, &ctx) {
            report.contact_activation(object);
        }
        scene.interactables.update(&ctx, &mut presentation);

        for (object, kind, invoker) in journal.borrow_mut().drain(..) {
            let record = EventRecord {
                tick,
                time: clock.now(),
                kind,
                object,
                invoker,
            };
            if let Some(sink) = sink.as_deref_mut() {
                sink.write(&record)?;
            }
            report.record(&record);
            events.push(record);
        }
    }

    for interactable in scene.interactables.iter() {
        report.pressed_at_end(interactable.object(), interactable.is_pressed());
    }
    let result = if script.is_finished() {
        RunResult::Pass
    } else {
        RunResult::Fail
    };

    Ok(RunOutcome {
        events,
        report: report.result(result).duration(ticks, clock.now()).build(),
        presentation,
    })
}

fn subscribe_all(set: &mut InteractableSet, journal: &Journal) {
    let objects: Vec<ObjectId> = set.iter().map(|interactable| interactable.object()).collect();
    for object in objects {
        let Some(interactable) = set.get_mut(object) else {
            continue;
        };
        let started = Rc::clone(journal);
        interactable.on_started(move |invoker| {
            started
                .borrow_mut()
                .push((object, TransitionKind::Started, invoker));
            Ok(())
        });
        let ended = Rc::clone(journal);
        interactable.on_ended(move |invoker| {
            ended.borrow_mut().push((object, TransitionKind::Ended, invoker));
            Ok(())
        });
    }
}
