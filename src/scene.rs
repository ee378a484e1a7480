//! Scene files: camera, player body, colliders and interactables.

use crate::config::RunnerConfig;
use anyhow::{bail, Context, Result};
use glam::Vec3;
use interactables_camera::Camera;
use interactables_core::{ActorId, ObjectId};
use interactables_interaction::{Interactable, InteractableConfig, InteractableSet, TracingHooks};
use interactables_physics::{Aabb, Collider, ColliderWorld};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::{fs, path::Path};
use tracing::info;

#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(default = "default_scene_name")]
    name: String,
    camera: CameraSpec,
    #[serde(default)]
    player: Option<PlayerSpec>,
    #[serde(default)]
    objects: Vec<ObjectSpec>,
}

fn default_scene_name() -> String {
    "scene".to_string()
}

#[derive(Debug, Deserialize)]
struct CameraSpec {
    position: [f32; 3],
    target: [f32; 3],
    #[serde(default)]
    fov_degrees: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct PlayerSpec {
    actor: ActorId,
    position: [f32; 3],
    #[serde(default = "default_player_size")]
    size: [f32; 3],
}

fn default_player_size() -> [f32; 3] {
    [0.6, 1.8, 0.6]
}

#[derive(Debug, Deserialize)]
struct BoxSpec {
    id: ObjectId,
    center: [f32; 3],
    size: [f32; 3],
}

#[derive(Debug, Deserialize)]
struct ObjectSpec {
    #[serde(flatten)]
    body: BoxSpec,
    #[serde(default)]
    children: Vec<BoxSpec>,
    /// Authored label position in world space.
    #[serde(default)]
    label: Option<[f32; 3]>,
    /// Present for interactables; plain scenery leaves it out.
    #[serde(default)]
    interactable: Option<InteractableConfig>,
    /// Install hooks that log every transition at info level.
    #[serde(default)]
    log_transitions: bool,
}

/// The local player's body.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub actor: ActorId,
    pub body: Aabb,
}

impl Player {
    pub fn move_to(&mut self, center: Vec3) {
        self.body = self.body.recentered(center);
    }
}

/// Everything a headless run needs, built from a scene file.
#[derive(Debug)]
pub struct Scene {
    pub name: String,
    pub world: ColliderWorld,
    pub interactables: InteractableSet,
    pub camera: Camera,
    pub player: Option<Player>,
}

impl Scene {
    pub fn load(path: &Path, config: &RunnerConfig) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        Self::from_json(&contents, config).with_context(|| format!("invalid scene {}", path.display()))
    }

    pub fn from_json(contents: &str, config: &RunnerConfig) -> Result<Self> {
        let file: SceneFile = serde_json::from_str(contents)?;
        Self::build(file, config)
    }

    fn build(file: SceneFile, config: &RunnerConfig) -> Result<Self> {
        let mut camera = Camera::new(Vec3::from_array(file.camera.position))
            .with_viewport(config.screen_width, config.screen_height)
            .looking_at(Vec3::from_array(file.camera.target));
        if let Some(fov) = file.camera.fov_degrees {
            camera.fov = fov.clamp(1.0, 179.0).to_radians();
        }

        let mut world = ColliderWorld::new();
        let mut seen = BTreeSet::new();
        for object in &file.objects {
            insert_box(&mut world, &mut seen, &object.body, None)?;
            for child in &object.children {
                insert_box(&mut world, &mut seen, child, Some(object.body.id))?;
            }
        }

        let mut interactables = InteractableSet::new();
        for object in &file.objects {
            let Some(settings) = &object.interactable else {
                continue;
            };
            let interactable = build_interactable(object, settings, config)?;
            let tagged = interactables.register(&mut world, interactable)?;
            info!(object = %object.body.id, tagged, mode = %settings.mode, "registered interactable");
        }

        let player = file.player.map(|spec| Player {
            actor: spec.actor,
            body: Aabb::from_center_size(Vec3::from_array(spec.position), Vec3::from_array(spec.size)),
        });

        Ok(Self {
            name: file.name,
            world,
            interactables,
            camera,
            player,
        })
    }
}

fn insert_box(
    world: &mut ColliderWorld,
    seen: &mut BTreeSet<ObjectId>,
    spec: &BoxSpec,
    parent: Option<ObjectId>,
) -> Result<()> {
    if !seen.insert(spec.id) {
        bail!("object id {} is used more than once", spec.id);
    }
    let center = Vec3::from_array(spec.center);
    if !center.is_finite() {
        bail!("object {} has an invalid center {center:?}", spec.id);
    }
    let size = Vec3::from_array(spec.size);
    if size.min_element() < 0.0 || !size.is_finite() {
        bail!("object {} has an invalid size {size:?}", spec.id);
    }
    let mut collider = Collider::new(spec.id, Aabb::from_center_size(center, size));
    if let Some(parent) = parent {
        collider = collider.with_parent(parent);
    }
    world.insert(collider);
    Ok(())
}

fn build_interactable(
    object: &ObjectSpec,
    settings: &InteractableConfig,
    config: &RunnerConfig,
) -> Result<Interactable> {
    let id = object.body.id;
    let mut interactable = Interactable::new(id, Vec3::from_array(object.body.center), settings)
        .with_context(|| format!("object {id}"))?
        .with_hit_range(config.hit_test_range)?;
    if let Some(label) = object.label {
        interactable = interactable.with_label(Vec3::from_array(label));
    }
    if object.log_transitions {
        interactable = interactable.with_hooks(TracingHooks::new(id, settings.display_name.clone()));
    }
    Ok(interactable)
}
