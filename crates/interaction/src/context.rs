//! Per-step inputs shared by every interactable.

use glam::Vec3;
use interactables_camera::CameraView;
use interactables_core::{ActorId, SimClock};
use interactables_input::PointerSnapshot;
use interactables_physics::{Ray, SpatialQuery};

/// Everything an interactable reads during one evaluation step.
///
/// Built once per frame and handed to every interactable, so they all see the same
/// pointer, player, camera and time. The pointer ray is resolved here once.
#[derive(Clone, Copy)]
pub struct StepContext<'a> {
    /// Current time in seconds.
    pub now: f64,
    /// Length of this step in seconds.
    pub dt: f32,
    /// Pointer state for this step.
    pub pointer: PointerSnapshot,
    /// The local player actor, if one exists.
    pub player: Option<ActorId>,
    /// Spatial query used for hover ray casts.
    pub spatial: &'a dyn SpatialQuery,
    eye: Option<Vec3>,
    pointer_ray: Option<Ray>,
}

impl<'a> StepContext<'a> {
    /// Context with no camera and no player.
    pub fn new(clock: &SimClock, pointer: PointerSnapshot, spatial: &'a dyn SpatialQuery) -> Self {
        Self {
            now: clock.now(),
            dt: clock.dt(),
            pointer,
            player: None,
            spatial,
            eye: None,
            pointer_ray: None,
        }
    }

    /// Builder: set the active camera and resolve the pointer ray through it.
    pub fn with_camera(mut self, camera: &dyn CameraView) -> Self {
        self.eye = Some(camera.eye());
        self.pointer_ray = self
            .pointer
            .position
            .map(|screen_pos| camera.pointer_ray(screen_pos));
        self
    }

    /// Builder: set the local player actor.
    pub fn with_player(mut self, player: ActorId) -> Self {
        self.player = Some(player);
        self
    }

    /// Camera position, if a camera is active.
    pub fn camera_eye(&self) -> Option<Vec3> {
        self.eye
    }

    /// Ray through the pointer, if both a camera and a pointer position are available.
    pub fn pointer_ray(&self) -> Option<Ray> {
        self.pointer_ray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interactables_camera::Camera;
    use interactables_physics::ColliderWorld;

    #[test]
    fn ray_requires_camera_and_pointer() {
        let world = ColliderWorld::new();
        let clock = SimClock::new();
        let camera = Camera::new(Vec3::ZERO).with_viewport(100, 100);

        let no_camera = StepContext::new(&clock, PointerSnapshot::at(50.0, 50.0), &world);
        assert!(no_camera.pointer_ray().is_none());
        assert!(no_camera.camera_eye().is_none());

        let no_pointer = StepContext::new(&clock, PointerSnapshot::default(), &world).with_camera(&camera);
        assert!(no_pointer.pointer_ray().is_none());
        assert_eq!(no_pointer.camera_eye(), Some(Vec3::ZERO));

        let both = StepContext::new(&clock, PointerSnapshot::at(50.0, 50.0), &world)
            .with_camera(&camera)
            .with_player(ActorId(1));
        assert!(both.pointer_ray().is_some());
        assert_eq!(both.player, Some(ActorId(1)));
    }
}
