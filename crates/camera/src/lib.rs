#![warn(missing_docs)]
//! Camera used to turn the pointer's screen position into a world-space picking ray.

use glam::{Mat4, Vec3};
use interactables_physics::Ray;

/// What pointer picking and label billboarding need to know about the active camera.
pub trait CameraView {
    /// Camera position in world space.
    fn eye(&self) -> Vec3;

    /// World-space ray through the given window pixel.
    fn pointer_ray(&self, screen_pos: (f32, f32)) -> Ray;
}

/// Perspective camera with position, yaw/pitch orientation, and viewport size.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Horizontal rotation in radians (around Y axis).
    pub yaw: f32,
    /// Vertical rotation in radians (around local X axis).
    pub pitch: f32,

    /// Field of view in radians.
    pub fov: f32,
    /// Viewport size in pixels (width, height).
    pub viewport: (u32, u32),
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: std::f32::consts::FRAC_PI_3, // 60 degrees
            viewport: (1280, 720),
            near: 0.1,
            far: 1000.0,
        }
    }
}

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

impl Camera {
    /// Create a new camera with the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set the viewport size in pixels.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.set_viewport(width, height);
        self
    }

    /// Builder: orient the camera toward `target`.
    pub fn looking_at(mut self, target: Vec3) -> Self {
        self.look_at(target);
        self
    }

    /// Get the forward direction vector (where camera is looking).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Point the camera at `target`. A target at the camera position is ignored.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.yaw = dir.z.atan2(dir.x);
        self.pitch = dir.y.asin().clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Update the viewport (call when the window resizes). Zero sizes are clamped to 1.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width.max(1), height.max(1));
    }

    /// Width / height of the viewport.
    pub fn aspect(&self) -> f32 {
        self.viewport.0.max(1) as f32 / self.viewport.1.max(1) as f32
    }

    /// Compute the view matrix (world space -> camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    /// Compute the projection matrix (camera space -> clip space).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect(), self.near, self.far)
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Convert window pixel coordinates into a world-space ray starting on the near plane.
    pub fn screen_to_ray(&self, screen_pos: (f32, f32)) -> Ray {
        let (width, height) = (self.viewport.0.max(1) as f32, self.viewport.1.max(1) as f32);

        // Normalized device coordinates (-1 to 1), Y flipped
        let x = (2.0 * screen_pos.0) / width - 1.0;
        let y = 1.0 - (2.0 * screen_pos.1) / height;

        let inv_view_proj = self.view_projection_matrix().inverse();
        let near = inv_view_proj.project_point3(Vec3::new(x, y, 0.0));
        let far = inv_view_proj.project_point3(Vec3::new(x, y, 1.0));

        Ray::new(near, far - near)
    }

    /// Window pixel at the center of the viewport.
    pub fn screen_center(&self) -> (f32, f32) {
        (self.viewport.0 as f32 * 0.5, self.viewport.1 as f32 * 0.5)
    }
}

impl CameraView for Camera {
    fn eye(&self) -> Vec3 {
        self.position
    }

    fn pointer_ray(&self, screen_pos: (f32, f32)) -> Ray {
        self.screen_to_ray(screen_pos)
    }
}
