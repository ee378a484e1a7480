//! Camera-facing orientation for labels.

use glam::{Mat3, Quat, Vec3};

/// Rotation about the world Y axis that turns local +Z from `position` toward `camera`.
///
/// Returns `None` when the camera is directly above or below `position`, where the
/// horizontal facing is undefined; callers keep their previous rotation.
pub fn y_axis_facing(position: Vec3, camera: Vec3) -> Option<Quat> {
    let mut to_camera = camera - position;
    to_camera.y = 0.0; // Project to XZ plane
    let to_camera = to_camera.try_normalize()?;

    let right = Vec3::Y.cross(to_camera).normalize();
    let rotation = Mat3::from_cols(right, Vec3::Y, to_camera);
    Some(Quat::from_mat3(&rotation))
}
