#![warn(missing_docs)]
//! Physics primitives (AABB, rays, collision layers) plus the collider world used for
//! pointer ray casts and contact notifications.

mod contact;
mod world;

pub use contact::{ContactEvent, ContactTracker};
pub use world::{Collider, ColliderWorld, RayHit, SpatialQuery};

use bitflags::bitflags;
use glam::Vec3;

bitflags! {
    /// Spatial categories a collider belongs to. Ray casts filter on these.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Ordinary scenery.
        const DEFAULT = 1 << 0;
        /// Objects the pointer can target.
        const INTERACTABLE = 1 << 1;
        /// Bodies of actors (players, mobs).
        const ACTOR = 1 << 2;
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Axis-aligned bounding box used for collisions and ray casts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.cmple(max).all());
        Self { min, max }
    }

    /// Create an AABB from its center and full size.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Return a copy of this box moved so its center sits at `center`.
    pub fn recentered(&self, center: Vec3) -> Self {
        Self::from_center_size(center, self.max - self.min)
    }

    /// Tests intersection with another AABB. Touching faces count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }

    /// Distance along `ray` to the first point inside this box, if any.
    ///
    /// A ray starting inside the box reports the exit distance.
    pub fn ray_intersection(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = ray.direction.recip();

        let t1 = (self.min - ray.origin) * inv_dir;
        let t2 = (self.max - ray.origin) * inv_dir;

        let tmin = t1.min(t2).max_element();
        let tmax = t1.max(t2).min_element();

        // Entire box behind the origin
        if tmax < 0.0 {
            return None;
        }

        if tmin > tmax {
            return None;
        }

        Some(if tmin < 0.0 { tmax } else { tmin })
    }
}

/// Half-line used for pointer picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction (zero if constructed from a degenerate vector).
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
