//! Collider storage and ray queries.

use crate::{Aabb, CollisionLayers, Ray};
use glam::Vec3;
use interactables_core::ObjectId;
use std::collections::BTreeMap;

/// First surface struck by a ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Object owning the collider that was hit.
    pub object: ObjectId,
    /// Parent of that object in the scene hierarchy, if any.
    pub parent: Option<ObjectId>,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Spatial query surface consumed by pointer hit testing.
pub trait SpatialQuery {
    /// First collider hit along `ray` whose layers intersect `mask`, no farther than
    /// `max_distance`.
    fn raycast_first(&self, ray: &Ray, mask: CollisionLayers, max_distance: f32)
        -> Option<RayHit>;
}

/// A box collider attached to one scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Owning object.
    pub object: ObjectId,
    /// Direct parent of the owning object, if it is a child part.
    pub parent: Option<ObjectId>,
    /// World-space bounds.
    pub bounds: Aabb,
    /// Categories this collider belongs to.
    pub layers: CollisionLayers,
}

impl Collider {
    /// Collider for a root object on the default layer.
    pub fn new(object: ObjectId, bounds: Aabb) -> Self {
        Self {
            object,
            parent: None,
            bounds,
            layers: CollisionLayers::DEFAULT,
        }
    }

    /// Builder: mark as a direct child of `parent`.
    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder: set the collision layers.
    pub fn with_layers(mut self, layers: CollisionLayers) -> Self {
        self.layers = layers;
        self
    }
}

/// All colliders in the scene, keyed by owning object.
///
/// Iteration is in `ObjectId` order so ray ties resolve the same way every run.
#[derive(Debug, Clone, Default)]
pub struct ColliderWorld {
    colliders: BTreeMap<ObjectId, Collider>,
}

impl ColliderWorld {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the collider for `collider.object`.
    pub fn insert(&mut self, collider: Collider) -> Option<Collider> {
        self.colliders.insert(collider.object, collider)
    }

    /// Remove the collider owned by `object`.
    pub fn remove(&mut self, object: ObjectId) -> Option<Collider> {
        self.colliders.remove(&object)
    }

    /// Look up the collider owned by `object`.
    pub fn get(&self, object: ObjectId) -> Option<&Collider> {
        self.colliders.get(&object)
    }

    /// Move a collider. Returns false if `object` has none.
    pub fn set_bounds(&mut self, object: ObjectId, bounds: Aabb) -> bool {
        match self.colliders.get_mut(&object) {
            Some(collider) => {
                collider.bounds = bounds;
                true
            }
            None => false,
        }
    }

    /// Colliders whose direct parent is `parent`.
    pub fn children_of(&self, parent: ObjectId) -> impl Iterator<Item = &Collider> {
        self.colliders
            .values()
            .filter(move |collider| collider.parent == Some(parent))
    }

    /// Add `layers` to the collider of `object` and to those of its direct children.
    ///
    /// Returns how many colliders were tagged.
    pub fn tag_with_children(&mut self, object: ObjectId, layers: CollisionLayers) -> usize {
        let mut tagged = 0;
        for collider in self.colliders.values_mut() {
            if collider.object == object || collider.parent == Some(object) {
                collider.layers |= layers;
                tagged += 1;
            }
        }
        tagged
    }

    /// Iterate all colliders in object order.
    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.values()
    }

    /// Number of colliders.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Returns true if the world holds no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl SpatialQuery for ColliderWorld {
    fn raycast_first(
        &self,
        ray: &Ray,
        mask: CollisionLayers,
        max_distance: f32,
    ) -> Option<RayHit> {
        if ray.direction == Vec3::ZERO {
            return None;
        }

        let mut closest: Option<RayHit> = None;

        for collider in self.colliders.values() {
            if !collider.layers.intersects(mask) {
                continue;
            }

            let Some(distance) = collider.bounds.ray_intersection(ray) else {
                continue;
            };

            if distance > max_distance {
                continue;
            }

            if closest.map_or(true, |hit| distance < hit.distance) {
                closest = Some(RayHit {
                    object: collider.object,
                    parent: collider.parent,
                    distance,
                    point: ray.at(distance),
                });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(center: Vec3) -> Aabb {
        Aabb::from_center_size(center, Vec3::ONE)
    }

    fn world() -> ColliderWorld {
        let mut world = ColliderWorld::new();
        world.insert(Collider::new(ObjectId(1), cube(Vec3::new(0.0, 0.0, -5.0))));
        world.insert(
            Collider::new(ObjectId(2), cube(Vec3::new(0.0, 0.0, -3.0))).with_parent(ObjectId(1)),
        );
        world.insert(Collider::new(ObjectId(3), cube(Vec3::new(0.0, 0.0, -8.0))));
        world
    }

    #[test]
    fn mask_filters_untagged_colliders() {
        let world = world();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(world
            .raycast_first(&ray, CollisionLayers::INTERACTABLE, 100.0)
            .is_none());
    }

    #[test]
    fn tagging_covers_direct_children() {
        let mut world = world();
        assert_eq!(
            world.tag_with_children(ObjectId(1), CollisionLayers::INTERACTABLE),
            2
        );
        assert!(world
            .get(ObjectId(2))
            .unwrap()
            .layers
            .contains(CollisionLayers::INTERACTABLE | CollisionLayers::DEFAULT));
        assert!(!world
            .get(ObjectId(3))
            .unwrap()
            .layers
            .contains(CollisionLayers::INTERACTABLE));
    }

    #[test]
    fn closest_hit_wins() {
        let mut world = world();
        world.tag_with_children(ObjectId(1), CollisionLayers::INTERACTABLE);
        world.tag_with_children(ObjectId(3), CollisionLayers::INTERACTABLE);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = world
            .raycast_first(&ray, CollisionLayers::INTERACTABLE, 100.0)
            .expect("ray hits the child part first");
        assert_eq!(hit.object, ObjectId(2));
        assert_eq!(hit.parent, Some(ObjectId(1)));
        assert!((hit.distance - 2.5).abs() < 0.001);
        assert!((hit.point.z + 2.5).abs() < 0.001);
    }

    #[test]
    fn max_distance_is_respected() {
        let mut world = ColliderWorld::new();
        world.insert(
            Collider::new(ObjectId(9), cube(Vec3::new(0.0, 0.0, -150.0)))
                .with_layers(CollisionLayers::INTERACTABLE),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(world
            .raycast_first(&ray, CollisionLayers::INTERACTABLE, 100.0)
            .is_none());
        assert!(world
            .raycast_first(&ray, CollisionLayers::INTERACTABLE, 200.0)
            .is_some());
    }

    #[test]
    fn set_bounds_moves_collider() {
        let mut world = world();
        assert!(world.set_bounds(ObjectId(3), cube(Vec3::new(10.0, 0.0, 0.0))));
        assert!(!world.set_bounds(ObjectId(42), cube(Vec3::ZERO)));
        assert_eq!(world.children_of(ObjectId(1)).count(), 1);
        assert_eq!(world.len(), 3);
    }
}
