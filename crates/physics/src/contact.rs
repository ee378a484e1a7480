//! Contact-enter detection between actor bodies and scene colliders.

use crate::{Aabb, ColliderWorld, CollisionLayers};
use interactables_core::{ActorId, ObjectId};
use std::collections::BTreeSet;

/// "Actor is now touching this object" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactEvent {
    /// Actor whose body started touching.
    pub actor: ActorId,
    /// Object whose collider was touched.
    pub object: ObjectId,
}

/// Turns per-step body overlap into enter notifications.
///
/// A pair that keeps overlapping only reports once; it reports again after the
/// bodies separate and touch anew.
#[derive(Debug, Default)]
pub struct ContactTracker {
    touching: BTreeSet<(ActorId, ObjectId)>,
}

impl ContactTracker {
    /// Create a tracker with no remembered contacts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare actor bodies against the world and return contacts that began this step.
    ///
    /// Colliders on the `ACTOR` layer are ignored so actors never touch themselves.
    pub fn update(&mut self, world: &ColliderWorld, actors: &[(ActorId, Aabb)]) -> Vec<ContactEvent> {
        let mut now_touching = BTreeSet::new();
        let mut entered = Vec::new();

        for (actor, body) in actors {
            for collider in world.iter() {
                if collider.layers.contains(CollisionLayers::ACTOR) {
                    continue;
                }
                if !collider.bounds.intersects(body) {
                    continue;
                }

                let pair = (*actor, collider.object);
                if !self.touching.contains(&pair) {
                    tracing::trace!(actor = %actor, object = %collider.object, "contact began");
                    entered.push(ContactEvent {
                        actor: *actor,
                        object: collider.object,
                    });
                }
                now_touching.insert(pair);
            }
        }

        self.touching = now_touching;
        entered
    }

    /// Whether `actor` is currently touching `object`.
    pub fn is_touching(&self, actor: ActorId, object: ObjectId) -> bool {
        self.touching.contains(&(actor, object))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collider;
    use glam::Vec3;

    fn plate() -> ColliderWorld {
        let mut world = ColliderWorld::new();
        world.insert(Collider::new(
            ObjectId(1),
            Aabb::from_center_size(Vec3::ZERO, Vec3::new(2.0, 0.2, 2.0)),
        ));
        world
    }

    fn body_at(center: Vec3) -> Aabb {
        Aabb::from_center_size(center, Vec3::new(0.6, 1.8, 0.6))
    }

    #[test]
    fn resting_contact_reports_once() {
        let world = plate();
        let mut tracker = ContactTracker::new();
        let player = ActorId(1);
        let actors = [(player, body_at(Vec3::new(0.0, 0.9, 0.0)))];

        let first = tracker.update(&world, &actors);
        assert_eq!(
            first,
            vec![ContactEvent {
                actor: player,
                object: ObjectId(1)
            }]
        );
        assert!(tracker.update(&world, &actors).is_empty());
        assert!(tracker.is_touching(player, ObjectId(1)));
    }

    #[test]
    fn separating_and_returning_reports_again() {
        let world = plate();
        let mut tracker = ContactTracker::new();
        let player = ActorId(1);

        tracker.update(&world, &[(player, body_at(Vec3::new(0.0, 0.9, 0.0)))]);
        assert!(tracker
            .update(&world, &[(player, body_at(Vec3::new(0.0, 5.0, 0.0)))])
            .is_empty());
        assert!(!tracker.is_touching(player, ObjectId(1)));

        let again = tracker.update(&world, &[(player, body_at(Vec3::new(0.0, 0.9, 0.0)))]);
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn actor_layer_colliders_are_ignored() {
        let mut world = plate();
        world.insert(
            Collider::new(ObjectId(2), body_at(Vec3::new(0.0, 0.9, 0.0)))
                .with_layers(CollisionLayers::ACTOR),
        );
        let mut tracker = ContactTracker::new();
        let events = tracker.update(&world, &[(ActorId(1), body_at(Vec3::new(0.0, 0.9, 0.0)))]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].object, ObjectId(1));
    }
}
