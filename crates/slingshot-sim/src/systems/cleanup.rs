//! Cleanup system: removes projectiles that left the world or hit the attractor.

use hecs::{Entity, World};

use slingshot_core::components::{Attractor, Projectile, ProjectileId};
use slingshot_core::enums::RemovalReason;
use slingshot_core::events::SimEvent;
use slingshot_core::types::WorldBounds;

/// Evaluate the removal predicates on the post-step state of every projectile
/// and despawn the ones that match. Collision takes precedence when both hold.
///
/// Matches are collected into `despawn_buffer` first and despawned after the
/// query ends, so every projectile is evaluated exactly once.
pub fn run(
    world: &mut World,
    attractor: &Attractor,
    bounds: &WorldBounds,
    collision_radius: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    let mut removed = Vec::new();
    for (entity, (id, projectile)) in world.query_mut::<(&ProjectileId, &Projectile)>() {
        let reason = if projectile.is_collided(attractor, collision_radius) {
            RemovalReason::Collided
        } else if projectile.is_out_of_bounds(bounds.width, bounds.height) {
            RemovalReason::OutOfBounds
        } else {
            continue;
        };
        despawn_buffer.push(entity);
        removed.push((*id, reason, projectile.position));
    }

    // Report in id order so the event stream does not depend on archetype layout.
    removed.sort_by_key(|(id, _, _)| *id);
    for (id, reason, position) in removed {
        log::debug!("projectile {} removed ({:?}) at {}", id.0, reason, position);
        events.push(SimEvent::ProjectileRemoved {
            id,
            reason,
            position,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every live projectile.
pub fn clear_all(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<SimEvent>) {
    despawn_buffer.clear();

    let mut removed = Vec::new();
    for (entity, (id, projectile)) in world.query_mut::<(&ProjectileId, &Projectile)>() {
        despawn_buffer.push(entity);
        removed.push((*id, projectile.position));
    }

    removed.sort_by_key(|(id, _)| *id);
    events.extend(removed.into_iter().map(|(id, position)| SimEvent::ProjectileRemoved {
        id,
        reason: RemovalReason::Cleared,
        position,
    }));

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
