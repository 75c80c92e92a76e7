//! Entity spawn factories for the simulation world.

use hecs::World;

use slingshot_core::components::{Projectile, ProjectileId};

/// Spawn a live projectile entity under the given id.
pub fn spawn_projectile(world: &mut World, id: ProjectileId, projectile: Projectile) -> hecs::Entity {
    world.spawn((id, projectile))
}
