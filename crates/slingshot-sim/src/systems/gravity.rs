//! Gravity integration system.
//!
//! Steps every live projectile one explicit-Euler tick toward the attractor.

use hecs::World;

use slingshot_core::components::{Attractor, GravityLaw, Projectile};

/// Step all projectiles. Each step reads only its own state and the attractor,
/// so the order of iteration does not affect the result.
pub fn run(world: &mut World, attractor: &Attractor, law: &GravityLaw) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.step(attractor, law);
    }
}
