//! Snapshot system: queries the ECS world and builds a complete SimSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use slingshot_core::components::{Projectile, ProjectileId};
use slingshot_core::enums::SimPhase;
use slingshot_core::events::SimEvent;
use slingshot_core::state::{AttractorView, ProjectileView, SimSnapshot};
use slingshot_core::types::{SimTime, WorldBounds};

/// Build a complete SimSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    bounds: &WorldBounds,
    attractor: AttractorView,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        phase,
        bounds: *bounds,
        attractor,
        projectiles: build_projectiles(world),
        events,
    }
}

/// Build ProjectileView list from all live projectiles, sorted by id.
pub fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileId, &Projectile)>()
        .iter()
        .map(|(_, (id, projectile))| ProjectileView {
            id: *id,
            position: projectile.position,
            velocity: projectile.velocity,
            mass: projectile.mass(),
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
