//! Simulation state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::components::ProjectileId;
use crate::enums::SimPhase;
use crate::events::SimEvent;
use crate::types::{Point, SimTime, WorldBounds};

/// Complete simulation state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub bounds: WorldBounds,
    pub attractor: AttractorView,
    /// Live projectiles sorted by id.
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<SimEvent>,
}

/// The attractor, for drawing an image centred on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttractorView {
    pub position: Point,
    pub mass: f64,
    pub collision_radius: f64,
}

/// One live projectile, drawn as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Point,
    pub velocity: Point,
    pub mass: f64,
}
