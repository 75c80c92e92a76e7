//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::ProjectileId;
use crate::enums::RemovalReason;
use crate::types::Point;

/// Lifecycle events, drained into the snapshot of the tick that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    ProjectileLaunched {
        id: ProjectileId,
        position: Point,
        velocity: Point,
    },
    ProjectileRemoved {
        id: ProjectileId,
        reason: RemovalReason,
        /// Last position, after the step that triggered removal.
        position: Point,
    },
}
