//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Whether the simulation advances on `tick()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    /// Commands are still processed but no physics runs and time is frozen.
    Paused,
}

/// Why a projectile left the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Left the visible area.
    OutOfBounds,
    /// Came within the collision radius of the attractor.
    Collided,
    /// Removed by a `Clear` command.
    Cleared,
}
