//! Commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// All actions the presentation layer can request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Launch a projectile from a completed gesture.
    Launch { anchor: Point, release: Point },
    /// Remove every live projectile.
    Clear,
    /// Freeze physics.
    Pause,
    /// Resume physics.
    Resume,
}
