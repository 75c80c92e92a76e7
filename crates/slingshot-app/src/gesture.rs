//! Pointer gesture tracking.
//!
//! Turns raw pointer presses/releases into launch commands. The tracker only
//! remembers a pending anchor and the last cursor position; the simulation
//! never sees a gesture until it completes.

use serde::{Deserialize, Serialize};

use slingshot_core::commands::SimCommand;
use slingshot_core::types::Point;

use crate::config::GestureMode;

/// Pending aim line for the front end: from the anchor to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimPreview {
    pub anchor: Point,
    pub cursor: Point,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    mode: GestureMode,
    anchor: Option<Point>,
    cursor: Point,
}

impl GestureTracker {
    pub fn new(mode: GestureMode) -> Self {
        Self {
            mode,
            anchor: None,
            cursor: Point::ZERO,
        }
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn pointer_down(&mut self, position: Point) -> Option<SimCommand> {
        self.cursor = position;
        match (self.mode, self.anchor) {
            (GestureMode::TwoClick, Some(anchor)) => {
                self.anchor = None;
                Some(SimCommand::Launch {
                    anchor,
                    release: position,
                })
            }
            _ => {
                self.anchor = Some(position);
                None
            }
        }
    }

    pub fn pointer_up(&mut self, position: Point) -> Option<SimCommand> {
        self.cursor = position;
        if self.mode != GestureMode::PressRelease {
            return None;
        }
        self.anchor.take().map(|anchor| SimCommand::Launch {
            anchor,
            release: position,
        })
    }

    pub fn pointer_move(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Abandon a pending gesture without launching.
    pub fn cancel(&mut self) {
        self.anchor = None;
    }

    pub fn aim_preview(&self) -> Option<AimPreview> {
        self.anchor.map(|anchor| AimPreview {
            anchor,
            cursor: self.cursor,
        })
    }
}
