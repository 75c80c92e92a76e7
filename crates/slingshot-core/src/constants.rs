//! Simulation constants and tuning parameters.
//!
//! These are the defaults; `SimConfig` and `PresentationConfig` may override them.

// --- World ---

/// Visible area width (pixels).
pub const WIDTH: f64 = 800.0;

/// Visible area height (pixels).
pub const HEIGHT: f64 = 600.0;

// --- Physics ---

/// Gravitational constant in simulation units.
pub const GRAVITY: f64 = 5.0;

/// Mass of the central attractor.
pub const ATTRACTOR_MASS: f64 = 100.0;

/// Mass given to every launched projectile.
pub const PROJECTILE_MASS: f64 = 5.0;

/// Distance from the attractor centre at which a projectile counts as collided.
/// Matches the attractor's drawn radius.
pub const ATTRACTOR_RADIUS: f64 = 50.0;

/// Distance from the attractor centre inside which no pull is applied.
pub const MIN_DISTANCE: f64 = 1e-3;

// --- Launch ---

/// Drag length (pixels) per unit of launch speed.
pub const VELOCITY_SCALE: f64 = 100.0;

// --- Presentation ---

/// Frame rate; one simulation tick per frame.
pub const FPS: u32 = 60;

/// Drawn radius of a projectile (pixels).
pub const PROJECTILE_RADIUS: f64 = 5.0;
