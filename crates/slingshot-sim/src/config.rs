//! Simulation configuration and its validation.
//!
//! Every field has a default from `slingshot_core::constants`, so a config
//! file only needs to name what it overrides:
//!
//! ```json
//! { "gravity_constant": 8.0, "attractor_position": [300.0, 200.0] }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use slingshot_core::components::{Attractor, GravityLaw};
use slingshot_core::constants::*;
use slingshot_core::types::{Point, WorldBounds};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Visible area; projectiles leaving it are removed.
    pub bounds: WorldBounds,
    /// Attractor position. `None` places it at the centre of `bounds`.
    pub attractor_position: Option<Point>,
    pub attractor_mass: f64,
    /// Mass given to every projectile built from a gesture.
    pub projectile_mass: f64,
    pub gravity_constant: f64,
    /// Distance from the attractor at which projectiles are removed.
    pub collision_radius: f64,
    /// Drag length per unit of launch speed.
    pub velocity_scale: f64,
    /// Inside this distance from the attractor centre no pull is applied.
    pub min_distance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            bounds: WorldBounds::default(),
            attractor_position: None,
            attractor_mass: ATTRACTOR_MASS,
            projectile_mass: PROJECTILE_MASS,
            gravity_constant: GRAVITY,
            collision_radius: ATTRACTOR_RADIUS,
            velocity_scale: VELOCITY_SCALE,
            min_distance: MIN_DISTANCE,
        }
    }
}

impl SimConfig {
    /// Build the session's attractor.
    pub fn attractor(&self) -> Attractor {
        let position = self
            .attractor_position
            .unwrap_or_else(|| self.bounds.center());
        Attractor::new(position, self.attractor_mass)
    }

    pub fn gravity_law(&self) -> GravityLaw {
        GravityLaw {
            constant: self.gravity_constant,
            min_distance: self.min_distance,
        }
    }

    /// Check the caller-side invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(ConfigError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if !(self.attractor_mass > 0.0) {
            return Err(ConfigError::NonPositiveMass {
                field: "attractor_mass",
                value: self.attractor_mass,
            });
        }
        if !(self.projectile_mass > 0.0) {
            return Err(ConfigError::NonPositiveMass {
                field: "projectile_mass",
                value: self.projectile_mass,
            });
        }
        if !(self.gravity_constant > 0.0) {
            return Err(ConfigError::NonPositiveGravity(self.gravity_constant));
        }
        if self.velocity_scale == 0.0 || !self.velocity_scale.is_finite() {
            return Err(ConfigError::ZeroVelocityScale);
        }
        if !(self.collision_radius >= 0.0) {
            return Err(ConfigError::NegativeRadius(self.collision_radius));
        }
        if !(self.min_distance > 0.0) {
            return Err(ConfigError::NonPositiveMinDistance(self.min_distance));
        }
        Ok(())
    }
}

/// Errors found when validating a `SimConfig`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width or height is not strictly positive.
    InvalidBounds { width: f64, height: f64 },
    /// A mass is zero, negative or NaN.
    NonPositiveMass { field: &'static str, value: f64 },
    /// Gravitational constant is zero, negative or NaN.
    NonPositiveGravity(f64),
    /// Velocity scale would divide by zero.
    ZeroVelocityScale,
    /// Collision radius is negative or NaN.
    NegativeRadius(f64),
    /// Pull cutoff distance is zero, negative or NaN.
    NonPositiveMinDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBounds { width, height } => {
                write!(f, "World bounds must be positive, got {}x{}", width, height)
            }
            ConfigError::NonPositiveMass { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::NonPositiveGravity(g) => {
                write!(f, "gravity_constant must be positive, got {}", g)
            }
            ConfigError::ZeroVelocityScale => {
                write!(f, "velocity_scale must be a finite nonzero number")
            }
            ConfigError::NegativeRadius(r) => {
                write!(f, "collision_radius must not be negative, got {}", r)
            }
            ConfigError::NonPositiveMinDistance(d) => {
                write!(f, "min_distance must be positive, got {}", d)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
