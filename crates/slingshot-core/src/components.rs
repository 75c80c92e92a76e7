//! ECS components for hecs entities.
//!
//! `Projectile` is the only per-entity body state; the `Attractor` is a
//! singleton owned by the engine and shared read-only with every projectile.

use serde::{Deserialize, Serialize};

use crate::types::{angle_between, distance, Point, WorldBounds};

/// Stable identifier of a launched projectile. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// The fixed massive body. Position and mass are set once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attractor {
    position: Point,
    mass: f64,
}

impl Attractor {
    pub fn new(position: Point, mass: f64) -> Self {
        Self { position, mass }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }
}

/// Inverse-square attraction parameters applied on every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityLaw {
    /// Gravitational constant `G`.
    pub constant: f64,
    /// Inside this distance from the attractor centre the pull has no
    /// defined direction and is not applied.
    pub min_distance: f64,
}

impl Default for GravityLaw {
    fn default() -> Self {
        Self {
            constant: crate::constants::GRAVITY,
            min_distance: crate::constants::MIN_DISTANCE,
        }
    }
}

/// A moving body launched by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Point,
    pub velocity: Point,
    mass: f64,
}

impl Projectile {
    pub fn new(position: Point, velocity: Point, mass: f64) -> Self {
        Self {
            position,
            velocity,
            mass,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advance one tick of explicit Euler integration toward `attractor`.
    ///
    /// The force is `G * m * M / d^2` and the acceleration is that force over
    /// the projectile's own mass, so the result is `G * M / d^2` whatever `m` is.
    /// Velocity is updated first, then position moves by the new velocity.
    /// Within `law.min_distance` of the centre only the drift is applied; the
    /// collision check removes such a projectile on the same tick.
    pub fn step(&mut self, attractor: &Attractor, law: &GravityLaw) {
        let d = distance(self.position, attractor.position());
        if d >= law.min_distance {
            let force = law.constant * self.mass * attractor.mass() / (d * d);
            let acceleration = force / self.mass;

            let angle = angle_between(self.position, attractor.position());
            self.velocity.x += acceleration * angle.cos();
            self.velocity.y += acceleration * angle.sin();
        }

        self.position += self.velocity;
    }

    /// True when the position lies outside `[0, width] x [0, height]`.
    pub fn is_out_of_bounds(&self, width: f64, height: f64) -> bool {
        !WorldBounds::new(width, height).contains(self.position)
    }

    /// True when the projectile is within `radius` of the attractor centre.
    pub fn is_collided(&self, attractor: &Attractor, radius: f64) -> bool {
        distance(self.position, attractor.position()) <= radius
    }
}
