//! Simulation engine for SLINGSHOT.
//!
//! Owns the hecs ECS world holding the live projectiles, runs the gravity
//! and cleanup systems once per tick, and produces `SimSnapshot`s for the
//! presentation layer.

pub mod config;
pub mod engine;
pub mod launch;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use slingshot_core as core;
