//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; bodies live in components and the attractor is
//! passed in by the engine.

pub mod cleanup;
pub mod gravity;
pub mod snapshot;
