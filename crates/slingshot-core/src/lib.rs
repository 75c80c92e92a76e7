//! Core types and definitions for the SLINGSHOT simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vector math, the attractor and projectile components, commands,
//! events, state snapshots and constants.
//! It has no dependency on any rendering or input framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
