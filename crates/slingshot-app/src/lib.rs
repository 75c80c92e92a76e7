//! SLINGSHOT presentation host.
//!
//! This crate wires the simulation engine to a front end: it turns pointer
//! input into launch gestures, runs the engine on a paced game-loop thread
//! and streams frames out as JSON lines.

pub mod config;
pub mod game_loop;
pub mod gesture;
pub mod ipc;
pub mod state;

pub use slingshot_core as core;
