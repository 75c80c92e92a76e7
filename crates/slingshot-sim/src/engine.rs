//! Simulation engine: owns the world and runs the systems each tick.
//!
//! `SimulationEngine` owns the hecs ECS world of live projectiles, the fixed
//! attractor, processes presentation-layer commands, runs all systems, and
//! produces `SimSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;

use slingshot_core::commands::SimCommand;
use slingshot_core::components::{Attractor, GravityLaw, Projectile, ProjectileId};
use slingshot_core::enums::SimPhase;
use slingshot_core::events::SimEvent;
use slingshot_core::state::{AttractorView, ProjectileView, SimSnapshot};
use slingshot_core::types::{Point, SimTime};

use crate::config::SimConfig;
use crate::launch;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    attractor: Attractor,
    law: GravityLaw,
    time: SimTime,
    phase: SimPhase,
    next_projectile_id: u32,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    ///
    /// The config is trusted as-is; call `SimConfig::validate` first when it
    /// comes from outside the program.
    pub fn new(config: SimConfig) -> Self {
        let attractor = config.attractor();
        let law = config.gravity_law();
        Self {
            world: World::new(),
            config,
            attractor,
            law,
            time: SimTime::default(),
            phase: SimPhase::default(),
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Build a projectile from a completed launch gesture and add it to the
    /// live set immediately.
    pub fn spawn_from_gesture(&mut self, anchor: Point, release: Point) -> ProjectileId {
        let projectile = launch::build(
            anchor,
            release,
            self.config.projectile_mass,
            self.config.velocity_scale,
        );
        self.spawn(projectile)
    }

    /// Add a projectile to the live set.
    pub fn spawn(&mut self, projectile: Projectile) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;

        world_setup::spawn_projectile(&mut self.world, id, projectile);
        log::debug!(
            "projectile {} launched at {} with velocity {}",
            id.0,
            projectile.position,
            projectile.velocity
        );
        self.events.push(SimEvent::ProjectileLaunched {
            id,
            position: projectile.position,
            velocity: projectile.velocity,
        });
        id
    }

    /// Process queued commands, advance one tick unless paused, and return
    /// the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.config.bounds,
            self.attractor_state(),
            events,
        )
    }

    /// Run one tick of physics: step every projectile, then remove those that
    /// ended the step out of bounds or inside the collision radius.
    pub fn advance(&mut self) {
        systems::gravity::run(&mut self.world, &self.attractor, &self.law);
        systems::cleanup::run(
            &mut self.world,
            &self.attractor,
            &self.config.bounds,
            self.config.collision_radius,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        self.time.advance();
        log::trace!(
            "tick {}: {} live projectiles",
            self.time.tick,
            self.live_count()
        );
    }

    /// Attractor position, mass and collision radius for drawing.
    pub fn attractor_state(&self) -> AttractorView {
        AttractorView {
            position: self.attractor.position(),
            mass: self.attractor.mass(),
            collision_radius: self.config.collision_radius,
        }
    }

    /// Current live projectiles, sorted by id.
    pub fn projectiles(&self) -> Vec<ProjectileView> {
        systems::snapshot::build_projectiles(&self.world)
    }

    /// Number of live projectiles.
    pub fn live_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Get the current phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn attractor(&self) -> &Attractor {
        &self.attractor
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Launch { anchor, release } => {
                self.spawn_from_gesture(anchor, release);
            }
            SimCommand::Clear => {
                systems::cleanup::clear_all(
                    &mut self.world,
                    &mut self.despawn_buffer,
                    &mut self.events,
                );
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    log::info!("simulation paused at tick {}", self.time.tick);
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    log::info!("simulation resumed at tick {}", self.time.tick);
                    self.phase = SimPhase::Running;
                }
            }
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
