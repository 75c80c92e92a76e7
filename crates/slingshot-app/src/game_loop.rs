//! Game loop thread: runs the simulation engine at the configured frame rate
//! and emits one frame per tick.
//!
//! The engine is created inside this thread and owned by it. Input arrives via
//! an `mpsc` channel and is applied between ticks; frames go out through a
//! [`FrameSink`] and are also stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use slingshot_core::commands::SimCommand;
use slingshot_core::types::Point;
use slingshot_sim::SimulationEngine;

use crate::config::AppConfig;
use crate::gesture::GestureTracker;
use crate::ipc::{FrameSink, InputEvent};
use crate::state::{Frame, HostMessage, LoopCommand};

/// Duration of one tick at the given frame rate.
pub fn tick_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input side and the thread handle. The
/// loop stops on `Shutdown`, on a `Quit` input, when every sender is dropped,
/// when the sink fails, or after `max_ticks` ticks.
pub fn spawn_game_loop<S>(
    config: AppConfig,
    sink: S,
    latest_frame: Arc<Mutex<Option<Frame>>>,
    max_ticks: Option<u64>,
) -> Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)>
where
    S: FrameSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("slingshot-game-loop".into())
        .spawn(move || {
            let mut game_loop = GameLoop::new(config, sink, max_ticks);
            game_loop.run(cmd_rx, &latest_frame);
        })
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// Loop state owned by the game loop thread.
pub struct GameLoop<S> {
    engine: SimulationEngine,
    gestures: GestureTracker,
    config: AppConfig,
    sink: S,
    max_ticks: Option<u64>,
    ticks_run: u64,
}

impl<S: FrameSink> GameLoop<S> {
    pub fn new(config: AppConfig, sink: S, max_ticks: Option<u64>) -> Self {
        Self {
            engine: SimulationEngine::new(config.sim.clone()),
            gestures: GestureTracker::new(config.presentation.gesture_mode),
            config,
            sink,
            max_ticks,
            ticks_run: 0,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// Runs until a stop condition, pacing ticks against the wall clock.
    pub fn run(&mut self, cmd_rx: mpsc::Receiver<LoopCommand>, latest_frame: &Mutex<Option<Frame>>) {
        if !self.announce() {
            return;
        }

        let frame_duration = tick_duration(self.config.presentation.fps);
        let mut next_tick_time = Instant::now();
        log::info!(
            "game loop started at {} fps",
            self.config.presentation.fps
        );

        loop {
            // 1. Drain all pending commands
            loop {
                match cmd_rx.try_recv() {
                    Ok(LoopCommand::Input(event)) => {
                        if !self.apply_input(event) {
                            log::info!("quit requested");
                            return;
                        }
                    }
                    Ok(LoopCommand::Shutdown) => return,
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => return,
                }
            }

            // 2. Advance one tick and emit it
            let Some(frame) = self.step() else {
                return;
            };

            // 3. Store latest frame for polling
            if let Ok(mut lock) = latest_frame.lock() {
                *lock = Some(frame);
            }

            if self.budget_spent() {
                log::info!("tick budget of {} reached", self.ticks_run);
                return;
            }

            // 4. Sleep until the next frame
            next_tick_time += frame_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > frame_duration * 2 {
                // Too far behind; reset instead of bursting to catch up
                next_tick_time = now;
            }
        }
    }

    /// Send the scene description. Returns false if the sink is gone.
    pub fn announce(&mut self) -> bool {
        let scene = HostMessage::Scene {
            bounds: self.config.sim.bounds,
            presentation: self.config.presentation.clone(),
        };
        match self.sink.send(&scene) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("front end closed before the first frame: {}", e);
                false
            }
        }
    }

    /// Apply one input event. Returns false when the loop should stop.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        let command = match event {
            InputEvent::PointerDown { x, y } => self.gestures.pointer_down(Point::new(x, y)),
            InputEvent::PointerUp { x, y } => self.gestures.pointer_up(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => {
                self.gestures.pointer_move(Point::new(x, y));
                None
            }
            InputEvent::Cancel => {
                self.gestures.cancel();
                None
            }
            InputEvent::Pause => Some(SimCommand::Pause),
            InputEvent::Resume => Some(SimCommand::Resume),
            InputEvent::Clear => Some(SimCommand::Clear),
            InputEvent::Quit => return false,
        };
        if let Some(command) = command {
            self.engine.queue_command(command);
        }
        true
    }

    /// Tick the engine once and send the frame. `None` if the sink failed.
    pub fn step(&mut self) -> Option<Frame> {
        let snapshot = self.engine.tick();
        self.ticks_run += 1;
        let frame = Frame {
            snapshot,
            aim: self.gestures.aim_preview(),
        };
        if let Err(e) = self.sink.send(&HostMessage::Frame(frame.clone())) {
            log::warn!("front end closed, stopping game loop: {}", e);
            return None;
        }
        Some(frame)
    }

    fn budget_spent(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.ticks_run >= max)
    }
}
