//! State shared between the input thread, the game loop thread and `main`.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use slingshot_core::state::SimSnapshot;
use slingshot_core::types::WorldBounds;

use crate::config::{AppConfig, PresentationConfig};
use crate::game_loop;
use crate::gesture::AimPreview;
use crate::ipc::{FrameSink, InputEvent};

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A front-end input event to apply before the next tick.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// One rendered frame: simulation state plus the pending aim line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub snapshot: SimSnapshot,
    pub aim: Option<AimPreview>,
}

/// Messages written to the front end, one per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostMessage {
    /// Sent once before the first frame.
    Scene {
        bounds: WorldBounds,
        presentation: PresentationConfig,
    },
    Frame(Frame),
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is `Sync`
/// - the latest frame is shared with the game loop thread for polling
pub struct AppState {
    /// `None` before `start_simulation` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_frame: Arc<Mutex<Option<Frame>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_frame: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread. Fails if it is already running.
    pub fn start_simulation<S>(
        &self,
        config: AppConfig,
        sink: S,
        max_ticks: Option<u64>,
    ) -> Result<std::thread::JoinHandle<()>>
    where
        S: FrameSink + Send + 'static,
    {
        let mut running = self.running.lock().map_err(|e| anyhow!(e.to_string()))?;
        if *running {
            bail!("simulation already running");
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(config, sink, self.latest_frame.clone(), max_ticks)?;

        let mut tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        *tx_lock = Some(cmd_tx);
        *running = true;

        Ok(handle)
    }

    /// A sender handle for threads that feed the loop directly.
    pub fn command_sender(&self) -> Result<mpsc::Sender<LoopCommand>> {
        let tx_lock = self.command_tx.lock().map_err(|e| anyhow!(e.to_string()))?;
        tx_lock
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow!("simulation not started"))
    }

    pub fn latest_frame(&self) -> Result<Option<Frame>> {
        let lock = self.latest_frame.lock().map_err(|e| anyhow!(e.to_string()))?;
        Ok(lock.clone())
    }
}
