use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use slingshot_app::config::AppConfig;
use slingshot_app::ipc::{self, InputEnd, JsonLinesSink};
use slingshot_app::state::{AppState, LoopCommand};

/// Gravitational slingshot sandbox. Reads input events from stdin and writes
/// frames to stdout, both as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "slingshot", version)]
struct Args {
    /// JSON config file; defaults apply to anything it leaves out.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks instead of at end of input.
    #[arg(long)]
    max_ticks: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.validate()?;

    let state = AppState::new();
    let handle = state.start_simulation(config, JsonLinesSink::new(io::stdout()), args.max_ticks)?;

    let tx = state.command_sender()?;
    let run_to_budget = args.max_ticks.is_some();
    std::thread::Builder::new()
        .name("slingshot-input".into())
        .spawn(move || match ipc::forward_input(io::stdin().lock(), &tx) {
            Ok(InputEnd::Eof) if run_to_budget => {}
            Ok(end) => {
                log::debug!("input finished: {:?}", end);
                let _ = tx.send(LoopCommand::Shutdown);
            }
            Err(e) => {
                log::error!("failed to read input: {}", e);
                let _ = tx.send(LoopCommand::Shutdown);
            }
        })?;

    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Some(frame) = state.latest_frame()? {
        log::info!(
            "stopped at tick {} with {} projectiles",
            frame.snapshot.time.tick,
            frame.snapshot.projectiles.len()
        );
    }
    Ok(())
}
