//! Application configuration: simulation tunables plus the presentation
//! context (window, imagery, palette, gesture style).
//!
//! Loaded from an optional JSON file; every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use slingshot_core::constants::{ATTRACTOR_RADIUS, FPS, PROJECTILE_RADIUS};
use slingshot_sim::config::SimConfig;

/// How pointer input is turned into an anchor and a release point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureMode {
    /// First press sets the anchor, the next press launches.
    #[default]
    TwoClick,
    /// Press sets the anchor, release launches.
    PressRelease,
}

/// RGB colours used by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub projectile: [u8; 3],
    pub aim_line: [u8; 3],
    pub anchor: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            projectile: [255, 0, 0],
            aim_line: [255, 255, 255],
            anchor: [255, 0, 0],
        }
    }
}

/// Everything the front end needs to draw a scene, passed explicitly
/// instead of living in process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub title: String,
    /// Frames per second; one simulation tick per frame.
    pub fps: u32,
    /// Half-size of the attractor image, centred on the attractor.
    pub attractor_draw_radius: f64,
    /// Radius of the filled circle drawn for each projectile.
    pub projectile_radius: f64,
    pub background_image: PathBuf,
    pub attractor_image: PathBuf,
    pub palette: Palette,
    pub gesture_mode: GestureMode,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            title: "Gravitational Slingshot Effect".to_string(),
            fps: FPS,
            attractor_draw_radius: ATTRACTOR_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            background_image: PathBuf::from("assets/background.jpg"),
            attractor_image: PathBuf::from("assets/attractor.png"),
            palette: Palette::default(),
            gesture_mode: GestureMode::default(),
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub presentation: PresentationConfig,
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.sim.validate()?;
        ensure!(self.presentation.fps > 0, "presentation.fps must be positive");
        ensure!(
            self.presentation.projectile_radius >= 0.0,
            "presentation.projectile_radius must not be negative"
        );
        Ok(())
    }
}
