//! Player configuration.
//!
//! Settings for the headless player loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playback]
//! time_scale = 1.0
//! dt = 0.0333
//! ticks = 60
//!
//! [assets]
//! clips = ./assets/clips.json
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::AnimError;

/// Default safe values for startup
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_DT: f32 = 1.0 / 30.0;
const DEFAULT_TICKS: u32 = 60;
const DEFAULT_CLIPS_PATH: &str = "./assets/clips.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// Fixed frame delta in seconds used by the simulated host loop.
    pub dt: f32,
    /// Number of frames to simulate.
    pub ticks: u32,
    /// JSON clip file loaded into the [`AnimationStore`](crate::resources::animationstore::AnimationStore).
    pub clips_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatorConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
            dt: DEFAULT_DT,
            ticks: DEFAULT_TICKS,
            clips_path: PathBuf::from(DEFAULT_CLIPS_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Non-positive
    /// `time_scale` or `dt` values are rejected.
    pub fn load_from_file(&mut self) -> Result<(), AnimError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| AnimError::Config(format!("Failed to load config file: {}", e)))?;

        // [playback] section
        if let Some(scale) = config.getfloat("playback", "time_scale").ok().flatten() {
            self.time_scale = positive("time_scale", scale as f32)?;
        }
        if let Some(dt) = config.getfloat("playback", "dt").ok().flatten() {
            self.dt = positive("dt", dt as f32)?;
        }
        if let Some(ticks) = config.getuint("playback", "ticks").ok().flatten() {
            self.ticks = ticks as u32;
        }

        // [assets] section
        if let Some(clips) = config.get("assets", "clips") {
            self.clips_path = PathBuf::from(clips);
        }

        info!(
            "Loaded config: time_scale={}, dt={}, ticks={}, clips={:?}",
            self.time_scale, self.dt, self.ticks, self.clips_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), AnimError> {
        let mut config = Ini::new();

        // [playback] section
        config.set("playback", "time_scale", Some(self.time_scale.to_string()));
        config.set("playback", "dt", Some(self.dt.to_string()));
        config.set("playback", "ticks", Some(self.ticks.to_string()));

        // [assets] section
        config.set(
            "assets",
            "clips",
            Some(self.clips_path.to_string_lossy().into_owned()),
        );

        config.write(&self.config_path)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Check that a playback setting such as `dt` or `time_scale` is a positive,
/// finite number.
pub fn positive(key: &str, value: f32) -> Result<f32, AnimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AnimError::Config(format!(
            "{} must be positive, got {}",
            key, value
        )))
    }
}
