//! Game configuration resource.
//!
//! Manages gameplay tuning loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! speed = 3.0
//! smoothing = 1.0
//! footsteps = footsteps
//! torch_capacity = 100.0
//!
//! [tiles]
//! fade_time = 0.5
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

/// Default safe values for startup
const DEFAULT_PLAYER_SPEED: f32 = 3.0;
const DEFAULT_SMOOTHING: f32 = 1.0;
const DEFAULT_FOOTSTEPS_TRACK: &str = "footsteps";
const DEFAULT_TORCH_CAPACITY: f32 = 100.0;
const DEFAULT_FADE_TIME: f32 = 0.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("failed to save config file {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for [{section}] {key}: {reason}")]
    Invalid {
        section: &'static str,
        key: &'static str,
        reason: String,
    },
}

/// Gameplay configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Input smoothing rate.
    pub smoothing: f32,
    /// Music id of the footstep loop.
    pub footsteps_track: String,
    /// Capacity of the torch the player carries.
    pub torch_capacity: f32,
    /// Tile fade duration in seconds.
    pub fade_time: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            player_speed: DEFAULT_PLAYER_SPEED,
            smoothing: DEFAULT_SMOOTHING,
            footsteps_track: DEFAULT_FOOTSTEPS_TRACK.to_string(),
            torch_capacity: DEFAULT_TORCH_CAPACITY,
            fade_time: DEFAULT_FADE_TIME,
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
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|reason| ConfigError::Load {
                path: self.config_path.clone(),
                reason,
            })?;
        self.apply(&config)?;

        info!(
            "Loaded config: speed={}, smoothing={}, footsteps='{}', torch_capacity={}, fade_time={}",
            self.player_speed,
            self.smoothing,
            self.footsteps_track,
            self.torch_capacity,
            self.fade_time
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(|reason| ConfigError::Load {
            path: self.config_path.clone(),
            reason,
        })?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), ConfigError> {
        // [player] section
        if let Some(speed) = read_float(config, "player", "speed")? {
            self.player_speed = speed;
        }
        if let Some(smoothing) = read_float(config, "player", "smoothing")? {
            self.smoothing = smoothing;
        }
        if let Some(track) = config.get("player", "footsteps") {
            self.footsteps_track = track;
        }
        if let Some(capacity) = read_float(config, "player", "torch_capacity")? {
            self.torch_capacity = capacity;
        }

        // [tiles] section
        if let Some(fade_time) = read_float(config, "tiles", "fade_time")? {
            if fade_time < 0.0 {
                return Err(ConfigError::Invalid {
                    section: "tiles",
                    key: "fade_time",
                    reason: format!("must not be negative, got {fade_time}"),
                });
            }
            self.fade_time = fade_time;
        }
        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set("player", "smoothing", Some(self.smoothing.to_string()));
        config.set("player", "footsteps", Some(self.footsteps_track.clone()));
        config.set(
            "player",
            "torch_capacity",
            Some(self.torch_capacity.to_string()),
        );

        // [tiles] section
        config.set("tiles", "fade_time", Some(self.fade_time.to_string()));

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Save {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn read_float(
    config: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<Option<f32>, ConfigError> {
    config
        .getfloat(section, key)
        .map(|value| value.map(|v| v as f32))
        .map_err(|reason| ConfigError::Invalid {
            section,
            key,
            reason,
        })
}
