//! Game configuration
//!
//! Every tunable number the simulation reads lives here. Defaults match the
//! classic layout; an override can be stored as JSON in LocalStorage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a configuration override
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playing field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Per-axis velocity while a direction key is held
    pub player_speed: f32,
    /// Gap between the player's top edge and the field bottom at spawn
    pub player_start_offset: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_speed: f32,
    /// Spawn one obstacle every N ticks
    pub spawn_frequency: u64,

    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_start_offset: PLAYER_START_OFFSET,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_frequency: SPAWN_FREQUENCY,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON override. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the numbers describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_frequency == 0 {
            return Err(ConfigError::Invalid("spawn_frequency must be at least 1".into()));
        }
        let sizes = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("obstacle_speed", self.obstacle_speed),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.player_speed.is_finite() && self.player_speed >= 0.0) {
            return Err(ConfigError::Invalid("player_speed must be non-negative".into()));
        }
        if self.player_width > self.field_width || self.player_height > self.field_height {
            return Err(ConfigError::Invalid("player does not fit in the field".into()));
        }
        if self.obstacle_width > self.field_width {
            return Err(ConfigError::Invalid("obstacle wider than the field".into()));
        }
        Ok(())
    }

    /// Player's top-left corner at the start of a run (centred, near the bottom)
    pub fn player_start(&self) -> (f32, f32) {
        let x = self.field_width / 2.0 - self.player_width / 2.0;
        let y = (self.field_height - self.player_start_offset)
            .min(self.field_height - self.player_height)
            .max(0.0);
        (x, y)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "block_dodge_config";

    /// Load a config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
