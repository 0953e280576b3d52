//! Block Dodge - A falling block dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, score)
//! - `game`: Run controller (start / per-frame drive / game over / reset)
//! - `config`: Data-driven game constants
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input mapping

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{FrameOutcome, Game, Phase, Snapshot};

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Playing field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Velocity applied per axis while a direction key is held (px/tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the bottom of the field to the player's top edge at spawn
    pub const PLAYER_START_OFFSET: f32 = 60.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 50.0;
    pub const OBSTACLE_HEIGHT: f32 = 50.0;
    /// Downward speed (px/tick)
    pub const OBSTACLE_SPEED: f32 = 15.0;
    /// Ticks between spawns (higher = less frequent)
    pub const SPAWN_FREQUENCY: u64 = 10;
}
