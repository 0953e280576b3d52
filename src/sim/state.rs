//! Game state and core simulation types
//!
//! Everything one session owns lives in `GameState`; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// A directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Sign along the axis (screen y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left | Direction::Up => -1.0,
            Direction::Right | Direction::Down => 1.0,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// New obstacle entered above the field at this x
    ObstacleSpawned { x: f32 },
    /// Obstacle left through the bottom; score after increment
    ObstacleCleared { score: u64 },
    /// Player hit an obstacle
    Collision { score: u64 },
}

/// The player's rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Velocity per tick, set directly from key state
    pub vel: Vec2,
    /// Magnitude written into `vel` on key press
    pub speed: f32,
}

impl Player {
    /// Player at its start position with zero velocity
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.player_start();
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(config.player_width, config.player_height),
            vel: Vec2::ZERO,
            speed: config.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Apply velocity and clamp each axis so the rectangle stays in the field
    pub fn advance(&mut self, field: Vec2) {
        self.pos += self.vel;
        let max = (field - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed per tick
    pub speed: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Constants this session was built from
    pub config: GameConfig,
    /// Obstacles that exited the bottom without a hit
    pub score: u64,
    /// Simulation tick counter (drives spawn cadence)
    pub frame_count: u64,
    /// Set on collision, cleared only by reset
    pub game_over: bool,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            score: 0,
            frame_count: 0,
            game_over: false,
            player,
            obstacles: Vec::new(),
        }
    }

    /// Restore the fixed initial configuration for a new run
    pub fn reset(&mut self) {
        self.score = 0;
        self.frame_count = 0;
        self.game_over = false;
        self.obstacles.clear();
        self.player = Player::new(&self.config);
    }

    /// Field size as a vector
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.config.field_width, self.config.field_height)
    }
}
