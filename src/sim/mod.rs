//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, no wall-clock time
//! - RNG passed in by the caller
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, collides};
pub use spawner::Spawner;
pub use state::{Axis, Direction, GameEvent, GameState, Obstacle, Player};
pub use tick::{apply_key_down, apply_key_up, tick};
