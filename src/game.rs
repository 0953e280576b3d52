//! Run controller
//!
//! Owns the session state and the RNG, and gates the simulation behind a
//! small state machine: `Idle -> Running -> GameOver -> (reset) -> Running`.
//! The caller owns the frame loop; return values tell it when to schedule
//! and when to stop.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::{self, Direction, GameEvent, GameState, Rect};

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Before the first start
    Idle,
    /// Frames advance the simulation
    Running,
    /// Run ended; frames do nothing until reset
    GameOver,
}

/// What the frame loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep scheduling frames
    Continue,
    /// A collision ended the run on this frame; stop scheduling
    GameOver { score: u64 },
    /// Not running; nothing happened
    Halted,
}

/// Read-only view for presentation
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: Rect,
    pub obstacles: Vec<Rect>,
    pub score: u64,
    pub phase: Phase,
}

/// A game session plus its lifecycle
pub struct Game {
    state: GameState,
    rng: Pcg32,
    phase: Phase,
}

impl Game {
    /// Build an idle game; `seed` drives obstacle placement
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let seed = config.seed.unwrap_or(seed);
        Self {
            state: GameState::new(config),
            rng: Pcg32::seed_from_u64(seed),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Begin the first run
    ///
    /// Returns true when the caller must start the frame loop. Only valid
    /// from `Idle`; anything else is ignored so the loop is never scheduled
    /// twice.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Running;
        log::info!("Game started");
        true
    }

    /// Restore the initial configuration and run again
    ///
    /// Valid from any phase. Returns true when the caller must (re)start the
    /// frame loop, i.e. when it was not already running.
    pub fn reset(&mut self) -> bool {
        let was_running = self.phase == Phase::Running;
        self.state.reset();
        self.phase = Phase::Running;
        log::info!("Game reset");
        !was_running
    }

    /// Advance one frame
    pub fn frame(&mut self) -> FrameOutcome {
        if self.phase != Phase::Running {
            return FrameOutcome::Halted;
        }

        for event in sim::tick(&mut self.state, &mut self.rng) {
            match event {
                GameEvent::ObstacleSpawned { x } => log::debug!("Obstacle spawned at x={:.1}", x),
                GameEvent::ObstacleCleared { score } => log::debug!("Obstacle cleared, score {}", score),
                GameEvent::Collision { score } => log::info!("Collision! Final score: {}", score),
            }
        }

        if self.state.game_over {
            self.phase = Phase::GameOver;
            FrameOutcome::GameOver {
                score: self.state.score,
            }
        } else {
            FrameOutcome::Continue
        }
    }

    pub fn on_key_down(&mut self, direction: Direction) {
        sim::apply_key_down(&mut self.state, direction);
    }

    pub fn on_key_up(&mut self, direction: Direction) {
        sim::apply_key_up(&mut self.state, direction);
    }

    /// Current positions and score for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.state.player.rect(),
            obstacles: self.state.obstacles.iter().map(|o| o.rect()).collect(),
            score: self.state.score,
            phase: self.phase,
        }
    }
}
