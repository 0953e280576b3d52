//! Simulation tick
//!
//! Advances the session by one frame: spawn, move the player, move
//! obstacles, score exits and detect hits.

use rand::Rng;

use super::collides;
use super::spawner::Spawner;
use super::state::{Axis, Direction, GameEvent, GameState};

/// Press a direction: that axis moves at full speed (last write wins)
pub fn apply_key_down(state: &mut GameState, direction: Direction) {
    let player = &mut state.player;
    let v = direction.sign() * player.speed;
    match direction.axis() {
        Axis::Horizontal => player.vel.x = v,
        Axis::Vertical => player.vel.y = v,
    }
}

/// Release a direction: the whole axis stops, even if the opposite key is held
pub fn apply_key_up(state: &mut GameState, direction: Direction) {
    let player = &mut state.player;
    match direction.axis() {
        Axis::Horizontal => player.vel.x = 0.0,
        Axis::Vertical => player.vel.y = 0.0,
    }
}

/// Advance the game state by one frame
///
/// Does nothing once `game_over` is set.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.game_over {
        return events;
    }

    // Spawn
    state.frame_count += 1;
    let spawner = Spawner::new(&state.config);
    if let Some(obstacle) = spawner.try_spawn(state.frame_count, rng) {
        events.push(GameEvent::ObstacleSpawned { x: obstacle.pos.x });
        state.obstacles.push(obstacle);
    }

    // Player
    let field = state.field();
    state.player.advance(field);
    let player_rect = state.player.rect();

    // Obstacles, in spawn order. Exits are removed in the same pass; a hit
    // leaves the obstacle where it is.
    let mut score = state.score;
    let mut hit = false;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.pos.y += obstacle.speed;
        if obstacle.pos.y > field.y {
            score += 1;
            events.push(GameEvent::ObstacleCleared { score });
            return false;
        }
        if collides(&player_rect, &obstacle.rect()) {
            hit = true;
        }
        true
    });
    state.score = score;

    if hit {
        state.game_over = true;
        events.push(GameEvent::Collision { score });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Obstacle;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size: Vec2::new(50.0, 50.0),
            speed: 15.0,
        }
    }

    /// Config whose spawner never fires within a test's horizon
    fn no_spawn_config() -> GameConfig {
        GameConfig {
            spawn_frequency: 1_000_000,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_first_spawn_after_ten_ticks() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = Pcg32::seed_from_u64(12345);

        for _ in 0..9 {
            tick(&mut state, &mut rng);
        }
        assert!(state.obstacles.is_empty());

        let events = tick(&mut state, &mut rng);
        assert_eq!(state.frame_count, 10);
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at -50 and advanced once on the same tick
        assert_eq!(state.obstacles[0].pos.y, -50.0 + 15.0);
        assert!(matches!(events[0], GameEvent::ObstacleSpawned { .. }));
        // Player untouched without input
        assert_eq!(state.player.pos, Vec2::new(175.0, 540.0));
    }

    #[test]
    fn test_obstacle_advances_each_tick() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..19 {
            tick(&mut state, &mut rng);
        }
        // Spawned on tick 10, advanced on ticks 10..=19
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.y, -50.0 + 10.0 * 15.0);
    }

    #[test]
    fn test_exit_scores_and_removes() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        // Far from the player, one step from exiting
        state.obstacles.push(obstacle_at(0.0, 590.0));
        state.obstacles.push(obstacle_at(0.0, 100.0));

        let events = tick(&mut state, &mut rng);

        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.y, 115.0);
        assert_eq!(events, vec![GameEvent::ObstacleCleared { score: 1 }]);
    }

    #[test]
    fn test_exit_at_field_height_is_kept() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        state.obstacles.push(obstacle_at(0.0, 585.0));

        tick(&mut state, &mut rng);

        // y == 600 is not past the bottom yet
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_adjacent_exits_both_processed() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        state.obstacles.push(obstacle_at(0.0, 595.0));
        state.obstacles.push(obstacle_at(100.0, 596.0));
        state.obstacles.push(obstacle_at(0.0, 10.0));

        tick(&mut state, &mut rng);

        assert_eq!(state.score, 2);
        assert_eq!(state.obstacles.len(), 1);
        // The survivor still advanced exactly once
        assert_eq!(state.obstacles[0].pos.y, 25.0);
    }

    #[test]
    fn test_collision_sets_game_over_and_keeps_obstacle() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        // Lands right on the player (175, 540) after one step
        state.obstacles.push(obstacle_at(175.0, 525.0));

        let events = tick(&mut state, &mut rng);

        assert!(state.game_over);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(events, vec![GameEvent::Collision { score: 0 }]);
    }

    #[test]
    fn test_collision_later_in_list_still_detected() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        state.obstacles.push(obstacle_at(0.0, 595.0));
        state.obstacles.push(obstacle_at(175.0, 525.0));

        tick(&mut state, &mut rng);

        assert!(state.game_over);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_touching_obstacle_is_not_a_hit() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        // Bottom edge ends exactly on the player's top edge (540)
        state.obstacles.push(obstacle_at(175.0, 475.0));

        tick(&mut state, &mut rng);

        assert!(!state.game_over);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = GameState::new(GameConfig::default());
        let mut rng = Pcg32::seed_from_u64(1);
        state.game_over = true;
        state.player.vel = Vec2::new(5.0, 0.0);
        state.obstacles.push(obstacle_at(0.0, 100.0));

        let events = tick(&mut state, &mut rng);

        assert!(events.is_empty());
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.player.pos, Vec2::new(175.0, 540.0));
        assert_eq!(state.obstacles[0].pos.y, 100.0);
    }

    #[test]
    fn test_key_state_last_write_and_zero_on_release() {
        let mut state = GameState::new(GameConfig::default());

        apply_key_down(&mut state, Direction::Right);
        assert_eq!(state.player.vel, Vec2::new(5.0, 0.0));

        // Opposite key overrides
        apply_key_down(&mut state, Direction::Left);
        assert_eq!(state.player.vel.x, -5.0);

        apply_key_down(&mut state, Direction::Up);
        assert_eq!(state.player.vel, Vec2::new(-5.0, -5.0));

        // Releasing Right zeroes the axis even though Left is still held
        apply_key_up(&mut state, Direction::Right);
        assert_eq!(state.player.vel, Vec2::new(0.0, -5.0));

        apply_key_up(&mut state, Direction::Down);
        assert_eq!(state.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_player_moves_with_velocity() {
        let mut state = GameState::new(no_spawn_config());
        let mut rng = Pcg32::seed_from_u64(1);
        apply_key_down(&mut state, Direction::Left);
        for _ in 0..3 {
            tick(&mut state, &mut rng);
        }
        assert_eq!(state.player.pos, Vec2::new(160.0, 540.0));
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_field(
            seed in any::<u64>(),
            inputs in proptest::collection::vec((direction_strategy(), any::<bool>()), 0..300),
        ) {
            let mut state = GameState::new(GameConfig::default());
            let mut rng = Pcg32::seed_from_u64(seed);
            for (direction, pressed) in inputs {
                if pressed {
                    apply_key_down(&mut state, direction);
                } else {
                    apply_key_up(&mut state, direction);
                }
                // Keep the run alive so the player keeps moving
                state.game_over = false;
                tick(&mut state, &mut rng);
                let p = state.player.rect();
                prop_assert!(p.left() >= 0.0 && p.right() <= 400.0);
                prop_assert!(p.top() >= 0.0 && p.bottom() <= 600.0);
            }
        }

        #[test]
        fn prop_score_never_decreases(seed in any::<u64>(), ticks in 1usize..400) {
            let mut state = GameState::new(GameConfig::default());
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut last = 0;
            for _ in 0..ticks {
                tick(&mut state, &mut rng);
                prop_assert!(state.score >= last);
                last = state.score;
                prop_assert!(state.obstacles.iter().all(|o| o.pos.y <= 600.0));
            }
        }
    }
}
