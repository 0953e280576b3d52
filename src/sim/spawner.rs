//! Obstacle spawning on a fixed tick cadence

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use crate::config::GameConfig;

/// Creates obstacles above the field every `frequency` ticks
#[derive(Debug, Clone)]
pub struct Spawner {
    frequency: u64,
    field_width: f32,
    size: Vec2,
    speed: f32,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            frequency: config.spawn_frequency.max(1),
            field_width: config.field_width,
            size: Vec2::new(config.obstacle_width, config.obstacle_height),
            speed: config.obstacle_speed,
        }
    }

    /// Spawn one obstacle if `frame_count` lands on the cadence
    ///
    /// x is uniform in `[0, field_width - obstacle_width]`; the obstacle starts
    /// fully above the visible field.
    pub fn try_spawn<R: Rng>(&self, frame_count: u64, rng: &mut R) -> Option<Obstacle> {
        if !frame_count.is_multiple_of(self.frequency) {
            return None;
        }
        let max_x = (self.field_width - self.size.x).max(0.0);
        let x = rng.random_range(0.0..=max_x);
        Some(Obstacle {
            pos: Vec2::new(x, -self.size.y),
            size: self.size,
            speed: self.speed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_only_on_cadence() {
        let spawner = Spawner::new(&GameConfig::default());
        let mut rng = Pcg32::seed_from_u64(1);

        let spawned: Vec<u64> = (1..=35)
            .filter(|&frame| spawner.try_spawn(frame, &mut rng).is_some())
            .collect();
        assert_eq!(spawned, vec![10, 20, 30]);
    }

    #[test]
    fn test_spawn_position_in_range() {
        let spawner = Spawner::new(&GameConfig::default());
        let mut rng = Pcg32::seed_from_u64(42);

        for i in 1..=200 {
            let obstacle = spawner.try_spawn(i * 10, &mut rng).expect("on cadence");
            assert!(obstacle.pos.x >= 0.0 && obstacle.pos.x <= 350.0);
            assert_eq!(obstacle.pos.y, -50.0);
            assert_eq!(obstacle.speed, 15.0);
            assert_eq!(obstacle.size, Vec2::new(50.0, 50.0));
        }
    }

    #[test]
    fn test_same_seed_same_positions() {
        let spawner = Spawner::new(&GameConfig::default());
        let mut rng1 = Pcg32::seed_from_u64(7);
        let mut rng2 = Pcg32::seed_from_u64(7);

        for frame in [10, 20, 30] {
            let a = spawner.try_spawn(frame, &mut rng1).unwrap();
            let b = spawner.try_spawn(frame, &mut rng2).unwrap();
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn test_obstacle_as_wide_as_field_spawns_at_zero() {
        let config = GameConfig {
            obstacle_width: 400.0,
            ..GameConfig::default()
        };
        let spawner = Spawner::new(&config);
        let mut rng = Pcg32::seed_from_u64(3);
        let obstacle = spawner.try_spawn(10, &mut rng).unwrap();
        assert_eq!(obstacle.pos.x, 0.0);
    }
}
