//! Timed asteroid spawning from the screen edges

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use crate::config::GameConfig;
use crate::rotate_degrees;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit vector pointing into the play area
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Right => Vec2::NEG_X,
            Edge::Top => Vec2::Y,
            Edge::Bottom => Vec2::NEG_Y,
        }
    }

    /// Spawn point at normalized position `t` along the edge, pushed out by
    /// the largest asteroid radius so the rock starts fully off screen
    pub fn spawn_point(self, t: f32, config: &GameConfig) -> Vec2 {
        let w = config.screen_width;
        let h = config.screen_height;
        let margin = config.asteroid_max_radius;
        match self {
            Edge::Left => Vec2::new(-margin, t * h),
            Edge::Right => Vec2::new(w + margin, t * h),
            Edge::Top => Vec2::new(t * w, -margin),
            Edge::Bottom => Vec2::new(t * w, h + margin),
        }
    }
}

/// A freshly placed asteroid and where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub asteroid: Asteroid,
    pub edge: Edge,
}

/// Periodically produces asteroids at random edge positions
#[derive(Debug, Clone, Default)]
pub struct SpawnDirector {
    /// Seconds since the last spawn
    pub spawn_timer: f32,
}

impl SpawnDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the timer; yields one asteroid whenever the spawn interval is exceeded
    pub fn update<R: Rng>(&mut self, dt: f32, rng: &mut R, config: &GameConfig) -> Option<Spawn> {
        self.spawn_timer += dt;
        if self.spawn_timer <= config.asteroid_spawn_rate_seconds {
            return None;
        }
        self.spawn_timer = 0.0;
        Some(Self::spawn(rng, config))
    }

    /// Roll edge, speed, trajectory jitter, position and size for one asteroid
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig) -> Spawn {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];

        let speed = rng.random_range(config.spawn_speed_min..=config.spawn_speed_max);
        let jitter = rng.random_range(-config.spawn_angle_jitter..=config.spawn_angle_jitter);
        let vel = rotate_degrees(edge.inward() * speed, jitter);

        let pos = edge.spawn_point(rng.random_range(0.0..=1.0), config);

        let kind = rng.random_range(1..=config.asteroid_kinds);
        let radius = config.asteroid_min_radius * kind as f32;

        Spawn {
            asteroid: Asteroid::new(pos, radius, vel),
            edge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_no_spawn_before_interval() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut director = SpawnDirector::new();

        assert!(director.update(config.asteroid_spawn_rate_seconds, &mut rng, &config).is_none());
    }

    #[test]
    fn test_crossing_threshold_spawns_once_and_resets() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut director = SpawnDirector {
            spawn_timer: config.asteroid_spawn_rate_seconds - 0.001,
        };

        assert!(director.update(1.0 / 60.0, &mut rng, &config).is_some());
        assert_eq!(director.spawn_timer, 0.0);
        assert!(director.update(1.0 / 60.0, &mut rng, &config).is_none());
    }

    #[test]
    fn test_spawns_are_off_screen_and_inbound() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..500 {
            let Spawn { asteroid, edge } = SpawnDirector::spawn(&mut rng, &config);
            let body = asteroid.body;

            // Fully outside the visible area
            let outside = body.pos.x + body.radius <= 0.0
                || body.pos.y + body.radius <= 0.0
                || body.pos.x - body.radius >= config.screen_width
                || body.pos.y - body.radius >= config.screen_height;
            assert!(outside, "{edge:?} spawn at {:?} r={}", body.pos, body.radius);

            // Heading within jitter of the inward direction
            let deviation = edge.inward().angle_to(body.vel).to_degrees().abs();
            assert!(deviation <= config.spawn_angle_jitter + 1e-3);

            let speed = body.vel.length();
            assert!(speed >= config.spawn_speed_min - 1e-3 && speed <= config.spawn_speed_max + 1e-3);

            let kind = body.radius / config.asteroid_min_radius;
            assert!(kind.fract() == 0.0 && (1.0..=config.asteroid_kinds as f32).contains(&kind));
        }
    }

    #[test]
    fn test_every_edge_is_used() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let spawn = SpawnDirector::spawn(&mut rng, &config);
            let i = Edge::ALL.iter().position(|e| *e == spawn.edge).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
