//! The player's ship

use glam::Vec2;

use super::body::{Circular, CircularBody};
use super::projectile::Projectile;
use super::tick::TickInput;
use crate::config::GameConfig;
use crate::heading;

/// Player-controlled ship
///
/// Thrust moves the ship directly along its heading (no inertia), so the body
/// velocity stays zero. Rotation is in degrees and is never wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: CircularBody,
    /// Facing angle (degrees, 0 = +Y)
    pub rotation: f32,
    /// Seconds until the next shot is allowed. Keeps counting down while idle
    /// and may go negative.
    pub shot_cooldown: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            body: CircularBody::new(pos, radius),
            rotation: 0.0,
            shot_cooldown: 0.0,
        }
    }

    /// Spawn at the center of the screen
    pub fn centered(config: &GameConfig) -> Self {
        Self::new(
            Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0),
            config.player_radius,
        )
    }

    /// Unit vector the ship is facing
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading(self.rotation)
    }

    /// Move along the heading; negative `dt` reverses at the same speed
    pub fn thrust(&mut self, dt: f32, speed: f32) {
        self.body.pos += self.forward() * speed * dt;
    }

    /// Turn by `turn_speed * dt` degrees (positive = clockwise on a y-down screen)
    pub fn turn(&mut self, dt: f32, turn_speed: f32) {
        self.rotation += turn_speed * dt;
    }

    /// Apply one tick of input. Returns the shot fired this tick, if any.
    pub fn update(&mut self, input: &TickInput, dt: f32, config: &GameConfig) -> Option<Projectile> {
        if input.forward {
            self.thrust(dt, config.player_speed);
        }
        if input.backward {
            self.thrust(-dt, config.player_speed);
        }
        if input.rotate_left {
            self.turn(-dt, config.player_turn_speed);
        }
        if input.rotate_right {
            self.turn(dt, config.player_turn_speed);
        }

        let shot = if input.fire && self.shot_cooldown <= 0.0 {
            self.shot_cooldown = config.player_shoot_cooldown_seconds;
            Some(self.shoot(config))
        } else {
            None
        };

        self.shot_cooldown -= dt;
        shot
    }

    /// Build a shot leaving the ship's center along its heading
    pub fn shoot(&self, config: &GameConfig) -> Projectile {
        Projectile::new(
            self.body.pos,
            config.shot_radius,
            self.forward() * config.player_shoot_speed,
        )
    }

    /// Ship silhouette: nose, then the two rear corners
    pub fn triangle(&self) -> [Vec2; 3] {
        let forward = self.forward();
        let right = heading(self.rotation + 90.0) * self.body.radius / 1.5;
        let pos = self.body.pos;
        let radius = self.body.radius;

        let nose = pos + forward * radius;
        let rear_left = pos - forward * radius - right;
        let rear_right = pos - forward * radius + right;
        [nose, rear_left, rear_right]
    }
}

impl Circular for Player {
    fn body(&self) -> &CircularBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut CircularBody {
        &mut self.body
    }
}
