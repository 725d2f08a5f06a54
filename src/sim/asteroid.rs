//! Asteroids and their fragmentation
//!
//! A destroyed asteroid breaks into two children that are one size step
//! smaller and fly apart at a random fan-out angle. Asteroids at or below the
//! minimum radius are simply destroyed. Every split removes exactly
//! `min_radius`, so any chain of splits terminates.

use glam::Vec2;
use rand::Rng;

use super::body::{Circular, CircularBody};
use crate::config::GameConfig;
use crate::rotate_degrees;

/// A drifting rock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub body: CircularBody,
}

impl Asteroid {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            body: CircularBody::new(pos, radius).with_velocity(vel),
        }
    }

    /// Whether destroying this asteroid yields children
    #[inline]
    pub fn can_split(&self, min_radius: f32) -> bool {
        self.body.radius > min_radius
    }

    /// Fragments for a fan-out of `angle` degrees, or `None` for a terminal rock
    pub fn split_at_angle(&self, angle: f32, min_radius: f32, speed_factor: f32) -> Option<[Asteroid; 2]> {
        if !self.can_split(min_radius) {
            return None;
        }

        let radius = self.body.radius - min_radius;
        let pos = self.body.pos;
        let vel = self.body.vel;
        Some([
            Asteroid::new(pos, radius, rotate_degrees(vel, angle) * speed_factor),
            Asteroid::new(pos, radius, rotate_degrees(vel, -angle) * speed_factor),
        ])
    }

    /// Fragments with a random fan-out angle drawn from the configured range
    pub fn split<R: Rng>(&self, rng: &mut R, config: &GameConfig) -> Option<[Asteroid; 2]> {
        if !self.can_split(config.asteroid_min_radius) {
            return None;
        }
        let angle = rng.random_range(config.split_angle_min..=config.split_angle_max);
        self.split_at_angle(angle, config.asteroid_min_radius, config.split_speed_factor)
    }
}

impl Circular for Asteroid {
    fn body(&self) -> &CircularBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut CircularBody {
        &mut self.body
    }
}
