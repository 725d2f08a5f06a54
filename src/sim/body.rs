//! Circular bodies: the shared shape behind every entity
//!
//! Everything in the game is a circle for collision purposes. The ship only
//! looks like a triangle.

use glam::Vec2;

/// Position, velocity and radius of a moving circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularBody {
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    pub radius: f32,
}

impl CircularBody {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Straight-line integration
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Circle overlap test (touching counts)
    #[inline]
    pub fn collides_with(&self, other: &CircularBody) -> bool {
        self.pos.distance(other.pos) <= self.radius + other.radius
    }
}

/// Shared capability of every simulated entity
pub trait Circular {
    fn body(&self) -> &CircularBody;
    fn body_mut(&mut self) -> &mut CircularBody;

    fn advance(&mut self, dt: f32) {
        self.body_mut().advance(dt);
    }

    fn collides_with<T: Circular + ?Sized>(&self, other: &T) -> bool {
        self.body().collides_with(other.body())
    }
}

impl Circular for CircularBody {
    fn body(&self) -> &CircularBody {
        self
    }

    fn body_mut(&mut self) -> &mut CircularBody {
        self
    }
}
