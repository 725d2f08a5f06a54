//! Player shots

use glam::Vec2;

use super::body::{Circular, CircularBody};

/// A shot fired by the player. Moves in a straight line until it hits
/// something (or is culled, when a cull margin is configured).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub body: CircularBody,
}

impl Projectile {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            body: CircularBody::new(pos, radius).with_velocity(vel),
        }
    }

    /// True once the shot is further than `margin` outside the screen
    pub fn is_off_screen(&self, width: f32, height: f32, margin: f32) -> bool {
        let p = self.body.pos;
        let r = self.body.radius + margin;
        p.x < -r || p.y < -r || p.x > width + r || p.y > height + r
    }
}

impl Circular for Projectile {
    fn body(&self) -> &CircularBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut CircularBody {
        &mut self.body
    }
}
