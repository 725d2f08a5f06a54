//! Asteroids - a minimal ship-versus-rocks arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, splitting, collisions)
//! - `renderer`: Draw-request interface plus vertex and display-list backends
//! - `platform`: Input, clock and event-log collaborators
//! - `session`: Frame loop gluing the collaborators to the simulation
//! - `config`: Validated, data-driven game constants

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use session::{EndReason, Session, SessionEnd};

use glam::Vec2;

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Frame rate cap for the wall clock
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta fed to a tick (stalls are clamped, not replayed)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Smallest asteroid; also the radius lost on every split
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    /// Number of spawn size categories
    pub const ASTEROID_KINDS: u32 = 3;
    pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
    pub const ASTEROID_SPAWN_RATE_SECONDS: f32 = 0.8;

    /// Split fan-out angle range (degrees)
    pub const SPLIT_ANGLE_MIN: f32 = 20.0;
    pub const SPLIT_ANGLE_MAX: f32 = 50.0;
    /// Children fly this much faster than their parent
    pub const SPLIT_SPEED_FACTOR: f32 = 1.2;

    /// Spawn speed range (pixels/s)
    pub const SPAWN_SPEED_MIN: f32 = 40.0;
    pub const SPAWN_SPEED_MAX: f32 = 100.0;
    /// Max trajectory deviation from the edge's inward direction (degrees)
    pub const SPAWN_ANGLE_JITTER: f32 = 30.0;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
    pub const PLAYER_SHOOT_COOLDOWN_SECONDS: f32 = 0.3;

    pub const SHOT_RADIUS: f32 = 5.0;
    pub const LINE_WIDTH: f32 = 2.0;

    /// Ticks between state snapshots sent to the event log (1 s at 60 Hz)
    pub const SNAPSHOT_INTERVAL_TICKS: u64 = 60;
}

/// Rotate a vector counter-clockwise by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit facing vector for a rotation in degrees (0 faces +Y)
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    rotate_degrees(Vec2::Y, rotation)
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}
