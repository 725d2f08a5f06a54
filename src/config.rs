//! Game configuration
//!
//! Every tunable lives here. Defaults come from `crate::consts`; a JSON file
//! can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "ASTEROIDS_CONFIG";

/// Game constants, injectable at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Frame rate cap for the wall clock
    pub target_fps: u32,
    pub line_width: f32,

    // === Asteroids ===
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub asteroid_kinds: u32,
    pub asteroid_spawn_rate_seconds: f32,
    /// Split fan-out angle range (degrees)
    pub split_angle_min: f32,
    pub split_angle_max: f32,
    pub split_speed_factor: f32,
    pub spawn_speed_min: f32,
    pub spawn_speed_max: f32,
    /// Trajectory jitter (degrees, applied as ±jitter)
    pub spawn_angle_jitter: f32,

    // === Player ===
    pub player_radius: f32,
    pub player_speed: f32,
    /// Degrees per second
    pub player_turn_speed: f32,
    pub player_shoot_speed: f32,
    pub player_shoot_cooldown_seconds: f32,
    pub shot_radius: f32,

    // === Housekeeping ===
    /// Ticks between state snapshots sent to the event log
    pub snapshot_interval_ticks: u64,
    /// Remove projectiles this far beyond the screen edge (None keeps them forever)
    pub projectile_cull_margin: Option<f32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: TARGET_FPS,
            line_width: LINE_WIDTH,

            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_kinds: ASTEROID_KINDS,
            asteroid_spawn_rate_seconds: ASTEROID_SPAWN_RATE_SECONDS,
            split_angle_min: SPLIT_ANGLE_MIN,
            split_angle_max: SPLIT_ANGLE_MAX,
            split_speed_factor: SPLIT_SPEED_FACTOR,
            spawn_speed_min: SPAWN_SPEED_MIN,
            spawn_speed_max: SPAWN_SPEED_MAX,
            spawn_angle_jitter: SPAWN_ANGLE_JITTER,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            player_shoot_cooldown_seconds: PLAYER_SHOOT_COOLDOWN_SECONDS,
            shot_radius: SHOT_RADIUS,

            snapshot_interval_ticks: SNAPSHOT_INTERVAL_TICKS,
            projectile_cull_margin: None,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedRange { field, min, max })
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `$ASTEROIDS_CONFIG` if set, otherwise validated defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default config");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        positive("line_width", self.line_width)?;
        if self.target_fps == 0 {
            return Err(ConfigError::NonPositive {
                field: "target_fps",
                value: 0.0,
            });
        }

        positive("asteroid_min_radius", self.asteroid_min_radius)?;
        positive("asteroid_max_radius", self.asteroid_max_radius)?;
        if self.asteroid_kinds == 0 {
            return Err(ConfigError::ZeroKinds);
        }
        let required = self.largest_spawn_radius();
        if self.asteroid_max_radius < required {
            return Err(ConfigError::SpawnInsideScreen {
                max_radius: self.asteroid_max_radius,
                required,
            });
        }
        positive("asteroid_spawn_rate_seconds", self.asteroid_spawn_rate_seconds)?;

        non_negative("split_angle_min", self.split_angle_min)?;
        non_negative("split_angle_max", self.split_angle_max)?;
        ordered("split_angle", self.split_angle_min, self.split_angle_max)?;
        positive("split_speed_factor", self.split_speed_factor)?;
        non_negative("spawn_speed_min", self.spawn_speed_min)?;
        non_negative("spawn_speed_max", self.spawn_speed_max)?;
        ordered("spawn_speed", self.spawn_speed_min, self.spawn_speed_max)?;
        non_negative("spawn_angle_jitter", self.spawn_angle_jitter)?;

        positive("player_radius", self.player_radius)?;
        positive("shot_radius", self.shot_radius)?;
        non_negative("player_speed", self.player_speed)?;
        non_negative("player_turn_speed", self.player_turn_speed)?;
        non_negative("player_shoot_speed", self.player_shoot_speed)?;
        non_negative(
            "player_shoot_cooldown_seconds",
            self.player_shoot_cooldown_seconds,
        )?;

        if self.snapshot_interval_ticks == 0 {
            return Err(ConfigError::ZeroSnapshotInterval);
        }
        if let Some(margin) = self.projectile_cull_margin {
            non_negative("projectile_cull_margin", margin)?;
        }
        Ok(())
    }

    /// Radius of the largest spawn category
    pub fn largest_spawn_radius(&self) -> f32 {
        self.asteroid_min_radius * self.asteroid_kinds as f32
    }

    /// Upper bound on split generations for an asteroid of `radius`
    pub fn max_split_depth(&self, radius: f32) -> u32 {
        (radius / self.asteroid_min_radius).ceil() as u32
    }
}
