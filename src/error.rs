//! Startup error types
//!
//! A running simulation never fails; everything here is raised while loading
//! or validating configuration, before the first tick.

use thiserror::Error;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{field}` must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be non-negative and finite, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("`asteroid_kinds` must be at least 1")]
    ZeroKinds,

    #[error(
        "`asteroid_max_radius` ({max_radius}) is smaller than the largest spawn size ({required}); asteroids would spawn on screen"
    )]
    SpawnInsideScreen { max_radius: f32, required: f32 },

    #[error("`snapshot_interval_ticks` must be at least 1")]
    ZeroSnapshotInterval,

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
