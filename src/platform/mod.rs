//! Platform abstraction layer
//!
//! The collaborators the game loop talks to:
//! - Input (logical control state)
//! - Time (frame delta and frame-rate cap)
//! - Event log (side channel for events and periodic snapshots)

pub mod event_log;
pub mod input;
pub mod time;

pub use event_log::{EventLog, JsonLinesLog, NullLog, RecordingLog};
pub use input::{Autopilot, InputSource, ScriptedInput};
pub use time::{Clock, FixedClock, FrameClock};
