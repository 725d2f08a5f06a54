//! Frame clocks

use std::time::{Duration, Instant};

/// Source of per-frame time deltas
pub trait Clock {
    /// Seconds since the previous call (waits first if a frame cap applies)
    fn tick(&mut self) -> f32;

    /// Frame-rate cap, if any
    fn target_fps(&self) -> Option<u32> {
        None
    }
}

/// Constant delta, no waiting. Used for headless runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}

/// Wall clock that sleeps to hold a frame-rate cap
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_budget: Duration,
    fps: u32,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            last: Instant::now(),
            frame_budget: Duration::from_secs_f64(1.0 / fps as f64),
            fps,
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> f32 {
        let spent = self.last.elapsed();
        if spent < self.frame_budget {
            std::thread::sleep(self.frame_budget - spent);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }

    fn target_fps(&self) -> Option<u32> {
        Some(self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::from_fps(50);
        assert_eq!(clock.tick(), 0.02);
        assert_eq!(clock.target_fps(), None);
    }

    #[test]
    fn test_frame_clock_caps_rate() {
        let mut clock = FrameClock::new(200);
        let dt = clock.tick();
        assert!(dt >= 0.005 - 1e-4, "dt {dt}");
        assert_eq!(clock.target_fps(), Some(200));
    }
}
