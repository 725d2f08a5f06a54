//! Input sources

use std::collections::VecDeque;

use crate::sim::TickInput;

/// Current state of the logical controls
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed sequence of inputs, then idles (or quits)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<TickInput>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// Send quit once the script runs out
    pub fn then_quit(mut self) -> Self {
        self.quit_when_done = true;
        self
    }

    /// Hold `input` for `frames` frames
    pub fn hold(mut self, input: TickInput, frames: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(input, frames));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        self.frames.pop_front().unwrap_or(TickInput {
            quit: self.quit_when_done,
            ..Default::default()
        })
    }
}

/// Hands-off pilot for headless runs: keeps turning and firing, with short
/// bursts of thrust
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    frame: u64,
}

impl Autopilot {
    /// Frames per thrust cycle
    const CYCLE: u64 = 180;
    /// Frames of thrust at the start of each cycle
    const THRUST: u64 = 20;

    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> TickInput {
        let phase = self.frame % Self::CYCLE;
        self.frame += 1;
        TickInput {
            forward: phase < Self::THRUST,
            rotate_right: phase >= Self::THRUST,
            fire: true,
            ..Default::default()
        }
    }
}
