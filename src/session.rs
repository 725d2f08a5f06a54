//! Frame loop
//!
//! One iteration = one frame: poll input, step the simulation, forward
//! events, draw. The loop ends on quit or game over.

use crate::consts::MAX_FRAME_DT;
use crate::platform::{Clock, EventLog, InputSource};
use crate::renderer::{Renderer, draw_state};
use crate::sim::{GameState, TickOutcome, tick};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The ship was hit
    GameOver,
    /// Quit was requested
    Quit,
    /// The caller's frame limit ran out
    TickLimit,
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionEnd {
    pub reason: EndReason,
    pub ticks: u64,
    pub elapsed: f32,
}

/// Owns the game state and drives it with the external collaborators
pub struct Session {
    pub state: GameState,
    frames: u64,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self { state, frames: 0 }
    }

    /// Frames stepped so far (including the terminal one)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns the end reason once the game is over.
    pub fn step(
        &mut self,
        input: &mut dyn InputSource,
        clock: &mut dyn Clock,
        renderer: &mut dyn Renderer,
        log: &mut dyn EventLog,
    ) -> Option<EndReason> {
        let dt = clock.tick().clamp(0.0, MAX_FRAME_DT);
        let controls = input.poll();
        let outcome = tick(&mut self.state, &controls, dt);
        self.frames += 1;

        for event in self.state.drain_events() {
            log.event(&event);
        }
        let interval = self.state.config.snapshot_interval_ticks.max(1);
        if outcome != TickOutcome::Running || self.state.time_ticks % interval == 0 {
            log.snapshot(&self.state.snapshot());
        }

        match outcome {
            TickOutcome::Running => {
                draw_state(&self.state, renderer);
                None
            }
            TickOutcome::GameOver => Some(EndReason::GameOver),
            TickOutcome::Quit => Some(EndReason::Quit),
        }
    }

    /// Run until quit, game over, or `max_frames` frames (when given)
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        clock: &mut dyn Clock,
        renderer: &mut dyn Renderer,
        log: &mut dyn EventLog,
        max_frames: Option<u64>,
    ) -> SessionEnd {
        log::info!(
            "Session starting (seed {}, fps cap {:?})",
            self.state.seed,
            clock.target_fps()
        );

        let reason = loop {
            if max_frames.is_some_and(|max| self.frames >= max) {
                break EndReason::TickLimit;
            }
            if let Some(reason) = self.step(input, clock, renderer, log) {
                break reason;
            }
        };

        let end = SessionEnd {
            reason,
            ticks: self.state.time_ticks,
            elapsed: self.state.elapsed,
        };
        log::info!(
            "Session ended: {:?} after {} ticks ({:.1}s)",
            end.reason,
            end.ticks,
            end.elapsed
        );
        end
    }
}
