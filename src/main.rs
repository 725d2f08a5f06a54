//! Asteroids entry point
//!
//! Runs a headless session: the autopilot flies, frames are tessellated but
//! not shown. A windowed front end only needs to supply its own `Renderer`
//! and `InputSource`.

use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use asteroids::platform::{Autopilot, EventLog, FrameClock, JsonLinesLog, NullLog};
use asteroids::renderer::VertexRenderer;
use asteroids::sim::GameState;
use asteroids::{EndReason, GameConfig, Session};

/// Optional fixed seed for reproducible runs
const SEED_ENV_VAR: &str = "ASTEROIDS_SEED";
/// Optional JSON-lines event log path
const EVENT_LOG_ENV_VAR: &str = "ASTEROIDS_EVENT_LOG";
/// Optional frame limit
const MAX_FRAMES_ENV_VAR: &str = "ASTEROIDS_MAX_FRAMES";

fn seed_from_env() -> u64 {
    std::env::var(SEED_ENV_VAR)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
}

fn event_log_from_env() -> Box<dyn EventLog> {
    let Some(path) = std::env::var_os(EVENT_LOG_ENV_VAR) else {
        return Box::new(NullLog);
    };
    match File::create(&path) {
        Ok(file) => {
            log::info!("Writing events to {}", path.to_string_lossy());
            Box::new(JsonLinesLog::new(BufWriter::new(file)))
        }
        Err(e) => {
            log::warn!("Cannot open event log {}: {}", path.to_string_lossy(), e);
            Box::new(NullLog)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Asteroids (headless) starting...");

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    let seed = seed_from_env();
    let max_frames = std::env::var(MAX_FRAMES_ENV_VAR)
        .ok()
        .and_then(|s| s.parse().ok());

    let mut clock = FrameClock::new(config.target_fps);
    let mut session = Session::new(GameState::new(config, seed));
    let mut event_log = event_log_from_env();

    let end = session.run(
        &mut Autopilot::new(),
        &mut clock,
        &mut VertexRenderer::new(),
        event_log.as_mut(),
        max_frames,
    );

    match end.reason {
        EndReason::GameOver => println!("Game over! Survived {:.1}s", end.elapsed),
        EndReason::Quit => println!("Bye!"),
        EndReason::TickLimit => println!("Stopped after {} frames", end.ticks),
    }
    ExitCode::SUCCESS
}
