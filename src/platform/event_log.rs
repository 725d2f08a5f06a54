//! Event logs
//!
//! A pure side channel: the game never depends on a log being present or on
//! writes succeeding.

use std::io::Write;

use serde::Serialize;

use crate::sim::{GameEvent, StateSnapshot};

/// Receives named game events and periodic state snapshots
pub trait EventLog {
    fn event(&mut self, event: &GameEvent);
    fn snapshot(&mut self, snapshot: &StateSnapshot);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl EventLog for NullLog {
    fn event(&mut self, _event: &GameEvent) {}
    fn snapshot(&mut self, _snapshot: &StateSnapshot) {}
}

/// Keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingLog {
    pub events: Vec<GameEvent>,
    pub snapshots: Vec<StateSnapshot>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded event names, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(GameEvent::name).collect()
    }
}

impl EventLog for RecordingLog {
    fn event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn snapshot(&mut self, snapshot: &StateSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record<'a> {
    Event(&'a GameEvent),
    State(&'a StateSnapshot),
}

/// Writes one JSON object per line
#[derive(Debug)]
pub struct JsonLinesLog<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> JsonLinesLog<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, record: Record<'_>) {
        // Stop after the first failure instead of warning every frame
        if self.failed {
            return;
        }
        let result = serde_json::to_writer(&mut self.writer, &record)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"))
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            log::warn!("Event log disabled after write error: {}", e);
            self.failed = true;
        }
    }
}

impl<W: Write> EventLog for JsonLinesLog<W> {
    fn event(&mut self, event: &GameEvent) {
        self.write(Record::Event(event));
    }

    fn snapshot(&mut self, snapshot: &StateSnapshot) {
        self.write(Record::State(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{EntityId, GameState};

    #[test]
    fn test_json_lines_format() {
        let mut log = JsonLinesLog::new(Vec::new());
        log.event(&GameEvent::ShotFired { id: EntityId(7) });
        log.snapshot(&GameState::new(GameConfig::default(), 1).snapshot());

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "event");
        assert_eq!(lines[0]["event"], "shot_fired");
        assert_eq!(lines[0]["id"], 7);
        assert_eq!(lines[1]["kind"], "state");
        assert_eq!(lines[1]["tick"], 0);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut log = JsonLinesLog::new(BrokenPipe);
        log.event(&GameEvent::Quit);
        log.event(&GameEvent::Quit);
        assert!(log.failed);
    }

    #[test]
    fn test_recording_log_names() {
        let mut log = RecordingLog::new();
        log.event(&GameEvent::PlayerHit {
            asteroid: EntityId(1),
        });
        assert_eq!(log.names(), vec!["player_hit"]);
    }
}
