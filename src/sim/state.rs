//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::body::Circular;
use super::player::Player;
use super::projectile::Projectile;
use super::registry::{EntityId, Group, Registry};
use super::spawn::{Edge, SpawnDirector};
use crate::config::GameConfig;
use crate::normalize_degrees;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// The ship was hit; terminal
    GameOver,
    /// Quit was requested; terminal
    Quit,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    AsteroidSpawned {
        id: EntityId,
        edge: Edge,
        radius: f32,
    },
    ShotFired {
        id: EntityId,
    },
    /// A projectile broke an asteroid into two fragments
    AsteroidSplit {
        id: EntityId,
        shot: EntityId,
        children: [EntityId; 2],
    },
    /// A projectile destroyed a minimum-size asteroid
    AsteroidDestroyed {
        id: EntityId,
        shot: EntityId,
    },
    PlayerHit {
        asteroid: EntityId,
    },
    Quit,
}

impl GameEvent {
    /// Stable event name for logs
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::AsteroidSpawned { .. } => "asteroid_spawned",
            GameEvent::ShotFired { .. } => "shot_fired",
            GameEvent::AsteroidSplit { .. } => "asteroid_split",
            GameEvent::AsteroidDestroyed { .. } => "asteroid_destroyed",
            GameEvent::PlayerHit { .. } => "player_hit",
            GameEvent::Quit => "quit",
        }
    }
}

/// Result of destroying an asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The asteroid was already gone
    Missing,
    /// Removed without children
    Destroyed,
    /// Removed and replaced by two fragments
    Split([EntityId; 2]),
}

/// Serializable per-body view for snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Periodic state dump for the event log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub elapsed: f32,
    pub phase: GamePhase,
    pub player_pos: Vec2,
    /// Player rotation normalized to [0, 360)
    pub player_heading: f32,
    pub shot_cooldown: f32,
    pub spawn_timer: f32,
    pub projectile_count: usize,
    pub asteroids: Vec<BodySnapshot>,
}

/// Complete simulation state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds
    pub elapsed: f32,
    pub player: Player,
    pub registry: Registry,
    pub spawner: SpawnDirector,
    /// Events raised since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the player centered on screen.
    /// `config` is expected to have passed `GameConfig::validate`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            player: Player::centered(&config),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            elapsed: 0.0,
            registry: Registry::new(),
            spawner: SpawnDirector::new(),
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn add_asteroid(&mut self, asteroid: Asteroid) -> EntityId {
        self.registry.enroll_asteroid(asteroid)
    }

    pub fn add_projectile(&mut self, projectile: Projectile) -> EntityId {
        self.registry.enroll_projectile(projectile)
    }

    /// Destroy an asteroid, enrolling its fragments when it is large enough
    pub fn split_asteroid(&mut self, id: EntityId) -> SplitOutcome {
        let Some(asteroid) = self.registry.get(id).and_then(|e| e.as_asteroid()).copied() else {
            return SplitOutcome::Missing;
        };
        self.registry.remove(id);

        match asteroid.split(&mut self.rng, &self.config) {
            Some([a, b]) => {
                let children = [self.add_asteroid(a), self.add_asteroid(b)];
                log::debug!(
                    "Asteroid {} (r={}) split into {} and {}",
                    id,
                    asteroid.body.radius,
                    children[0],
                    children[1]
                );
                SplitOutcome::Split(children)
            }
            None => {
                log::debug!("Asteroid {} destroyed", id);
                SplitOutcome::Destroyed
            }
        }
    }

    /// Drop projectiles that left the screen by more than the cull margin
    pub fn cull_projectiles(&mut self) -> usize {
        let Some(margin) = self.config.projectile_cull_margin else {
            return 0;
        };
        let (w, h) = (self.config.screen_width, self.config.screen_height);
        let gone: Vec<EntityId> = self
            .registry
            .projectiles()
            .filter(|(_, p)| p.is_off_screen(w, h, margin))
            .map(|(id, _)| id)
            .collect();
        for id in &gone {
            self.registry.remove(*id);
        }
        gone.len()
    }

    pub fn asteroid_count(&self) -> usize {
        self.registry.count(Group::Asteroids)
    }

    pub fn projectile_count(&self) -> usize {
        self.registry.count(Group::Projectiles)
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            tick: self.time_ticks,
            elapsed: self.elapsed,
            phase: self.phase,
            player_pos: self.player.body.pos,
            player_heading: normalize_degrees(self.player.rotation),
            shot_cooldown: self.player.shot_cooldown,
            spawn_timer: self.spawner.spawn_timer,
            projectile_count: self.projectile_count(),
            asteroids: self
                .registry
                .asteroids()
                .map(|(id, a)| {
                    let body = a.body();
                    BodySnapshot {
                        id,
                        pos: body.pos,
                        vel: body.vel,
                        radius: body.radius,
                    }
                })
                .collect(),
        }
    }
}
