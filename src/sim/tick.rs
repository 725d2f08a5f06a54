//! Per-frame simulation tick
//!
//! Advances the game by one frame: input, spawning, movement, then collision
//! resolution. Collections are snapshotted before each pass, so entities
//! created mid-tick only join in on the next tick.

use super::body::Circular;
use super::registry::{EntityId, Group};
use super::state::{GameEvent, GamePhase, GameState, SplitOutcome};

/// Control state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    pub quit: bool,
}

/// What the caller should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GameOver,
    Quit,
}

impl TickOutcome {
    pub fn is_running(self) -> bool {
        self == TickOutcome::Running
    }
}

impl From<GamePhase> for TickOutcome {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Playing => TickOutcome::Running,
            GamePhase::GameOver => TickOutcome::GameOver,
            GamePhase::Quit => TickOutcome::Quit,
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    // Terminal phases never resume
    if state.phase.is_terminal() {
        return state.phase.into();
    }

    if input.quit {
        state.phase = GamePhase::Quit;
        state.push_event(GameEvent::Quit);
        log::info!("Quit requested at tick {}", state.time_ticks);
        return TickOutcome::Quit;
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    // Entities that exist before this tick's spawns
    let movers = state.registry.snapshot(Group::Updatable);

    if let Some(shot) = state.player.update(input, dt, &state.config) {
        let id = state.add_projectile(shot);
        state.push_event(GameEvent::ShotFired { id });
    }

    if let Some(spawn) = state.spawner.update(dt, &mut state.rng, &state.config) {
        let radius = spawn.asteroid.body.radius;
        let id = state.add_asteroid(spawn.asteroid);
        log::debug!("Spawned asteroid {} from {:?} (r={})", id, spawn.edge, radius);
        state.push_event(GameEvent::AsteroidSpawned {
            id,
            edge: spawn.edge,
            radius,
        });
    }

    for id in movers {
        if let Some(entity) = state.registry.get_mut(id) {
            entity.advance(dt);
        }
    }

    if let Some(asteroid) = resolve_collisions(state) {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::PlayerHit { asteroid });
        log::info!(
            "Game over: ship hit by asteroid {} at tick {}",
            asteroid,
            state.time_ticks
        );
        return TickOutcome::GameOver;
    }

    state.cull_projectiles();
    TickOutcome::Running
}

/// Check every asteroid against the player, then against every projectile.
/// Returns the asteroid that hit the player, if any.
fn resolve_collisions(state: &mut GameState) -> Option<EntityId> {
    let asteroids = state.registry.snapshot(Group::Asteroids);

    for asteroid_id in asteroids {
        // May have been split earlier this pass
        let Some(asteroid) = state.registry.get(asteroid_id).copied() else {
            continue;
        };
        if asteroid.collides_with(&state.player) {
            return Some(asteroid_id);
        }

        let projectiles = state.registry.snapshot(Group::Projectiles);
        for shot_id in projectiles {
            let hit = state
                .registry
                .get(shot_id)
                .is_some_and(|shot| shot.collides_with(&asteroid));
            if !hit {
                continue;
            }

            state.registry.remove(shot_id);
            match state.split_asteroid(asteroid_id) {
                SplitOutcome::Split(children) => state.push_event(GameEvent::AsteroidSplit {
                    id: asteroid_id,
                    shot: shot_id,
                    children,
                }),
                SplitOutcome::Destroyed => state.push_event(GameEvent::AsteroidDestroyed {
                    id: asteroid_id,
                    shot: shot_id,
                }),
                SplitOutcome::Missing => {}
            }
            // The asteroid is gone; remaining shots survive this tick
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Asteroid, Projectile};

    const DT: f32 = 1.0 / 60.0;

    /// State whose spawner never fires during a short test
    fn quiet_state(seed: u64) -> GameState {
        let config = GameConfig {
            asteroid_spawn_rate_seconds: 1000.0,
            ..Default::default()
        };
        GameState::new(config, seed)
    }

    #[test]
    fn test_idle_tick_moves_asteroids() {
        let mut state = quiet_state(1);
        let id = state.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), 20.0, Vec2::new(60.0, 0.0)));

        assert_eq!(tick(&mut state, &TickInput::default(), DT), TickOutcome::Running);
        let pos = state.registry.get(id).unwrap().body().pos;
        assert!((pos - Vec2::new(101.0, 100.0)).length() < 1e-4);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_fired_shot_starts_at_ship() {
        let mut state = quiet_state(1);
        state.player.body.pos = Vec2::new(100.0, 100.0);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &input, DT);
        let (_, shot) = state.registry.projectiles().next().expect("one shot");
        assert_eq!(shot.body.pos, Vec2::new(100.0, 100.0));
        assert!((shot.body.vel - Vec2::new(0.0, state.config.player_shoot_speed)).length() < 1e-3);
        assert!(matches!(state.events(), [GameEvent::ShotFired { .. }]));

        // It moves from the next tick on
        tick(&mut state, &TickInput::default(), DT);
        let (_, shot) = state.registry.projectiles().next().unwrap();
        assert!(shot.body.pos.y > 100.0);
    }

    #[test]
    fn test_player_hit_ends_game_once() {
        let mut state = quiet_state(1);
        let pos = state.player.body.pos;
        state.add_asteroid(Asteroid::new(pos + Vec2::new(30.0, 0.0), 20.0, Vec2::ZERO));

        assert_eq!(tick(&mut state, &TickInput::default(), DT), TickOutcome::GameOver);
        assert_eq!(state.phase, GamePhase::GameOver);
        let hits = state
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
            .count();
        assert_eq!(hits, 1);

        // Further ticks are no-ops
        let ticks = state.time_ticks;
        assert_eq!(tick(&mut state, &TickInput::default(), DT), TickOutcome::GameOver);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_shot_splits_asteroid() {
        let mut state = quiet_state(2);
        let rock = state.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), 40.0, Vec2::new(10.0, 0.0)));
        let shot = state.add_projectile(Projectile::new(Vec2::new(100.0, 130.0), 5.0, Vec2::ZERO));

        assert_eq!(tick(&mut state, &TickInput::default(), DT), TickOutcome::Running);
        assert!(!state.registry.contains(rock));
        assert!(!state.registry.contains(shot));
        assert_eq!(state.asteroid_count(), 2);
        assert!(matches!(
            state.events(),
            [GameEvent::AsteroidSplit { id, shot: s, .. }] if *id == rock && *s == shot
        ));
    }

    #[test]
    fn test_shot_destroys_small_asteroid() {
        let mut state = quiet_state(2);
        let rock = state.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), 20.0, Vec2::ZERO));
        state.add_projectile(Projectile::new(Vec2::new(100.0, 100.0), 5.0, Vec2::ZERO));

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.asteroid_count(), 0);
        assert_eq!(state.projectile_count(), 0);
        assert!(matches!(
            state.events(),
            [GameEvent::AsteroidDestroyed { id, .. }] if *id == rock
        ));
    }

    #[test]
    fn test_double_hit_splits_once() {
        let mut state = quiet_state(2);
        state.add_asteroid(Asteroid::new(Vec2::new(100.0, 100.0), 40.0, Vec2::new(10.0, 0.0)));
        state.add_projectile(Projectile::new(Vec2::new(100.0, 110.0), 5.0, Vec2::ZERO));
        state.add_projectile(Projectile::new(Vec2::new(100.0, 90.0), 5.0, Vec2::ZERO));

        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.asteroid_count(), 2);
        assert_eq!(state.projectile_count(), 1);
        let splits = state
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::AsteroidSplit { .. }))
            .count();
        assert_eq!(splits, 1);
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut state = quiet_state(1);
        let input = TickInput {
            quit: true,
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &input, DT), TickOutcome::Quit);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(tick(&mut state, &TickInput::default(), DT), TickOutcome::Quit);
    }

    #[test]
    fn test_spawner_runs_each_tick() {
        let mut state = GameState::new(GameConfig::default(), 11);
        let ticks = (state.config.asteroid_spawn_rate_seconds / DT).ceil() as usize + 1;
        for _ in 0..ticks {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.asteroid_count(), 1);
        assert!(state
            .events()
            .iter()
            .any(|e| matches!(e, GameEvent::AsteroidSpawned { .. })));
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed should produce identical results
        let mut state1 = GameState::new(GameConfig::default(), 99999);
        let mut state2 = GameState::new(GameConfig::default(), 99999);

        let inputs = [
            TickInput {
                rotate_left: true,
                fire: true,
                ..Default::default()
            },
            TickInput {
                forward: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, DT);
            tick(&mut state2, input, DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.snapshot(), state2.snapshot());
    }
}
