//! Property tests for the simulation's universal guarantees

use asteroids::GameConfig;
use asteroids::sim::{Asteroid, CircularBody, Circular};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn vec2(range: f32) -> impl Strategy<Value = Vec2> {
    (-range..range, -range..range).prop_map(|(x, y)| Vec2::new(x, y))
}

fn body() -> impl Strategy<Value = CircularBody> {
    (vec2(500.0), vec2(200.0), 0.5f32..80.0)
        .prop_map(|(pos, vel, radius)| CircularBody::new(pos, radius).with_velocity(vel))
}

proptest! {
    #[test]
    fn collision_is_symmetric(a in body(), b in body()) {
        prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
    }

    #[test]
    fn movement_is_linear(start in body(), dt1 in 0.0f32..2.0, dt2 in 0.0f32..2.0) {
        let mut stepped = start;
        stepped.advance(dt1);
        stepped.advance(dt2);

        let mut once = start;
        once.advance(dt1 + dt2);

        prop_assert!((stepped.pos - once.pos).length() < 1e-2);
        prop_assert_eq!(stepped.vel, start.vel);
    }

    #[test]
    fn small_asteroids_never_split(seed in any::<u64>(), radius in 0.5f32..=20.0, vel in vec2(200.0)) {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let rock = Asteroid::new(Vec2::ZERO, radius, vel);
        prop_assert!(rock.split(&mut rng, &config).is_none());
    }

    #[test]
    fn large_asteroids_split_in_two(seed in any::<u64>(), radius in 20.5f32..200.0, vel in vec2(200.0), pos in vec2(500.0)) {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let rock = Asteroid::new(pos, radius, vel);

        let children = rock.split(&mut rng, &config);
        prop_assert!(children.is_some());
        for child in children.unwrap() {
            prop_assert_eq!(child.body.pos, pos);
            prop_assert!((child.body.radius - (radius - config.asteroid_min_radius)).abs() < 1e-4);
            let expected = vel.length() * config.split_speed_factor;
            prop_assert!((child.body().vel.length() - expected).abs() < 1e-2 * expected.max(1.0));
        }
    }

    #[test]
    fn split_depth_is_bounded(seed in any::<u64>(), radius in 1.0f32..120.0) {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut generation = vec![Asteroid::new(Vec2::ZERO, radius, Vec2::new(30.0, 0.0))];
        let mut depth = 0;
        while !generation.is_empty() {
            depth += 1;
            generation = generation
                .iter()
                .filter_map(|rock| rock.split(&mut rng, &config))
                .flatten()
                .collect();
        }
        prop_assert!(depth <= config.max_split_depth(radius));
    }
}
