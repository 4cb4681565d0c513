// Host-side tests for sprite motion: speed governor, wall collision, release.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod physics {
    include!("../src/core/physics.rs");
}

use constants::*;
use glam::Vec2;
use physics::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn viewport() -> Bounds {
    Bounds::new(1280.0, 800.0, 64.0)
}

#[test]
fn governor_brings_fast_and_slow_sprites_into_cruising_band() {
    let starts = [
        Vec2::new(20.0, 0.0),
        Vec2::new(-14.0, 14.0),
        Vec2::new(3.0, -2.5),
        Vec2::new(0.01, 0.0),
        Vec2::new(-0.2, 0.3),
        Vec2::new(0.0, -0.0005),
    ];
    for start in starts {
        let mut v = start;
        let mut reached = None;
        for tick in 0..2000 {
            v = govern_speed(v, 1.0);
            let s = v.length();
            if (CRUISE_SPEED_MIN..=CRUISE_SPEED_MAX).contains(&s) {
                reached = Some(tick);
                break;
            }
        }
        assert!(reached.is_some(), "start {start:?} never reached band, ended at {v:?}");

        // and it stays there
        for _ in 0..500 {
            v = govern_speed(v, 1.0);
            let s = v.length();
            assert!(
                s >= CRUISE_SPEED_MIN - 1e-4 && s <= CRUISE_SPEED_MAX + 1e-4,
                "left the band at {s} from {start:?}"
            );
        }
    }
}

#[test]
fn governor_is_soft_not_a_snap() {
    let fast = Vec2::new(10.0, 0.0);
    let once = govern_speed(fast, 1.0);
    assert!((once.x - 9.6).abs() < 1e-5);

    let slow = Vec2::new(0.0, 0.25);
    let once = govern_speed(slow, 1.0);
    assert!((once.y - 0.2525).abs() < 1e-5);

    let cruising = Vec2::new(1.0, 1.0);
    assert_eq!(govern_speed(cruising, 1.0), cruising);
}

#[test]
fn governor_keeps_direction() {
    let v = Vec2::new(-6.0, 8.0);
    let g = govern_speed(v, 1.0);
    assert!((g.normalize() - v.normalize()).length() < 1e-5);
}

#[test]
fn collision_keeps_sprite_inside_playable_area() {
    let bounds = viewport();
    let size = Vec2::new(150.0, 120.0);
    assert!(bounds.fits(size));

    let positions = [-500.0_f32, -1.0, 0.0, 37.5, 640.0, 1200.0, 1279.0, 5000.0];
    let velocities = [-25.0_f32, -1.0, 0.0, 0.7, 25.0];
    for &px in &positions {
        for &py in &positions {
            for &vx in &velocities {
                for &vy in &velocities {
                    let mut body = Body::new(Vec2::new(px, py), Vec2::new(vx, vy), size);
                    step(&mut body, &bounds, 1.0);
                    let p = body.position;
                    assert!(p.x >= 0.0 && p.x + size.x <= bounds.width, "x out: {p:?}");
                    assert!(p.y >= bounds.top && p.y + size.y <= bounds.height, "y out: {p:?}");
                }
            }
        }
    }
}

#[test]
fn wall_hit_reflects_the_crossing_axis_only() {
    let bounds = viewport();
    let mut body = Body::new(
        Vec2::new(1279.0 - 100.0, 300.0),
        Vec2::new(1.5, 0.8),
        Vec2::new(100.0, 100.0),
    );
    let hit = step(&mut body, &bounds, 1.0);
    assert!(hit);
    assert_eq!(body.position.x, bounds.width - 100.0);
    assert!(body.velocity.x < 0.0);
    assert!(body.velocity.y > 0.0);
    // elastic: only the governor changes speed
    assert!((body.velocity.x.abs() - 1.5).abs() < 1e-5);
}

#[test]
fn top_exclusion_zone_acts_as_ceiling() {
    let bounds = viewport();
    let mut body = Body::new(
        Vec2::new(300.0, bounds.top + 0.5),
        Vec2::new(0.0, -1.5),
        Vec2::new(80.0, 80.0),
    );
    assert!(step(&mut body, &bounds, 1.0));
    assert_eq!(body.position.y, bounds.top);
    assert!(body.velocity.y > 0.0);
}

#[test]
fn sprite_outside_after_shrink_is_pushed_back_in_without_flipping_outward() {
    let bounds = Bounds::new(400.0, 400.0, 0.0);
    // already moving back inward
    let mut body = Body::new(
        Vec2::new(600.0, 100.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(50.0, 50.0),
    );
    collide(&mut body, &bounds);
    assert_eq!(body.position.x, 350.0);
    assert!(body.velocity.x < 0.0);
}

#[test]
fn variable_tick_intervals_scale_distance() {
    let bounds = viewport();
    let mut a = Body::new(Vec2::new(200.0, 200.0), Vec2::new(1.0, 0.0), Vec2::splat(50.0));
    let mut b = a;
    step(&mut a, &bounds, 1.0);
    step(&mut a, &bounds, 1.0);
    step(&mut b, &bounds, 2.0);
    assert!((a.position.x - b.position.x).abs() < 1e-4);
}

#[test]
fn ticks_from_dt_is_capped() {
    assert!((ticks_from_dt(Duration::from_secs_f64(1.0 / 60.0)) - 1.0).abs() < 1e-3);
    assert!((ticks_from_dt(Duration::from_secs_f64(1.0 / 30.0)) - 2.0).abs() < 1e-3);
    assert_eq!(ticks_from_dt(Duration::from_secs(5)), MAX_TICKS_PER_STEP);
    assert_eq!(ticks_from_dt(Duration::ZERO), 0.0);
}

#[test]
fn release_clamps_throw_magnitude() {
    let mut rng = StdRng::seed_from_u64(7);
    let v = release_velocity(Vec2::new(90.0, -120.0), &mut rng);
    assert!((v.length() - THROW_SPEED_MAX).abs() < 1e-3);
    assert!(v.x > 0.0 && v.y < 0.0);

    let gentle = Vec2::new(3.0, 4.0);
    assert_eq!(release_velocity(gentle, &mut rng), gentle);
}

#[test]
fn release_with_still_pointer_drifts_randomly() {
    let mut rng = StdRng::seed_from_u64(42);
    for throw in [Vec2::ZERO, Vec2::new(0.05, -0.09), Vec2::new(-0.099, 0.0)] {
        for _ in 0..200 {
            let v = release_velocity(throw, &mut rng);
            assert!(v != Vec2::ZERO);
            assert!(v.x.abs() <= DRIFT_SPEED_SPAN && v.y.abs() <= DRIFT_SPEED_SPAN);
            assert!(v.length() <= DRIFT_SPEED_SPAN * std::f32::consts::SQRT_2);
        }
    }
    // one axis above the threshold is a real throw
    let kept = release_velocity(Vec2::new(0.0, 0.2), &mut rng);
    assert_eq!(kept, Vec2::new(0.0, 0.2));
}

#[test]
fn spawn_position_stays_below_nav_and_inside_margin() {
    let bounds = viewport();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let p = spawn_position(&bounds, &mut rng);
        assert!(p.x >= 0.0 && p.x < bounds.width - SPAWN_MARGIN_PX);
        assert!(p.y >= bounds.top && p.y < bounds.height - SPAWN_MARGIN_PX);
    }

    let tiny = Bounds::new(120.0, 90.0, 40.0);
    let p = spawn_position(&tiny, &mut rng);
    assert_eq!(p, Vec2::new(0.0, 40.0));
}
