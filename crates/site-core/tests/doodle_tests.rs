// Host-side tests for the autonomous doodle paths.

use glam::DVec2;
use rand::prelude::*;
use site_core::config::{JitterParams, SpiralParams};
use site_core::doodle::{Doodler, Jitter, Spiral};
use site_core::{Bounds, DoodleStrategy};
use std::f64::consts::TAU;

fn bounds(w: f64, h: f64) -> Bounds {
    Bounds {
        width: w,
        height: h,
        margin: 0.99,
    }
}

#[test]
fn bounds_exclude_edges_and_margin() {
    let b = bounds(800.0, 600.0);
    assert!(b.contains(DVec2::new(400.0, 300.0)));
    assert!(!b.contains(DVec2::new(0.0, 300.0)));
    assert!(!b.contains(DVec2::new(400.0, 0.0)));
    assert!(!b.contains(DVec2::new(792.0, 300.0)));
    assert!(!b.contains(DVec2::new(400.0, 594.0)));
    assert!(b.contains(DVec2::new(791.9, 593.9)));
}

#[test]
fn spiral_completes_one_revolution_in_360_steps() {
    let b = bounds(800.0, 600.0);
    let mut spiral = Spiral::new(SpiralParams::default(), &b);
    for _ in 0..360 {
        let p = spiral.next_point(&b);
        assert!(b.contains(p));
    }
    assert!((spiral.angle() - TAU).abs() < 1e-9);
    assert!((spiral.radius() - (135.0 + 36.0)).abs() < 1e-9);
    assert_eq!(spiral.direction(), 1.0);
}

#[test]
fn spiral_points_lie_on_current_radius() {
    let b = bounds(800.0, 600.0);
    let mut spiral = Spiral::new(SpiralParams::default(), &b);
    for _ in 0..50 {
        let p = spiral.next_point(&b);
        let d = (p - spiral.center()).length();
        assert!((d - spiral.radius()).abs() < 1e-9);
    }
}

#[test]
fn spiral_resets_and_reverses_at_the_boundary() {
    let b = bounds(800.0, 600.0);
    let mut spiral = Spiral::new(SpiralParams::default(), &b);
    let mut saw_reset = false;
    for _ in 0..20_000 {
        let before = spiral.radius();
        let p = spiral.next_point(&b);
        assert!(b.contains(p));
        if spiral.radius() < before {
            saw_reset = true;
            assert_eq!(spiral.direction(), -1.0);
            assert!((spiral.radius() - 135.1).abs() < 1e-9);
            break;
        }
    }
    assert!(saw_reset, "spiral never reached the boundary");
}

#[test]
fn spiral_terminates_for_every_viewport_above_base_diameter() {
    for w in (271..1200).step_by(37) {
        for h in (271..1000).step_by(41) {
            let b = bounds(w as f64, h as f64);
            let mut spiral = Spiral::new(SpiralParams::default(), &b);
            for _ in 0..2_000 {
                let p = spiral.next_point(&b);
                assert!(b.contains(p), "{w}x{h}: {p:?} escaped");
            }
        }
    }
}

#[test]
fn spiral_falls_back_to_center_on_tiny_surfaces() {
    let b = bounds(100.0, 80.0);
    let mut spiral = Spiral::new(SpiralParams::default(), &b);
    let p = spiral.next_point(&b);
    assert_eq!(p, DVec2::new(50.0, 40.0));
}

#[test]
fn jitter_stays_within_offset_and_bounds() {
    let b = bounds(640.0, 480.0);
    let jitter = Jitter::new(JitterParams::default());
    let mut rng = StdRng::seed_from_u64(7);
    let mut cursor = DVec2::new(2.0, 2.0);
    for _ in 0..5_000 {
        let next = jitter.next_point(cursor, &b, &mut rng);
        assert!(b.contains(next));
        assert!((next.x - cursor.x).abs() <= 15.0);
        assert!((next.y - cursor.y).abs() <= 15.0);
        cursor = next;
    }
}

#[test]
fn jitter_from_far_outside_parks_at_center() {
    let b = bounds(640.0, 480.0);
    let jitter = Jitter::new(JitterParams::default());
    let mut rng = StdRng::seed_from_u64(1);
    let next = jitter.next_point(DVec2::new(5_000.0, 5_000.0), &b, &mut rng);
    assert_eq!(next, b.center());
}

#[test]
fn doodler_dispatches_on_strategy() {
    let b = bounds(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(3);
    let mut spiral = Doodler::new(DoodleStrategy::Spiral(SpiralParams::default()), &b);
    let p = spiral.next_point(b.center(), &b, &mut rng);
    assert!(((p - b.center()).length() - 135.1).abs() < 1e-9);

    let mut jitter = Doodler::new(DoodleStrategy::Jitter(JitterParams::default()), &b);
    let p = jitter.next_point(b.center(), &b, &mut rng);
    assert!((p - b.center()).abs().max_element() <= 15.0);
}
