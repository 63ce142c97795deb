// Host-side tests for the surface tracker and the per-frame driver.

use glam::DVec2;
use rand::prelude::*;
use site_core::config::JitterParams;
use site_core::doodle::Doodler;
use site_core::{Animation, DoodleStrategy, InputMode, Painter, SimConfig, Surface, Viewport};

#[derive(Default)]
struct Recorder {
    fill: String,
    circles: usize,
    rects: Vec<(f64, f64, f64, f64, String)>,
}

impl Painter for Recorder {
    fn set_fill_style(&mut self, style: &str) {
        self.fill = style.to_string();
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rects.push((x, y, width, height, self.fill.clone()));
    }

    fn fill_circle(&mut self, _center: DVec2, _radius: f64) {
        self.circles += 1;
    }
}

fn viewport(w: f64, h: f64) -> Viewport {
    Viewport {
        width: w,
        height: h + 100.0,
        reserved_height: 100.0,
    }
}

/// Where the canvas sits in client space before any scrolling.
const CANVAS_TOP: DVec2 = DVec2::new(0.0, 60.0);

#[test]
fn surface_subtracts_reserved_chrome() {
    let s = Surface::new(viewport(800.0, 600.0), 0.99);
    assert_eq!(s.width(), 800.0);
    assert_eq!(s.height(), 600.0);
    assert_eq!(s.cursor(), DVec2::new(400.0, 300.0));
    assert_eq!(s.mode(), InputMode::Autonomous);
}

#[test]
fn surface_never_goes_negative() {
    let vp = Viewport {
        width: 300.0,
        height: 40.0,
        reserved_height: 90.0,
    };
    let s = Surface::new(vp, 0.99);
    assert_eq!(s.height(), 0.0);
}

#[test]
fn resize_recenters_a_parked_cursor_only() {
    let mut s = Surface::new(viewport(800.0, 600.0), 0.99);
    s.resize(viewport(1000.0, 700.0));
    assert_eq!(s.cursor(), DVec2::new(500.0, 350.0));

    s.set_cursor(DVec2::new(12.0, 34.0));
    s.resize(viewport(640.0, 480.0));
    assert_eq!(s.cursor(), DVec2::new(12.0, 34.0));
    assert_eq!(s.extent(), 640.0);
}

#[test]
fn pointer_moves_follow_input_mode() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = Surface::new(viewport(800.0, 600.0), 0.99);

    for _ in 0..100 {
        s.pointer_moved(DVec2::new(5.0, 65.0), CANVAS_TOP, &mut rng);
        let c = s.cursor();
        assert!(c.x >= 0.0 && c.x < 800.0 && c.y >= 0.0 && c.y < 600.0);
    }

    s.pointer_entered();
    assert_eq!(s.mode(), InputMode::Manual);
    s.pointer_moved(DVec2::new(120.0, 160.0), CANVAS_TOP, &mut rng);
    assert_eq!(s.cursor(), DVec2::new(120.0, 100.0));

    s.pointer_left();
    assert_eq!(s.mode(), InputMode::Autonomous);
}

#[test]
fn manual_cursor_follows_the_canvas_as_the_page_scrolls() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut s = Surface::new(viewport(800.0, 600.0), 0.99);
    s.pointer_entered();

    let client = DVec2::new(300.0, 250.0);
    s.pointer_moved(client, CANVAS_TOP, &mut rng);
    assert_eq!(s.cursor(), DVec2::new(300.0, 190.0));

    // Scrolled down 200px: the canvas top is now above the viewport.
    s.pointer_moved(client, CANVAS_TOP - DVec2::new(0.0, 200.0), &mut rng);
    assert_eq!(s.cursor(), DVec2::new(300.0, 390.0));
}

#[test]
fn collapsed_surface_ticks_without_doodling() {
    let vp = Viewport {
        width: 300.0,
        height: 40.0,
        reserved_height: 90.0,
    };
    let mut anim = Animation::new(SimConfig::default(), vp, 9);
    let mut painter = Recorder::default();
    assert!(!anim.surface().is_drawable());
    let parked = anim.surface().cursor();
    for _ in 0..50 {
        anim.tick(&mut painter);
    }
    assert_eq!(anim.surface().cursor(), parked);
    assert_eq!(painter.rects.len(), 50);
}

#[test]
fn animation_exposes_its_configuration() {
    let config = SimConfig {
        spawn_delay_ms: 250,
        ..SimConfig::default()
    };
    let anim = Animation::new(config.clone(), viewport(800.0, 600.0), 4);
    assert_eq!(anim.config(), &config);
}

#[test]
fn tick_fades_then_draws() {
    let mut anim = Animation::new(SimConfig::default(), viewport(800.0, 600.0), 42);
    let mut painter = Recorder::default();
    anim.spawn();
    anim.tick(&mut painter);
    assert_eq!(painter.rects.len(), 1);
    let (x, y, w, h, fill) = &painter.rects[0];
    assert_eq!((*x, *y, *w, *h), (0.0, 0.0, 800.0, 600.0));
    assert_eq!(fill, "rgba(0, 0, 0, 0.01)");
    assert_eq!(painter.circles, 30);
}

#[test]
fn autonomous_ticks_walk_the_spiral() {
    let mut anim = Animation::new(SimConfig::default(), viewport(800.0, 600.0), 42);
    let mut painter = Recorder::default();
    for _ in 0..360 {
        anim.tick(&mut painter);
    }
    let c = anim.surface().cursor();
    let center = DVec2::new(400.0, 300.0);
    assert!(((c - center).length() - 171.0).abs() < 1e-9);
    assert!((c.y - 300.0).abs() < 1e-6);
    match anim.doodler() {
        Doodler::Spiral(s) => assert!((s.radius() - 171.0).abs() < 1e-9),
        Doodler::Jitter(_) => panic!("reference configuration uses the spiral"),
    }
}

#[test]
fn manual_mode_leaves_cursor_to_the_pointer() {
    let mut anim = Animation::new(SimConfig::default(), viewport(800.0, 600.0), 1);
    let mut painter = Recorder::default();
    anim.pointer_entered();
    anim.pointer_moved(DVec2::new(250.0, 260.0), CANVAS_TOP);
    for _ in 0..10 {
        anim.tick(&mut painter);
    }
    assert_eq!(anim.surface().cursor(), DVec2::new(250.0, 200.0));
}

#[test]
fn spawns_read_the_cursor_at_fire_time() {
    let mut anim = Animation::new(SimConfig::default(), viewport(800.0, 600.0), 1);
    let mut painter = Recorder::default();
    anim.pointer_entered();
    for i in 0..5 {
        anim.pointer_moved(DVec2::new(100.0 + i as f64, 160.0), CANVAS_TOP);
        anim.spawn();
        anim.tick(&mut painter);
    }
    assert_eq!(anim.bundles().len(), 5);
    let radii: Vec<f64> = anim.bundles().iter().map(|b| b.radius()).collect();
    assert_eq!(radii, vec![15.0, 12.0, 9.0, 6.0, 3.0]);
    let xs: Vec<f64> = anim.bundles().iter().map(|b| b.origin().x).collect();
    assert_eq!(xs, vec![100.0, 101.0, 102.0, 103.0, 104.0]);
}

#[test]
fn jitter_configuration_keeps_cursor_near_previous_point() {
    let config = SimConfig {
        doodle: DoodleStrategy::Jitter(JitterParams::default()),
        ..SimConfig::default()
    };
    let mut anim = Animation::new(config, viewport(800.0, 600.0), 5);
    let mut painter = Recorder::default();
    let mut prev = anim.surface().cursor();
    for _ in 0..500 {
        anim.tick(&mut painter);
        let c = anim.surface().cursor();
        assert!((c - prev).abs().max_element() <= 15.0);
        prev = c;
    }
}
