// Host-side tests for backdrop configuration and its data-attribute overrides.

use site_core::constants::*;
use site_core::{ConfigError, DoodleStrategy, Retirement, SimConfig};

#[test]
fn reference_configuration() {
    let c = SimConfig::default();
    assert_eq!(c.spawn_delay_ms, 100);
    assert!((c.fade_alpha() - FADE_ALPHA).abs() < 1e-12);
    assert_eq!(c.particles_per_bundle, 30);
    assert_eq!(c.retirement, Retirement::OffScreen);
    assert!(matches!(c.doodle, DoodleStrategy::Spiral(p) if p.base_radius == 135.0));
    assert!(c.validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(BOUNDS_MARGIN > 0.0 && BOUNDS_MARGIN <= 1.0);
    assert!(SPIRAL_RADIUS_STEP > 0.0 && SPIRAL_RADIUS_STEP < SPIRAL_BASE_RADIUS);
    assert!(SPIRAL_MAX_RESETS > 0);
    assert!(JITTER_MAX_ATTEMPTS > 0);
    assert!(FADE_ALPHA > 0.0 && FADE_ALPHA < 1.0);
}

#[test]
fn fade_tracks_delay_unless_set_explicitly() {
    let mut c = SimConfig::default();
    c.apply_override("delay", "250").unwrap();
    assert!((c.fade_alpha() - 0.025).abs() < 1e-12);

    c.apply_override("fade", "0.05").unwrap();
    c.apply_override("delay", "40").unwrap();
    assert!((c.fade_alpha() - 0.05).abs() < 1e-12);
    assert!(c.validate().is_ok());

    let mut slow = SimConfig::default();
    slow.apply_override("delay", "20000").unwrap();
    assert_eq!(slow.fade_alpha(), 1.0);
}

#[test]
fn overrides_switch_strategy_and_policy() {
    let mut c = SimConfig::default();
    c.apply_override("doodle", "jitter").unwrap();
    c.apply_override("cap", "50").unwrap();
    c.apply_override("delay", " 250 ").unwrap();
    c.apply_override("velocity", "1.5").unwrap();
    assert!(matches!(c.doodle, DoodleStrategy::Jitter(_)));
    assert_eq!(c.retirement, Retirement::Capped { max_bundles: 50 });
    assert_eq!(c.spawn_delay_ms, 250);
    assert_eq!(c.bundle_velocity, 1.5);

    c.apply_override("cap", "none").unwrap();
    assert_eq!(c.retirement, Retirement::OffScreen);
    assert!(c.validate().is_ok());
}

#[test]
fn bad_overrides_are_rejected() {
    let mut c = SimConfig::default();
    assert!(matches!(
        c.apply_override("speed", "2"),
        Err(ConfigError::UnknownKey(k)) if k == "speed"
    ));
    assert!(matches!(
        c.apply_override("particles", "many"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(c.apply_override("doodle", "zigzag").is_err());
    assert_eq!(c, SimConfig::default());
}

#[test]
fn validate_catches_degenerate_values() {
    let mut c = SimConfig::default();
    c.apply_override("cap", "0").unwrap();
    assert!(c.validate().is_err());

    let c = SimConfig {
        bundle_velocity: 0.0,
        ..SimConfig::default()
    };
    assert!(c.validate().is_err());

    let c = SimConfig {
        particles_per_bundle: 0,
        ..SimConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("at least one particle"));
}
