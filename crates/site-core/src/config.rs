use crate::constants::*;
use crate::error::ConfigError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralParams {
    pub base_radius: f64,
    pub radius_step: f64,
    pub angle_step: f64,
    /// Upper bound on reset-and-retry rounds per step.
    pub max_resets: u32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            base_radius: SPIRAL_BASE_RADIUS,
            radius_step: SPIRAL_RADIUS_STEP,
            angle_step: SPIRAL_ANGLE_STEP,
            max_resets: SPIRAL_MAX_RESETS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JitterParams {
    pub max_offset: f64,
    pub max_attempts: u32,
}

impl Default for JitterParams {
    fn default() -> Self {
        Self {
            max_offset: JITTER_MAX_OFFSET,
            max_attempts: JITTER_MAX_ATTEMPTS,
        }
    }
}

/// How the cursor wanders while nobody is pointing at the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DoodleStrategy {
    Spiral(SpiralParams),
    Jitter(JitterParams),
}

/// When a bundle leaves the live collection. Exactly one policy applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retirement {
    /// Drop a bundle once its ring is larger than the surface.
    OffScreen,
    /// Keep at most `max_bundles`, evicting the oldest first.
    Capped { max_bundles: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub spawn_delay_ms: u32,
    /// Trail overlay alpha. `None` ties it to the spawn delay.
    pub fade_alpha: Option<f64>,
    pub particle_radius: f64,
    pub particles_per_bundle: usize,
    pub bundle_velocity: f64,
    pub hue_step: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub bounds_margin: f64,
    pub doodle: DoodleStrategy,
    pub retirement: Retirement,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_delay_ms: SPAWN_DELAY_MS,
            fade_alpha: None,
            particle_radius: PARTICLE_RADIUS,
            particles_per_bundle: PARTICLES_PER_BUNDLE,
            bundle_velocity: BUNDLE_VELOCITY,
            hue_step: HUE_STEP_RADIANS,
            saturation: HUE_SATURATION_PCT,
            lightness: HUE_LIGHTNESS_PCT,
            bounds_margin: BOUNDS_MARGIN,
            doodle: DoodleStrategy::Spiral(SpiralParams::default()),
            retirement: Retirement::OffScreen,
        }
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

impl SimConfig {
    /// Overlay alpha per frame: the explicit `fade` setting, or delay / 10000.
    pub fn fade_alpha(&self) -> f64 {
        self.fade_alpha
            .unwrap_or_else(|| (self.spawn_delay_ms as f64 / 10_000.0).min(1.0))
    }

    /// Apply one `data-*` attribute from the canvas element.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "doodle" => {
                self.doodle = match value.trim() {
                    "spiral" => DoodleStrategy::Spiral(SpiralParams::default()),
                    "jitter" => DoodleStrategy::Jitter(JitterParams::default()),
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                }
            }
            "cap" => {
                self.retirement = match value.trim() {
                    "none" | "" => Retirement::OffScreen,
                    v => Retirement::Capped {
                        max_bundles: parse(key, v)?,
                    },
                }
            }
            "delay" => self.spawn_delay_ms = parse(key, value)?,
            "velocity" => self.bundle_velocity = parse(key, value)?,
            "particles" => self.particles_per_bundle = parse(key, value)?,
            "particle-radius" => self.particle_radius = parse(key, value)?,
            "fade" => self.fade_alpha = Some(parse(key, value)?),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_delay_ms == 0 {
            return Err(ConfigError::Invalid("spawn delay must be positive"));
        }
        if !(self.bundle_velocity > 0.0) {
            return Err(ConfigError::Invalid("bundle velocity must be positive"));
        }
        if !(self.particle_radius > 0.0) {
            return Err(ConfigError::Invalid("particle radius must be positive"));
        }
        if self.particles_per_bundle == 0 {
            return Err(ConfigError::Invalid("bundles need at least one particle"));
        }
        if !(0.0..=1.0).contains(&self.fade_alpha()) {
            return Err(ConfigError::Invalid("fade alpha must be within 0..=1"));
        }
        if !(self.bounds_margin > 0.0 && self.bounds_margin <= 1.0) {
            return Err(ConfigError::Invalid("bounds margin must be within (0, 1]"));
        }
        if let Retirement::Capped { max_bundles: 0 } = self.retirement {
            return Err(ConfigError::Invalid("bundle cap must be at least one"));
        }
        Ok(())
    }
}
