use std::f64::consts::TAU;

// Reference tuning for the doodle backdrop. `SimConfig::default()` is built from these.

// Spawning
pub const SPAWN_DELAY_MS: u32 = 100; // time between bundle spawns
pub const HUE_STEP_RADIANS: f64 = 0.01; // hue-cycle advance per spawn
pub const HUE_SATURATION_PCT: f64 = 50.0;
pub const HUE_LIGHTNESS_PCT: f64 = 50.0;

// Bundles
pub const PARTICLE_RADIUS: f64 = 5.0;
pub const PARTICLES_PER_BUNDLE: usize = 30;
pub const BUNDLE_VELOCITY: f64 = 3.0; // ring growth per tick

// Trail fade: overlay alpha is tied to the spawn cadence
pub const FADE_ALPHA: f64 = SPAWN_DELAY_MS as f64 / 10_000.0;

// Bounds: doodles stay strictly inside this fraction of each dimension
pub const BOUNDS_MARGIN: f64 = 0.99;

// Spiral doodle
pub const SPIRAL_BASE_RADIUS: f64 = 135.0;
pub const SPIRAL_RADIUS_STEP: f64 = 0.1;
pub const SPIRAL_ANGLE_STEP: f64 = TAU / 360.0;
pub const SPIRAL_MAX_RESETS: u32 = 8;

// Jitter doodle
pub const JITTER_MAX_OFFSET: f64 = 15.0; // per axis
pub const JITTER_MAX_ATTEMPTS: u32 = 64;
