//! Autonomous cursor paths used while the pointer is away from the canvas.

use crate::config::{DoodleStrategy, JitterParams, SpiralParams};
use crate::paint::ring_position;
use crate::surface::Bounds;
use glam::DVec2;
use rand::Rng;

/// Outward spiral around the surface center. Each step grows the radius a
/// little; when the next point would leave the bounds the spiral restarts at
/// the base radius turning the other way.
#[derive(Clone, Debug)]
pub struct Spiral {
    params: SpiralParams,
    center: DVec2,
    radius: f64,
    angle: f64,
    direction: f64,
}

impl Spiral {
    pub fn new(params: SpiralParams, bounds: &Bounds) -> Self {
        Self {
            params,
            center: bounds.center(),
            radius: params.base_radius,
            angle: 0.0,
            direction: 1.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    fn reset(&mut self, bounds: &Bounds) {
        self.center = bounds.center();
        self.radius = self.params.base_radius;
        self.angle = 0.0;
        self.direction = -self.direction;
    }

    fn advance(&mut self) -> DVec2 {
        self.radius += self.params.radius_step;
        self.angle += self.direction * self.params.angle_step;
        ring_position(self.center, self.radius, self.angle)
    }

    pub fn next_point(&mut self, bounds: &Bounds) -> DVec2 {
        let p = self.advance();
        if bounds.contains(p) {
            return p;
        }
        for _ in 0..self.params.max_resets {
            self.reset(bounds);
            let p = self.advance();
            if bounds.contains(p) {
                return p;
            }
        }
        // Surface too small for the base radius; park at the center.
        bounds.center()
    }
}

/// Small random steps around the current cursor.
#[derive(Clone, Debug)]
pub struct Jitter {
    params: JitterParams,
}

impl Jitter {
    pub fn new(params: JitterParams) -> Self {
        Self { params }
    }

    pub fn next_point<R: Rng + ?Sized>(&self, from: DVec2, bounds: &Bounds, rng: &mut R) -> DVec2 {
        let m = self.params.max_offset;
        for _ in 0..self.params.max_attempts {
            let candidate = from + DVec2::new(rng.gen_range(-m..=m), rng.gen_range(-m..=m));
            if bounds.contains(candidate) {
                return candidate;
            }
        }
        bounds.center()
    }
}

#[derive(Clone, Debug)]
pub enum Doodler {
    Spiral(Spiral),
    Jitter(Jitter),
}

impl Doodler {
    pub fn new(strategy: DoodleStrategy, bounds: &Bounds) -> Self {
        match strategy {
            DoodleStrategy::Spiral(p) => Doodler::Spiral(Spiral::new(p, bounds)),
            DoodleStrategy::Jitter(p) => Doodler::Jitter(Jitter::new(p)),
        }
    }

    /// Next autonomous cursor position. Strictly inside `bounds` whenever both
    /// dimensions are positive; on a zero-width or zero-height surface the
    /// fallback center lies on the edge.
    pub fn next_point<R: Rng + ?Sized>(&mut self, cursor: DVec2, bounds: &Bounds, rng: &mut R) -> DVec2 {
        match self {
            Doodler::Spiral(s) => s.next_point(bounds),
            Doodler::Jitter(j) => j.next_point(cursor, bounds, rng),
        }
    }
}
