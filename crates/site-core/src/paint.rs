//! The drawing seam between the simulation and whatever surface hosts it.

use glam::DVec2;
use std::f64::consts::TAU;
use std::fmt;

/// Minimal 2D fill surface. The browser implements this over a
/// `CanvasRenderingContext2d`; tests record calls instead.
pub trait Painter {
    fn set_fill_style(&mut self, style: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Fill a full circle with the current fill style.
    fn fill_circle(&mut self, center: DVec2, radius: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Map a monotonically increasing phase onto a repeating hue in `[0, 360)`.
#[inline]
pub fn cycle_hue(hue_radians: f64) -> f64 {
    (180.0 * (hue_radians.sin() + 1.0)).rem_euclid(360.0)
}

#[inline]
pub fn fade_style(alpha: f64) -> String {
    format!("rgba(0, 0, 0, {})", alpha)
}

/// Point on a ring of `radius` around `origin` at `angle` radians.
#[inline]
pub fn ring_position(origin: DVec2, radius: f64, angle: f64) -> DVec2 {
    origin + radius * DVec2::new(angle.cos(), angle.sin())
}

/// Angular offset of particle `index` in a ring of `count`.
#[inline]
pub fn ring_angle(index: usize, count: usize) -> f64 {
    index as f64 * (TAU / count as f64)
}
