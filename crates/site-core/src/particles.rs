use crate::config::{Retirement, SimConfig};
use crate::paint::{cycle_hue, ring_angle, ring_position, Hsl, Painter};
use glam::DVec2;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: DVec2,
    pub radius: f64,
    pub color: Rc<str>,
}

impl Particle {
    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.set_fill_style(&self.color);
        painter.fill_circle(self.position, self.radius);
    }
}

/// A ring of particles expanding from one origin. Particles carry no velocity
/// of their own; each frame they are re-projected onto the current ring.
#[derive(Clone, Debug)]
pub struct ParticleBundle {
    origin: DVec2,
    radius: f64,
    velocity: f64,
    particles: SmallVec<[Particle; 32]>,
}

impl ParticleBundle {
    pub fn new(origin: DVec2, particle_radius: f64, color: Rc<str>, count: usize, velocity: f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: origin,
                radius: particle_radius,
                color: color.clone(),
            })
            .collect();
        Self {
            origin,
            radius: 0.0,
            velocity,
            particles,
        }
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn color(&self) -> &str {
        self.particles.first().map(|p| &*p.color).unwrap_or("")
    }

    /// Place and draw every particle at the current radius, then grow the ring.
    pub fn update(&mut self, painter: &mut dyn Painter) {
        let count = self.particles.len();
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.position = ring_position(self.origin, self.radius, ring_angle(i, count));
            p.draw(painter);
        }
        self.radius += self.velocity;
    }
}

/// Every bundle currently on screen, oldest first.
#[derive(Clone, Debug)]
pub struct LiveBundles {
    bundles: VecDeque<ParticleBundle>,
    hue_radians: f64,
    hue_step: f64,
    saturation: f64,
    lightness: f64,
    particle_radius: f64,
    particles_per_bundle: usize,
    velocity: f64,
    retirement: Retirement,
}

impl LiveBundles {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            bundles: VecDeque::new(),
            hue_radians: 0.0,
            hue_step: config.hue_step,
            saturation: config.saturation,
            lightness: config.lightness,
            particle_radius: config.particle_radius,
            particles_per_bundle: config.particles_per_bundle,
            velocity: config.bundle_velocity,
            retirement: config.retirement,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleBundle> {
        self.bundles.iter()
    }

    #[inline]
    pub fn hue_radians(&self) -> f64 {
        self.hue_radians
    }

    /// Color for the next spawn; advances the hue cycle.
    fn next_color(&mut self) -> Hsl {
        let hue = cycle_hue(self.hue_radians);
        self.hue_radians += self.hue_step;
        Hsl {
            hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }

    /// Add a bundle at `position` with the next hue in the cycle.
    pub fn spawn(&mut self, position: DVec2) -> Hsl {
        let color = self.next_color();
        let style: Rc<str> = Rc::from(color.to_string());
        self.bundles.push_back(ParticleBundle::new(
            position,
            self.particle_radius,
            style,
            self.particles_per_bundle,
            self.velocity,
        ));
        if let Retirement::Capped { max_bundles } = self.retirement {
            while self.bundles.len() > max_bundles {
                self.bundles.pop_front();
            }
        }
        color
    }

    /// Advance every live bundle one frame. Under `OffScreen` retirement a
    /// bundle whose ring already exceeds `extent` is dropped instead of drawn.
    pub fn update(&mut self, painter: &mut dyn Painter, extent: f64) {
        if self.retirement == Retirement::OffScreen {
            let before = self.bundles.len();
            self.bundles.retain(|b| b.radius <= extent);
            let retired = before - self.bundles.len();
            if retired > 0 {
                log::trace!("[canvas] retired {} bundles", retired);
            }
        }
        for bundle in self.bundles.iter_mut() {
            bundle.update(painter);
        }
    }
}
