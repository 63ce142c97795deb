use crate::config::SimConfig;
use crate::doodle::Doodler;
use crate::paint::{fade_style, Painter};
use crate::particles::LiveBundles;
use crate::surface::{InputMode, Surface, Viewport};
use glam::DVec2;
use rand::prelude::*;

/// The whole backdrop: surface and cursor, autonomous path, and live bundles.
/// Hosts call `tick` once per display frame and `spawn` on the spawn cadence;
/// both may arrive in either order.
pub struct Animation {
    config: SimConfig,
    surface: Surface,
    doodler: Doodler,
    bundles: LiveBundles,
    fade: String,
    rng: StdRng,
}

impl Animation {
    pub fn new(config: SimConfig, viewport: Viewport, seed: u64) -> Self {
        let surface = Surface::new(viewport, config.bounds_margin);
        let doodler = Doodler::new(config.doodle, &surface.bounds());
        let bundles = LiveBundles::new(&config);
        let fade = fade_style(config.fade_alpha());
        Self {
            config,
            surface,
            doodler,
            bundles,
            fade,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Settings the animation was built with; fixed for its lifetime.
    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn bundles(&self) -> &LiveBundles {
        &self.bundles
    }

    #[inline]
    pub fn doodler(&self) -> &Doodler {
        &self.doodler
    }

    pub fn tick(&mut self, painter: &mut dyn Painter) {
        // A collapsed surface has no interior to doodle in.
        if self.surface.mode() == InputMode::Autonomous && self.surface.is_drawable() {
            let bounds = self.surface.bounds();
            let next = self
                .doodler
                .next_point(self.surface.cursor(), &bounds, &mut self.rng);
            self.surface.set_cursor(next);
        }

        painter.set_fill_style(&self.fade);
        painter.fill_rect(0.0, 0.0, self.surface.width(), self.surface.height());

        self.bundles.update(painter, self.surface.extent());
    }

    /// Spawn a bundle at wherever the cursor is right now.
    pub fn spawn(&mut self) {
        let at = self.surface.cursor();
        self.bundles.spawn(at);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.surface.resize(viewport);
        log::debug!(
            "[canvas] resized to {:.0}x{:.0}",
            self.surface.width(),
            self.surface.height()
        );
    }

    pub fn pointer_moved(&mut self, client: DVec2, canvas_origin: DVec2) {
        self.surface
            .pointer_moved(client, canvas_origin, &mut self.rng);
    }

    pub fn pointer_entered(&mut self) {
        self.surface.pointer_entered();
    }

    pub fn pointer_left(&mut self) {
        self.surface.pointer_left();
    }
}
