use glam::DVec2;
use rand::Rng;

/// Host measurements the drawable area is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Height taken by the top bar and page header above/below the canvas.
    pub reserved_height: f64,
}

impl Viewport {
    #[inline]
    pub fn surface_size(&self) -> DVec2 {
        DVec2::new(
            self.width.max(0.0),
            (self.height - self.reserved_height).max(0.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// The doodle path drives the cursor.
    Autonomous,
    /// The user's pointer drives the cursor.
    Manual,
}

/// The drawable region a doodle point must stay strictly inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Bounds {
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x > 0.0 && p.y > 0.0 && p.x < self.margin * self.width && p.y < self.margin * self.height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Debug)]
pub struct Surface {
    size: DVec2,
    cursor: DVec2,
    mode: InputMode,
    margin: f64,
}

impl Surface {
    pub fn new(viewport: Viewport, margin: f64) -> Self {
        let size = viewport.surface_size();
        Self {
            size,
            cursor: size / 2.0,
            mode: InputMode::Autonomous,
            margin,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn cursor(&self) -> DVec2 {
        self.cursor
    }

    #[inline]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.size.x,
            height: self.size.y,
            margin: self.margin,
        }
    }

    /// Larger of the two dimensions; rings beyond this are off-screen.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.size.x.max(self.size.y)
    }

    pub fn set_cursor(&mut self, p: DVec2) {
        self.cursor = p;
    }

    /// Re-measure. A cursor still parked at the old center follows the new center.
    pub fn resize(&mut self, viewport: Viewport) {
        let old_center = self.size / 2.0;
        let size = viewport.surface_size();
        if self.cursor == old_center {
            self.cursor = size / 2.0;
        }
        self.size = size;
    }

    /// Non-degenerate surfaces have room for a doodle point strictly inside.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// `client` is in client coordinates and `origin` is the canvas' client-space
    /// top-left at the time of the event (it moves when the page scrolls).
    /// While autonomous the event position is ignored and the cursor jumps
    /// somewhere random on the surface.
    pub fn pointer_moved<R: Rng + ?Sized>(&mut self, client: DVec2, origin: DVec2, rng: &mut R) {
        match self.mode {
            InputMode::Autonomous => {
                self.cursor = DVec2::new(
                    rng.gen::<f64>() * self.size.x,
                    rng.gen::<f64>() * self.size.y,
                );
            }
            InputMode::Manual => {
                self.cursor = client - origin;
            }
        }
    }

    pub fn pointer_entered(&mut self) {
        self.mode = InputMode::Manual;
    }

    pub fn pointer_left(&mut self) {
        self.mode = InputMode::Autonomous;
    }
}
