use crate::constants::{CANVAS_SELECTOR, CONFIG_ATTR_PREFIX};
use crate::dom;
use glam::DVec2;
use site_core::{Painter, SimConfig};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` over the page's 2D canvas context.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter {
    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
        self.ctx.close_path();
    }
}

/// Find the backdrop canvas. `Ok(None)` means this page has none.
pub fn find(document: &web::Document) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    let Some(el) = dom::query(document, CANVAS_SELECTOR) else {
        return Ok(None);
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(Some(canvas))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Reference configuration adjusted by the canvas' `data-*` attributes.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> SimConfig {
    let mut config = SimConfig::default();
    let names = canvas.get_attribute_names();
    for name in names.iter().filter_map(|v| v.as_string()) {
        let Some(key) = name.strip_prefix(CONFIG_ATTR_PREFIX) else {
            continue;
        };
        let value = canvas.get_attribute(&name).unwrap_or_default();
        if let Err(e) = config.apply_override(key, &value) {
            log::warn!("[canvas] ignoring {}: {}", name, e);
        }
    }
    if let Err(e) = config.validate() {
        log::warn!("[canvas] {}; using defaults", e);
        return SimConfig::default();
    }
    config
}
