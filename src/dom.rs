use crate::constants::{HEADER_RESERVE_FACTOR, HEADER_SELECTOR, TOP_BAR_SELECTOR};
use glam::DVec2;
use site_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn set_text(root: &web::Element, selector: &str, text: &str) {
    if let Some(el) = query_in(root, selector) {
        el.set_text_content(Some(text));
    }
}

/// Attach a listener that lives as long as the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() == "loading" {
        let mut f = Some(f);
        add_listener(document, "DOMContentLoaded", move || {
            if let Some(f) = f.take() {
                f();
            }
        });
    } else {
        f();
    }
}

/// Schedule `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

fn client_height(document: &web::Document, selector: &str) -> f64 {
    query(document, selector)
        .map(|el| el.client_height() as f64)
        .unwrap_or(0.0)
}

/// Measure the window and the chrome around the backdrop canvas.
pub fn measure_viewport() -> Viewport {
    let Some(window) = web::window() else {
        return Viewport::default();
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let reserved_height = window
        .document()
        .map(|d| {
            client_height(&d, TOP_BAR_SELECTOR)
                + HEADER_RESERVE_FACTOR * client_height(&d, HEADER_SELECTOR)
        })
        .unwrap_or(0.0);
    Viewport {
        width,
        height,
        reserved_height,
    }
}

/// Client-space top-left of the canvas right now; moves as the page scrolls.
#[inline]
pub fn canvas_origin(canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(rect.left(), rect.top())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
