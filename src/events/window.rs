use crate::dom;
use crate::frame::LoopHandle;
use site_core::Animation;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Re-measure on every window resize and keep the backing store in step.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, animation: Rc<RefCell<Animation>>) {
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    dom::add_listener(&window, "resize", move || {
        let viewport = dom::measure_viewport();
        let mut anim = animation.borrow_mut();
        anim.resize(viewport);
        let surface = anim.surface();
        dom::sync_canvas_backing_size(&canvas, surface.width(), surface.height());
    });
}

/// Stop the frame loop and the spawn timer when the page is torn down.
pub fn wire_pagehide(handle: Rc<LoopHandle>) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "pagehide", move || handle.stop());
    }
}
