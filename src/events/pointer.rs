use crate::dom;
use glam::DVec2;
use site_core::Animation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub animation: Rc<RefCell<Animation>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerenter(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();

    // Listen on the window: while autonomous, movement anywhere scatters the cursor.
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let origin = dom::canvas_origin(&w.canvas);
        w.animation.borrow_mut().pointer_moved(client, origin);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerenter(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.animation.borrow_mut().pointer_entered();
        log::debug!("[canvas] pointer took over");
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.animation.borrow_mut().pointer_left();
        log::debug!("[canvas] doodling on its own");
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
