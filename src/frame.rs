use crate::canvas::CanvasPainter;
use site_core::Animation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animation: Rc<RefCell<Animation>>,
    pub painter: CanvasPainter,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.animation.borrow_mut().tick(&mut self.painter);
    }
}

/// Ids of the pending animation frame and the spawn interval, so both can be
/// cancelled on teardown.
#[derive(Default)]
pub struct LoopHandle {
    raf_id: Cell<Option<i32>>,
    interval_id: Cell<Option<i32>>,
    stopped: Cell<bool>,
}

impl LoopHandle {
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            if let Some(id) = self.raf_id.take() {
                _ = w.cancel_animation_frame(id);
            }
            if let Some(id) = self.interval_id.take() {
                w.clear_interval_with_handle(id);
            }
        }
        log::info!("[canvas] backdrop stopped");
    }
}

fn request_frame(closure: &Closure<dyn FnMut()>, handle: &LoopHandle) {
    if let Some(w) = web::window() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => handle.raf_id.set(Some(id)),
            Err(e) => log::error!("[canvas] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, handle: Rc<LoopHandle>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_tick.is_stopped() {
            return;
        }
        if let Some(next) = tick_clone.borrow().as_ref() {
            request_frame(next, &handle_tick);
        }
        frame_ctx.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    if let Some(first) = tick.borrow().as_ref() {
        request_frame(first, &handle);
    }
}

/// Spawn one bundle now, then one every `delay_ms` at the cursor's position at
/// that moment.
pub fn start_spawner(animation: Rc<RefCell<Animation>>, handle: &LoopHandle, delay_ms: u32) {
    animation.borrow_mut().spawn();

    let Some(w) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        animation.borrow_mut().spawn();
    }) as Box<dyn FnMut()>);
    match w.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        Ok(id) => handle.interval_id.set(Some(id)),
        Err(e) => log::error!("[canvas] setInterval failed: {:?}", e),
    }
    closure.forget();
}
