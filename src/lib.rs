#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod backdrop;
mod canvas;
mod constants;
mod content;
mod dom;
mod events;
mod favicon;
mod frame;
mod spinner;

thread_local! {
    static BACKDROP: RefCell<Option<Rc<frame::LoopHandle>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    favicon::wire(&document);

    let doc = document.clone();
    dom::on_ready(&document, move || {
        content::load_all(&doc);
        match backdrop::init(&doc) {
            Ok(Some(handle)) => BACKDROP.with(|b| *b.borrow_mut() = Some(handle)),
            Ok(None) => {}
            Err(e) => log::error!("[canvas] init error: {:?}", e),
        }
    });
    Ok(())
}

/// Cancel the backdrop's frame loop and spawn timer.
#[wasm_bindgen]
pub fn stop_backdrop() {
    BACKDROP.with(|b| {
        if let Some(handle) = b.borrow().as_ref() {
            handle.stop();
        }
    });
}
