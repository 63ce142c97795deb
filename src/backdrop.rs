use crate::canvas::{self, CanvasPainter};
use crate::dom;
use crate::events::{self, PointerWiring};
use crate::frame::{self, FrameContext, LoopHandle};
use site_core::Animation;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Bring up the doodle backdrop on this page's canvas. Returns `Ok(None)` when
/// the page has no canvas; a canvas without a 2D context is an error.
pub fn init(document: &web::Document) -> anyhow::Result<Option<Rc<LoopHandle>>> {
    let Some(canvas) = canvas::find(document)? else {
        log::debug!("[canvas] no canvas on this page");
        return Ok(None);
    };
    let ctx = canvas::context_2d(&canvas)?;
    let config = canvas::read_config(&canvas);
    let delay_ms = config.spawn_delay_ms;

    let viewport = dom::measure_viewport();
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let animation = Rc::new(RefCell::new(Animation::new(config, viewport, seed)));
    {
        let anim = animation.borrow();
        let surface = anim.surface();
        dom::sync_canvas_backing_size(&canvas, surface.width(), surface.height());
        log::info!(
            "[canvas] backdrop {:.0}x{:.0} doodle={:?} retirement={:?} delay={}ms",
            surface.width(),
            surface.height(),
            anim.config().doodle,
            anim.config().retirement,
            delay_ms
        );
    }

    events::wire_resize(&canvas, animation.clone());
    events::wire_pointer_handlers(PointerWiring {
        canvas: canvas.clone(),
        animation: animation.clone(),
    });

    let handle = Rc::new(LoopHandle::default());
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        animation: animation.clone(),
        painter: CanvasPainter::new(ctx),
    }));
    frame::start_loop(frame_ctx, handle.clone());
    frame::start_spawner(animation, &handle, delay_ms);
    events::wire_pagehide(handle.clone());

    Ok(Some(handle))
}
