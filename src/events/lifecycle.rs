use crate::dom;
use lumen_core::StopSignal;
use web_sys as web;

/// Keep each canvas' backing store in step with its CSS size. Renderers pick
/// the new size up on their next frame.
pub fn wire_resize(window: &web::Window, canvases: Vec<web::HtmlCanvasElement>) {
    for canvas in &canvases {
        dom::sync_canvas_backing_size(canvas);
    }
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        for canvas in &canvases {
            dom::sync_canvas_backing_size(canvas);
        }
    });
}

/// Raise the stop signal when the page is being unloaded.
pub fn wire_pagehide(window: &web::Window, stop: StopSignal) {
    dom::add_listener(window, "pagehide", move |_ev: web::Event| {
        log::info!("[scene] pagehide, stopping frame loop");
        stop.stop();
    });
}
