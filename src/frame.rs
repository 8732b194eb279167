use crate::debug;
use crate::render::{Gpu, SceneRenderer};
use lumen_core::schedule;
use lumen_core::{Clock, InputQueue, ParamOverrides, Scene, StopSignal};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One canvas: its scene state, its renderer and the element it draws into.
pub struct SceneSlot {
    pub scene: Scene,
    pub renderer: SceneRenderer,
    pub canvas: web::HtmlCanvasElement,
}

pub struct FrameContext {
    pub gpu: Gpu,
    pub slots: Vec<SceneSlot>,
    pub input: Rc<RefCell<InputQueue>>,
    pub overrides: Rc<RefCell<ParamOverrides>>,
    pub clock: Clock,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Single snapshot of everything the handlers queued since last frame
        let input = self.input.borrow_mut().drain();
        let elapsed = self.clock.elapsed_secs();
        let overrides = self.overrides.borrow();

        for slot in &mut self.slots {
            let out = slot.scene.update(input, elapsed, &overrides);

            slot.renderer
                .resize_if_needed(&self.gpu, slot.canvas.width(), slot.canvas.height());
            match slot.renderer.render(&self.gpu, &out) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[gpu] {} surface lost, reconfiguring", slot.scene.kind().name());
                    slot.renderer.reconfigure(&self.gpu);
                }
                Err(e) => log::error!("render error ({}): {:?}", slot.scene.kind().name(), e),
            }
        }
        self.frames += 1;
    }
}

/// Run `frame()` on every display refresh until `stop` is raised.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, stop: StopSignal) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if schedule::tick(&stop, || frame_ctx_tick.borrow_mut().frame()) {
            request_frame(&tick_clone);
            return;
        }
        log::info!(
            "[scene] frame loop stopped after {} frames",
            frame_ctx_tick.borrow().frames
        );
        debug::unmount();
        // Drop the closure to break the tick -> closure -> tick cycle
        tick_clone.borrow_mut().take();
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
