#![cfg(target_arch = "wasm32")]
use lumen_core::constants::{HEIGHTMAP_OCTAVES, HEIGHTMAP_SIZE};
use lumen_core::{
    Clock, HeightMap, InputQueue, ParamOverrides, Scene, SceneConfig, SceneKind, StopSignal,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod debug;
mod dom;
mod events;
mod frame;
mod render;

fn load_config(window: &web::Window) -> SceneConfig {
    let query = dom::query_string(window);
    match SceneConfig::from_query(&query) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[scene] {e}; using defaults");
            SceneConfig::default()
        }
    }
}

/// Enabled scenes whose canvas is actually on the page.
fn locate_canvases(
    document: &web::Document,
    cfg: &SceneConfig,
) -> Vec<(SceneKind, web::HtmlCanvasElement)> {
    cfg.enabled_scenes()
        .filter_map(|kind| match dom::find_canvas(document, kind.canvas_selector()) {
            Some(canvas) => Some((kind, canvas)),
            None => {
                log::warn!(
                    "[scene] no {} on page, skipping {} scene",
                    kind.canvas_selector(),
                    kind.name()
                );
                None
            }
        })
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lumen-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cfg = load_config(&window);
    log::info!("[scene] config: {:?}", cfg);

    let targets = locate_canvases(&document, &cfg);
    if targets.is_empty() {
        anyhow::bail!("no scene canvas found");
    }

    // Backing stores must be sized before the surfaces are configured
    events::wire_resize(&window, targets.iter().map(|(_, c)| c.clone()).collect());

    let input = Rc::new(RefCell::new(InputQueue::default()));
    let overrides = Rc::new(RefCell::new(ParamOverrides::default()));
    let stop = StopSignal::new();

    events::wire_pointer_move(&document, input.clone());
    events::wire_scroll(&window, input.clone());
    events::wire_pagehide(&window, stop.clone());

    if cfg.debug_panel {
        if let Err(e) = debug::mount(&document, overrides.clone()) {
            log::error!("[debug] {:?}", e);
        }
    }

    let heightmap = HeightMap::generate(HEIGHTMAP_SIZE, cfg.heightmap_seed, HEIGHTMAP_OCTAVES);
    let (gpu, first_surface) = render::Gpu::new(&targets[0].1, &heightmap).await?;

    let mut slots = Vec::with_capacity(targets.len());
    let mut first_surface = Some(first_surface);
    for (kind, canvas) in targets.iter() {
        // The adapter was requested against the first canvas; reuse its surface
        let surface = match first_surface.take() {
            Some(s) => s,
            None => match gpu.create_surface(canvas) {
                Ok(s) => s,
                Err(e) => {
                    log::error!("[gpu] {} surface: {:?}", kind.name(), e);
                    continue;
                }
            },
        };
        let scene = Scene::new(*kind, cfg.threshold(*kind));
        match render::SceneRenderer::new(&gpu, surface, canvas, scene.meshes(), kind.camera_z()) {
            Ok(renderer) => {
                log::info!("[scene] {} ready", kind.name());
                slots.push(frame::SceneSlot {
                    scene,
                    renderer,
                    canvas: canvas.clone(),
                });
            }
            Err(e) => log::error!("[gpu] {} renderer: {:?}", kind.name(), e),
        }
    }
    if slots.is_empty() {
        anyhow::bail!("no scene could be initialised");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        slots,
        input,
        overrides,
        clock: Clock::start(),
        frames: 0,
    }));
    frame::start_loop(frame_ctx, stop);
    Ok(())
}
