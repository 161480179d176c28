#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use instant::Instant;
use membrane_core::{Membrane, SimulationConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::{BACKGROUND_TEXTURE_SIZE, CANVAS_ID};
use render::GpuState;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("membrane-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_canvas_resize(&canvas);

    let viewport = dom::canvas_viewport(&canvas);
    let mut membrane = Membrane::new(SimulationConfig::with_random_seed(), viewport)
        .context("membrane configuration")?;

    let background = render::background::draw_text_image(&document, BACKGROUND_TEXTURE_SIZE)
        .context("background texture")?;

    // Initialize WebGPU (leak a canvas clone to satisfy 'static lifetime for surface)
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = GpuState::new(leaked_canvas, &mut membrane, &background)
        .await
        .context("WebGPU init")?;

    let membrane = Rc::new(RefCell::new(membrane));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        membrane: membrane.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        membrane,
        canvas,
        gpu: Some(gpu),
        last_instant: Instant::now(),
        vertices: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] render loop started");
    Ok(())
}
