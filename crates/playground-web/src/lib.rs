#![cfg(target_arch = "wasm32")]
use playground_core::{Playground, PlaygroundConfig};
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
mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("playground-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("scene")
        .ok_or_else(|| anyhow::anyhow!("missing #scene"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);

    let config = PlaygroundConfig {
        seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
        ..PlaygroundConfig::default()
    };
    let mut playground = Playground::new(config);
    let css = input::canvas_css_size(&canvas);
    playground.resize(css.x, css.y);
    let playground = Rc::new(RefCell::new(playground));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        playground: playground.clone(),
    });
    events::wire_character_form(&document, playground.clone());

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("rendering disabled; simulation keeps running");
    }
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        playground, canvas, document, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
