#![cfg(target_arch = "wasm32")]
use instant::Instant;
use paint_core::Painter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod export;
mod frame;
mod handles;
mod input_map;
mod overlay;
mod render;
mod timer;

use handles::AppHandles;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("paint-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let painter = Rc::new(RefCell::new(Painter::default()));

    let renderer = render::Renderer::new(&canvas)?;
    renderer.clear();
    renderer.draw_palette(painter.borrow().color());

    overlay::build(&document);
    overlay::wire_brush_slider(&document, painter.clone());

    // Audio starts suspended; the first key or click resumes it.
    let audio = Rc::new(audio::AudioBus::new()?);
    let beat_timer = timer::start_beat_timer(painter.clone(), audio.clone());

    let app = AppHandles {
        document: document.clone(),
        canvas,
        renderer: renderer.clone(),
        audio: audio.clone(),
        painter: painter.clone(),
        beat_timer,
    };
    events::wire_keyboard(&app);
    events::wire_pointer(&app);
    events::wire_hardware_bridge(&app);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        painter,
        renderer,
        audio,
        panel: overlay::HardwarePanel::new(&document),
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] canvas, audio and input wired");
    Ok(())
}
