use crate::audio::AudioBus;
use crate::overlay::HardwarePanel;
use crate::render::Renderer;
use instant::Instant;
use paint_core::Painter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub painter: Rc<RefCell<Painter>>,
    pub renderer: Renderer,
    pub audio: Rc<AudioBus>,
    pub panel: HardwarePanel,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // The painter accounts fill and commits the brush position inside
        // `frame`; the segment it hands back is the one to draw.
        let report = self.painter.borrow_mut().frame(self.started.elapsed());

        if let Some(note) = &report.cycled {
            self.audio.play_note(note);
        }
        self.renderer
            .stroke(&report.segment, report.color, report.brush_size);
        self.renderer.draw_brush_indicator(report.segment.to);
        self.audio.set_brush_tone(&report.tone);
        self.panel.update(&report);
        self.renderer.draw_palette(report.color);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
