use crate::audio::AudioBus;
use crate::render::Renderer;
use crate::timer::{self, SharedBeatTimer};
use crate::{export, overlay};
use paint_core::{Command, Painter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything event handlers need, cloned into each listener.
#[derive(Clone)]
pub struct AppHandles {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Renderer,
    pub audio: Rc<AudioBus>,
    pub painter: Rc<RefCell<Painter>>,
    pub beat_timer: SharedBeatTimer,
}

impl AppHandles {
    /// Carry out the side effects the painter asked for. The painter must not
    /// be borrowed by the caller.
    pub fn apply(&self, commands: Vec<Command>, ev: Option<&web::Event>) {
        for cmd in commands {
            match cmd {
                Command::SetDebugOverlay(visible) => {
                    overlay::set_debug_instructions(&self.document, visible);
                }
                Command::ShowHardwarePanel => overlay::show_hardware_panel(&self.document),
                Command::ClearCanvas => {
                    let color = self.painter.borrow().color();
                    self.renderer.clear();
                    self.renderer.draw_palette(color);
                }
                Command::RescheduleBeat(period) => {
                    if let Some(t) = self.beat_timer.borrow_mut().as_mut() {
                        t.reschedule(period);
                    }
                }
                Command::ExportImage {
                    filename,
                    extension,
                } => {
                    if let Err(e) =
                        export::save_canvas(&self.document, &self.canvas, filename, extension)
                    {
                        log::error!("export error: {:?}", e);
                    }
                }
                Command::PlayNote(note) => self.audio.play_note(&note),
                Command::PlayDelayed(delayed) => {
                    let audio = self.audio.clone();
                    timer::schedule_once(delayed.delay, move || audio.play_note(&delayed.note));
                }
                Command::PreventDefault => {
                    if let Some(ev) = ev {
                        ev.prevent_default();
                    }
                }
            }
        }
    }
}
