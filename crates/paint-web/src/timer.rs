use crate::audio::AudioBus;
use paint_core::{beat_period, BeatTimer, Painter, TimerBackend};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setInterval`-based backend bound to one JS callback.
pub struct IntervalBackend {
    callback: js_sys::Function,
}

impl TimerBackend for IntervalBackend {
    type Handle = i32;

    fn start_repeating(&mut self, period: Duration) -> Option<i32> {
        let window = web::window()?;
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                &self.callback,
                period.as_millis().min(i32::MAX as u128) as i32,
            )
            .map_err(|e| log::error!("setInterval error: {:?}", e))
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(handle);
        }
    }
}

pub type SharedBeatTimer = Rc<RefCell<Option<BeatTimer<IntervalBackend>>>>;

/// Start the background sequence. Each interval fires one beat; a beat that
/// crosses a fill decile retunes the interval from inside the callback.
pub fn start_beat_timer(painter: Rc<RefCell<Painter>>, audio: Rc<AudioBus>) -> SharedBeatTimer {
    let timer: SharedBeatTimer = Rc::new(RefCell::new(None));
    let timer_for_tick = timer.clone();
    let painter_for_tick = painter.clone();
    let tick = Closure::wrap(Box::new(move || {
        let beat = painter_for_tick.borrow_mut().beat();
        for note in &beat.chord {
            audio.play_note(note);
        }
        if let Some(bpm) = beat.new_bpm {
            log::info!("[music] tempo -> {:.1} bpm", bpm);
            if let Some(t) = timer_for_tick.borrow_mut().as_mut() {
                t.reschedule(beat_period(bpm));
            }
        }
    }) as Box<dyn FnMut()>);
    let callback: js_sys::Function = tick.into_js_value().unchecked_into();

    let mut beat_timer = BeatTimer::new(IntervalBackend { callback });
    beat_timer.reschedule(painter.borrow().engine().beat_period());
    *timer.borrow_mut() = Some(beat_timer);
    timer
}

/// Fire-and-forget `setTimeout`.
pub fn schedule_once(delay: Duration, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.as_millis().min(i32::MAX as u128) as i32,
    ) {
        log::error!("setTimeout error: {:?}", e);
    }
}
