// Host-side tests for the beat timer, driven by a virtual clock.

use paint_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Fake host timer: tracks live repeating tasks on a virtual clock.
#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_id: u32,
    live: Vec<(u32, Duration, Duration)>, // (id, period, next fire)
}

impl VirtualClock {
    /// Advance to `until`, returning the ids fired in order.
    fn run_until(&mut self, until: Duration) -> Vec<u32> {
        let mut fired = Vec::new();
        loop {
            let next = self
                .live
                .iter()
                .enumerate()
                .filter(|(_, (_, _, at))| *at <= until)
                .min_by_key(|(_, (_, _, at))| *at)
                .map(|(i, _)| i);
            let Some(i) = next else { break };
            let (id, period, at) = self.live[i];
            self.now = at;
            self.live[i].2 = at + period;
            fired.push(id);
        }
        self.now = until;
        fired
    }
}

#[derive(Clone, Default)]
struct Backend(Rc<RefCell<VirtualClock>>);

impl TimerBackend for Backend {
    type Handle = u32;

    fn start_repeating(&mut self, period: Duration) -> Option<u32> {
        let mut clock = self.0.borrow_mut();
        clock.next_id += 1;
        let id = clock.next_id;
        let at = clock.now + period;
        clock.live.push((id, period, at));
        Some(id)
    }

    fn cancel(&mut self, handle: u32) {
        self.0.borrow_mut().live.retain(|(id, _, _)| *id != handle);
    }
}

struct Refusing;

impl TimerBackend for Refusing {
    type Handle = ();

    fn start_repeating(&mut self, _period: Duration) -> Option<()> {
        None
    }

    fn cancel(&mut self, _handle: ()) {}
}

#[test]
fn reschedule_keeps_a_single_pending_task() {
    let backend = Backend::default();
    let mut timer = BeatTimer::new(backend.clone());
    timer.reschedule(Duration::from_millis(750));
    timer.reschedule(Duration::from_millis(600));
    timer.reschedule(Duration::from_millis(500));
    assert_eq!(backend.0.borrow().live.len(), 1);
    assert_eq!(timer.period(), Some(Duration::from_millis(500)));

    let fired = backend.0.borrow_mut().run_until(Duration::from_millis(1600));
    assert_eq!(fired.len(), 3);
    assert!(fired.iter().all(|id| *id == 3));
}

#[test]
fn stop_and_drop_cancel_the_task() {
    let backend = Backend::default();
    let mut timer = BeatTimer::new(backend.clone());
    timer.reschedule(Duration::from_millis(750));
    timer.stop();
    assert!(!timer.is_running());
    assert!(backend.0.borrow().live.is_empty());

    timer.reschedule(Duration::from_millis(750));
    drop(timer);
    assert!(backend.0.borrow().live.is_empty());
}

#[test]
fn refused_schedule_leaves_timer_idle() {
    let mut timer = BeatTimer::new(Refusing);
    timer.reschedule(Duration::from_millis(750));
    assert!(!timer.is_running());
    assert_eq!(timer.period(), None);
}

#[test]
fn tempo_change_takes_effect_from_the_retuning_beat() {
    // Drive a painter from the virtual clock the way the web host does.
    let backend = Backend::default();
    let mut timer = BeatTimer::new(backend.clone());
    // small canvas so it fills within the simulated minute
    let mut painter = Painter::new(PainterConfig {
        region: DrawableRegion {
            min: glam::Vec2::new(50.0, 0.0),
            max: glam::Vec2::new(150.0, 100.0),
        },
        ..PainterConfig::default()
    });
    timer.reschedule(painter.engine().beat_period());

    let mut beat_times = Vec::new();
    let mut frame_time = Duration::ZERO;
    let frame = Duration::from_millis(16);
    let end = Duration::from_secs(60);
    while frame_time < end {
        let fired = backend.0.borrow_mut().run_until(frame_time);
        for _ in fired {
            beat_times.push(frame_time);
            let beat = painter.beat();
            if let Some(bpm) = beat.new_bpm {
                timer.reschedule(beat_period(bpm));
            }
        }
        painter.frame(frame_time);
        frame_time += frame;
    }

    assert_eq!(backend.0.borrow().live.len(), 1);
    assert!(painter.engine().bpm() > 80.0);
    // beats got closer together as the canvas filled
    let first_gap = beat_times[1] - beat_times[0];
    let n = beat_times.len();
    let last_gap = beat_times[n - 1] - beat_times[n - 2];
    assert!(last_gap < first_gap, "{last_gap:?} !< {first_gap:?}");
}
