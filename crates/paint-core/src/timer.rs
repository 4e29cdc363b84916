//! Cancellable repeating timer for the beat sequencer.

use std::time::Duration;

/// Host facility able to run a callback repeatedly at a fixed period.
///
/// The callback itself is bound by the backend; the timer only decides when
/// to start and stop it.
pub trait TimerBackend {
    type Handle;

    /// Start a repeating task. `None` if the host refused to schedule it.
    fn start_repeating(&mut self, period: Duration) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Owner of the single pending beat task.
///
/// At most one task is ever live: `reschedule` cancels the current one
/// before starting the next, so a tempo change never leaves two competing
/// tick streams.
pub struct BeatTimer<B: TimerBackend> {
    backend: B,
    pending: Option<B::Handle>,
    period: Option<Duration>,
}

impl<B: TimerBackend> BeatTimer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pending: None,
            period: None,
        }
    }

    /// Replace the pending task with one at `period`.
    pub fn reschedule(&mut self, period: Duration) {
        self.stop();
        self.pending = self.backend.start_repeating(period);
        if self.pending.is_some() {
            self.period = Some(period);
            log::debug!("[timer] beat every {} ms", period.as_millis());
        } else {
            log::warn!("[timer] host refused to schedule beat timer");
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.backend.cancel(handle);
        }
        self.period = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Period of the live task, if any.
    #[inline]
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl<B: TimerBackend> Drop for BeatTimer<B> {
    fn drop(&mut self) {
        self.stop();
    }
}
