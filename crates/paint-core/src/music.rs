use crate::constants::{
    BASE_BPM, BEATS_PER_CYCLE, BEAT_BASE_VELOCITY, BEAT_NOTE_DURATION_SEC, BEAT_VELOCITY_SPAN,
    BPM_SPAN, MAX_CHORD_NOTES, SEQUENCE_NOTES,
};
use smallvec::SmallVec;
use std::time::Duration;

/// A note for the host to play.
///
/// Fields:
/// - `midi`: MIDI note number
/// - `frequency_hz`: pitch in Hertz (already converted from MIDI)
/// - `velocity`: peak gain of the envelope
/// - `start_offset_sec`: delay after "now" at which the note starts
/// - `duration_sec`: nominal envelope length
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoteEvent {
    pub midi: u8,
    pub frequency_hz: f32,
    pub velocity: f32,
    pub start_offset_sec: f32,
    pub duration_sec: f32,
}

impl NoteEvent {
    pub fn new(midi: u8, velocity: f32, duration_sec: f32) -> Self {
        Self {
            midi,
            frequency_hz: midi_to_hz(midi as f32),
            velocity,
            start_offset_sec: 0.0,
            duration_sec,
        }
    }

    pub fn starting_at(mut self, offset_sec: f32) -> Self {
        self.start_offset_sec = offset_sec;
        self
    }
}

/// Tempo range and note pool of the background sequence.
///
/// - `base_bpm` is the tempo of an empty canvas
/// - `bpm_span` is added at full fill
/// - `notes` is the pool indexed by the rotating beat counter
#[derive(Clone, Debug)]
pub struct EngineParams {
    pub base_bpm: f32,
    pub bpm_span: f32,
    pub notes: &'static [u8],
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            base_bpm: BASE_BPM,
            bpm_span: BPM_SPAN,
            notes: &SEQUENCE_NOTES,
        }
    }
}

pub type Chord = SmallVec<[NoteEvent; MAX_CHORD_NOTES]>;

/// Result of one beat.
#[derive(Clone, Debug, Default)]
pub struct Beat {
    /// Beat index the chord was built from (before advancing).
    pub index: usize,
    pub chord: Chord,
    /// New tempo when this beat crossed a fill decile; the beat timer must be
    /// rescheduled at the new period.
    pub new_bpm: Option<f32>,
}

/// Fill-driven beat sequencer over a repeating 8-beat cycle.
///
/// Each call to `tick` is one beat. The chord gets denser and louder as the
/// canvas fills, and the tempo steps up whenever the fill ratio enters a new
/// tenth. The engine does not own a clock: the host calls `tick` from a
/// repeating timer and reschedules it when a beat reports a new tempo.
#[derive(Clone, Debug)]
pub struct MusicEngine {
    pub params: EngineParams,
    bpm: f32,
    current_beat: usize,
    last_fill_ratio: f32,
}

impl Default for MusicEngine {
    fn default() -> Self {
        Self::new(EngineParams::default())
    }
}

impl MusicEngine {
    pub fn new(params: EngineParams) -> Self {
        Self {
            bpm: params.base_bpm,
            params,
            current_beat: 0,
            last_fill_ratio: 0.0,
        }
    }

    #[inline]
    pub fn bpm(&self) -> f32 {
        self.bpm
    }

    #[inline]
    pub fn current_beat(&self) -> usize {
        self.current_beat
    }

    #[inline]
    pub fn last_fill_ratio(&self) -> f32 {
        self.last_fill_ratio
    }

    /// Time between beats at the current tempo.
    pub fn beat_period(&self) -> Duration {
        beat_period(self.bpm)
    }

    /// Advance one beat using the current fill ratio.
    pub fn tick(&mut self, fill_ratio: f32) -> Beat {
        let fill_ratio = fill_ratio.clamp(0.0, 1.0);
        let index = self.current_beat;
        let velocity = beat_velocity(fill_ratio);
        let pool = self.params.notes;

        let mut chord = Chord::new();
        if !pool.is_empty() {
            for i in 0..chord_size(fill_ratio) {
                let midi = pool[(index + i * 2) % pool.len()];
                chord.push(NoteEvent::new(midi, velocity, BEAT_NOTE_DURATION_SEC));
            }
        }

        self.current_beat = (self.current_beat + 1) % BEATS_PER_CYCLE;

        let new_bpm = if decile(fill_ratio) > decile(self.last_fill_ratio) {
            self.bpm = self.params.base_bpm + fill_ratio * self.params.bpm_span;
            self.last_fill_ratio = fill_ratio;
            log::debug!("[music] fill {:.2} -> bpm {:.1}", fill_ratio, self.bpm);
            Some(self.bpm)
        } else {
            None
        };

        Beat {
            index,
            chord,
            new_bpm,
        }
    }

    /// Back to the base tempo. The beat counter and the last retuning fill
    /// level are kept, so tempo only rises again past that level.
    pub fn reset_tempo(&mut self) {
        self.bpm = self.params.base_bpm;
    }
}

/// Number of simultaneous notes for a fill ratio: 1 on an empty canvas, 4 when full.
#[inline]
pub fn chord_size(fill_ratio: f32) -> usize {
    ((fill_ratio.clamp(0.0, 1.0) * MAX_CHORD_NOTES as f32).floor() as usize).max(1)
}

/// Note velocity for a fill ratio: 0.05 empty, 0.15 full.
#[inline]
pub fn beat_velocity(fill_ratio: f32) -> f32 {
    BEAT_BASE_VELOCITY + fill_ratio.clamp(0.0, 1.0) * BEAT_VELOCITY_SPAN
}

#[inline]
fn decile(ratio: f32) -> i32 {
    (ratio * 10.0).floor() as i32
}

/// Period of one beat at `bpm`.
pub fn beat_period(bpm: f32) -> Duration {
    Duration::from_secs_f64(60.0 / bpm.max(1.0) as f64)
}

/// Convert a MIDI note number to Hertz (A4=440 Hz).
///
/// Monotonic and exhibits octave symmetry: +12 semitones doubles the frequency.
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
