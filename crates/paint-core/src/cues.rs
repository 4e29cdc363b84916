//! Fixed UI sounds and the continuous brush tone.

use crate::constants::*;
use crate::music::NoteEvent;
use crate::palette;
use glam::Vec2;
use std::time::Duration;

/// A note fired by a host timeout `delay` after the triggering event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayedNote {
    pub delay: Duration,
    pub note: NoteEvent,
}

/// The palette note for a swatch, played once on selection.
pub fn color_select(index: usize) -> NoteEvent {
    NoteEvent::new(
        palette::note_at(index),
        COLOR_NOTE_VELOCITY,
        COLOR_NOTE_DURATION_SEC,
    )
}

/// Descending arpeggio for "clear", offsets scheduled on the audio clock.
pub fn clear_arpeggio() -> [NoteEvent; 4] {
    let mut out = [NoteEvent::default(); 4];
    for (i, midi) in CLEAR_ARPEGGIO.iter().enumerate() {
        out[i] = NoteEvent::new(*midi, CLEAR_VELOCITY, CLEAR_DURATION_SEC)
            .starting_at(i as f32 * CLEAR_STEP_SEC);
    }
    out
}

/// Ascending chord for "save", one note per staggered host timeout.
pub fn save_chord() -> [DelayedNote; 4] {
    let mut out = [DelayedNote {
        delay: Duration::ZERO,
        note: NoteEvent::default(),
    }; 4];
    for (i, midi) in SAVE_CHORD.iter().enumerate() {
        out[i] = DelayedNote {
            delay: SAVE_STAGGER * i as u32,
            note: NoteEvent::new(*midi, SAVE_VELOCITY, SAVE_DURATION_SEC),
        };
    }
    out
}

/// Target settings for the brush oscillator this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushTone {
    pub frequency_hz: f32,
    pub amplitude: f32,
    pub ramp_sec: f32,
}

/// Pitch falls from top to bottom; a vibrato deepens toward the right edge.
pub fn brush_tone(position: Vec2, frame_count: u64) -> BrushTone {
    let pitch = map_range(
        position.y,
        0.0,
        CANVAS_HEIGHT,
        BRUSH_TONE_HIGH_HZ,
        BRUSH_TONE_LOW_HZ,
    );
    let depth = map_range(
        position.x,
        PALETTE_WIDTH,
        CANVAS_WIDTH,
        0.0,
        BRUSH_TONE_MOD_MAX_HZ,
    );
    let phase = (frame_count as f64 * BRUSH_TONE_MOD_RATE as f64).sin() as f32;
    BrushTone {
        frequency_hz: pitch + phase * depth,
        amplitude: BRUSH_TONE_AMP,
        ramp_sec: BRUSH_TONE_RAMP_SEC,
    }
}

/// Linear re-map of `v` from one range onto another (unclamped).
#[inline]
pub fn map_range(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    if (in_hi - in_lo).abs() < f32::EPSILON {
        return out_lo;
    }
    out_lo + (v - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}
