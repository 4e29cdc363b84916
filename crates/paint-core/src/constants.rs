use std::time::Duration;

// Shared layout/audio tuning constants used by the core and the web frontend.

// Canvas layout
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const PALETTE_WIDTH: f32 = 50.0; // left strip reserved for swatches
pub const SWATCH_HEIGHT: f32 = 50.0;
pub const SWATCH_OUTLINE_INSET: f32 = 2.0;
pub const SWATCH_OUTLINE_WIDTH: f32 = 2.0;

// Brush
pub const BRUSH_SIZE_MIN: f32 = 1.0;
pub const BRUSH_SIZE_MAX: f32 = 30.0;
pub const BRUSH_SIZE_DEFAULT: f32 = 5.0;
pub const JOYSTICK_SPEED: f32 = 5.0; // canvas px per frame at full deflection
pub const BRUSH_INDICATOR_DIAMETER: f32 = 10.0;
pub const BRUSH_INDICATOR_ALPHA: f32 = 100.0 / 255.0;

// Fill accounting
pub const FILL_INCREMENT: u32 = 5; // approximate pixels per frame of stroke activity

// Color cycling debounce
pub const COLOR_CHANGE_DELAY: Duration = Duration::from_millis(300);

// Tempo
pub const BASE_BPM: f32 = 80.0;
pub const BPM_SPAN: f32 = 60.0; // fill 0..1 maps to 80..140 bpm
pub const BEATS_PER_CYCLE: usize = 8;
pub const MAX_CHORD_NOTES: usize = 4;

// Background sequence (C major scale in MIDI notes)
pub const SEQUENCE_NOTES: [u8; 8] = [60, 62, 64, 65, 67, 69, 71, 72];
pub const BEAT_BASE_VELOCITY: f32 = 0.05;
pub const BEAT_VELOCITY_SPAN: f32 = 0.1;
pub const BEAT_NOTE_DURATION_SEC: f32 = 0.2;

// UI cues
pub const COLOR_NOTE_VELOCITY: f32 = 0.5;
pub const COLOR_NOTE_DURATION_SEC: f32 = 0.3;
pub const CLEAR_ARPEGGIO: [u8; 4] = [72, 67, 64, 60];
pub const CLEAR_STEP_SEC: f32 = 0.1;
pub const CLEAR_VELOCITY: f32 = 0.3;
pub const CLEAR_DURATION_SEC: f32 = 0.2;
pub const SAVE_CHORD: [u8; 4] = [60, 64, 67, 72];
pub const SAVE_STAGGER: Duration = Duration::from_millis(150);
pub const SAVE_VELOCITY: f32 = 0.3;
pub const SAVE_DURATION_SEC: f32 = 0.3;

// Continuous brush tone
pub const BRUSH_TONE_HIGH_HZ: f32 = 800.0; // at the top edge
pub const BRUSH_TONE_LOW_HZ: f32 = 200.0; // at the bottom edge
pub const BRUSH_TONE_MOD_MAX_HZ: f32 = 10.0;
pub const BRUSH_TONE_MOD_RATE: f32 = 0.1; // radians per frame
pub const BRUSH_TONE_AMP: f32 = 0.1;
pub const BRUSH_TONE_RAMP_SEC: f32 = 0.05;

// Export
pub const EXPORT_FILENAME: &str = "myPainting";
pub const EXPORT_EXTENSION: &str = "png";
