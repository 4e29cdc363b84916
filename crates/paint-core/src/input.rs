//! Input sources for the joystick/button/potentiometer controls.
//!
//! The frame loop only sees [`InputState`]. Where it comes from is an
//! [`InputSource`]: either the keyboard simulation used in debug mode or a
//! real microcontroller streaming text readings.

use crate::constants::{BRUSH_SIZE_MAX, BRUSH_SIZE_MIN};
use glam::Vec2;

/// Snapshot of the controls for one frame.
///
/// `joystick` components are always one of -1, 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub joystick: Vec2,
    pub button_down: bool,
    /// Brush size read from a physical potentiometer, if the source has one.
    pub potentiometer: Option<f32>,
}

/// Anything able to produce an [`InputState`] once per frame.
pub trait InputSource {
    /// Sample the controls. `debug_mode` gates simulated sources.
    fn sample(&mut self, debug_mode: bool) -> InputState;
    fn name(&self) -> &'static str;
}

/// Keys the keyboard simulation cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    Left,
    Right,
    Up,
    Down,
    Button,
}

/// Keyboard stand-in for the hardware controls.
///
/// Tracks which keys are held; sampling yields nothing unless debug mode is
/// on. Left wins over right and up wins over down when both are held.
#[derive(Clone, Debug, Default)]
pub struct KeyboardSource {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    button: bool,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: SimKey) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: SimKey) {
        self.set(key, false);
    }

    /// Forget every held key (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: SimKey, held: bool) {
        match key {
            SimKey::Left => self.left = held,
            SimKey::Right => self.right = held,
            SimKey::Up => self.up = held,
            SimKey::Down => self.down = held,
            SimKey::Button => self.button = held,
        }
    }
}

impl InputSource for KeyboardSource {
    fn sample(&mut self, debug_mode: bool) -> InputState {
        if !debug_mode {
            return InputState::default();
        }
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        InputState {
            joystick: Vec2::new(x, y),
            button_down: self.button,
            potentiometer: None,
        }
    }

    fn name(&self) -> &'static str {
        "keyboard"
    }
}

/// Failure to understand one line from the microcontroller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HardwareLineError {
    #[error("expected 4 comma-separated fields, got {0}")]
    FieldCount(usize),
    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

/// Full-scale value of the microcontroller's 10-bit ADC.
pub const ADC_MAX: u32 = 1023;
const ADC_CENTER: i32 = 512;
const JOYSTICK_DEADZONE: i32 = 100;

/// Readings streamed from a real controller board.
///
/// Each line is `x,y,button,pot`: two joystick axes and the potentiometer
/// as raw ADC values (0..=1023) and the button as 0 or 1. The most recent
/// valid line is what gets sampled.
#[derive(Clone, Debug, Default)]
pub struct HardwareSource {
    latest: InputState,
    lines_accepted: u64,
}

impl HardwareSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and store one reading. Invalid lines leave the last reading in place.
    pub fn push_line(&mut self, line: &str) -> Result<(), HardwareLineError> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(HardwareLineError::FieldCount(fields.len()));
        }
        let x = parse_adc("x", fields[0])?;
        let y = parse_adc("y", fields[1])?;
        let button = match fields[2] {
            "0" => false,
            "1" => true,
            other => {
                return Err(HardwareLineError::NotANumber {
                    field: "button",
                    value: other.to_string(),
                })
            }
        };
        let pot = parse_adc("pot", fields[3])?;
        self.latest = InputState {
            joystick: Vec2::new(axis_from_adc(x), axis_from_adc(y)),
            button_down: button,
            potentiometer: Some(brush_size_from_adc(pot)),
        };
        self.lines_accepted += 1;
        Ok(())
    }

    pub fn lines_accepted(&self) -> u64 {
        self.lines_accepted
    }
}

impl InputSource for HardwareSource {
    fn sample(&mut self, _debug_mode: bool) -> InputState {
        self.latest
    }

    fn name(&self) -> &'static str {
        "hardware"
    }
}

fn parse_adc(field: &'static str, raw: &str) -> Result<u32, HardwareLineError> {
    let value: u32 = raw.parse().map_err(|_| HardwareLineError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if value > ADC_MAX {
        return Err(HardwareLineError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Quantize an analog axis to -1, 0 or 1 around the resting center.
#[inline]
pub fn axis_from_adc(raw: u32) -> f32 {
    let offset = raw as i32 - ADC_CENTER;
    if offset < -JOYSTICK_DEADZONE {
        -1.0
    } else if offset > JOYSTICK_DEADZONE {
        1.0
    } else {
        0.0
    }
}

/// Map a potentiometer reading onto the brush size range.
#[inline]
pub fn brush_size_from_adc(raw: u32) -> f32 {
    let t = raw.min(ADC_MAX) as f32 / ADC_MAX as f32;
    (BRUSH_SIZE_MIN + t * (BRUSH_SIZE_MAX - BRUSH_SIZE_MIN)).round()
}

/// Rising-edge detector for the button.
///
/// `update` returns true exactly once per released→held transition, no
/// matter how many frames the button stays down.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonLatch {
    last: bool,
}

impl ButtonLatch {
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.last;
        self.last = pressed;
        edge
    }

    pub fn is_held(&self) -> bool {
        self.last
    }
}
