//! Application state and the per-frame / per-event update logic.
//!
//! [`Painter`] owns everything that changes while painting. Hosts call
//! [`Painter::frame`] once per animation frame, [`Painter::beat`] from the
//! beat timer, and the `handle_*` methods from input events. Side effects the
//! host must carry out (drawing, sound, DOM, export) come back as values.

use crate::brush::{Brush, DrawableRegion, StrokeSegment};
use crate::constants::{COLOR_CHANGE_DELAY, EXPORT_EXTENSION, EXPORT_FILENAME, JOYSTICK_SPEED};
use crate::cues::{self, BrushTone, DelayedNote};
use crate::fill::{FillEstimator, FillState, FixedIncrement};
use crate::input::{
    ButtonLatch, HardwareLineError, HardwareSource, InputSource, InputState, KeyboardSource,
    SimKey,
};
use crate::music::{Beat, EngineParams, MusicEngine, NoteEvent};
use crate::output::OutputState;
use crate::palette::{self, PaletteColor};
use glam::Vec2;
use std::time::Duration;

/// Runtime tuning for a [`Painter`].
pub struct PainterConfig {
    pub region: DrawableRegion,
    /// Canvas pixels moved per frame at full joystick deflection.
    pub joystick_speed: f32,
    /// Minimum time between two accepted color cycles.
    pub color_change_delay: Duration,
    pub engine: EngineParams,
    pub estimator: Box<dyn FillEstimator>,
    pub initial_color: PaletteColor,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            region: DrawableRegion::CANVAS,
            joystick_speed: JOYSTICK_SPEED,
            color_change_delay: COLOR_CHANGE_DELAY,
            engine: EngineParams::default(),
            estimator: Box::new(FixedIncrement::default()),
            initial_color: PaletteColor::Black,
        }
    }
}

/// Discrete keyboard actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ToggleDebug,
    /// Joystick arrows or the button, only honored in debug mode.
    Sim(SimKey),
    ShowPanel,
    Clear,
    Save,
}

/// Which source feeds the controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Keyboard,
    Hardware,
}

/// Host side effects requested by an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Show or hide the developer instructions.
    SetDebugOverlay(bool),
    ShowHardwarePanel,
    /// Wipe the canvas to white and redraw the palette.
    ClearCanvas,
    /// Cancel the pending beat task and start a new one at this period.
    RescheduleBeat(Duration),
    ExportImage {
        filename: &'static str,
        extension: &'static str,
    },
    /// Play now (plus the note's own start offset on the audio clock).
    PlayNote(NoteEvent),
    /// Play from a host timeout.
    PlayDelayed(DelayedNote),
    /// Stop the browser's default handling of the key.
    PreventDefault,
}

/// Everything the host needs to render one frame.
#[derive(Clone, Debug)]
pub struct FrameReport {
    pub input: InputState,
    /// Segment to stroke, from the previous position to the new one.
    pub segment: StrokeSegment,
    pub color: PaletteColor,
    pub brush_size: f32,
    pub tone: BrushTone,
    pub outputs: OutputState,
    /// Selection note when the button cycled the color this frame.
    pub cycled: Option<NoteEvent>,
    pub button_held: bool,
}

impl FrameReport {
    /// Status mirror text; only produced while the joystick is deflected.
    pub fn joystick_status(&self) -> Option<String> {
        let j = self.input.joystick;
        (j != Vec2::ZERO).then(|| {
            format!(
                "Joystick: X={}, Y={}",
                (j.x * 100.0) as i32,
                (j.y * 100.0) as i32
            )
        })
    }

    pub fn button_status(&self) -> &'static str {
        if self.button_held {
            "Button: Pressed"
        } else {
            "Button: Not Pressed"
        }
    }
}

/// The whole mutable state of the drawing toy.
pub struct Painter {
    color: PaletteColor,
    brush: Brush,
    fill: FillState,
    engine: MusicEngine,
    keyboard: KeyboardSource,
    hardware: HardwareSource,
    mode: InputMode,
    latch: ButtonLatch,
    last_cycle: Option<Duration>,
    color_change_delay: Duration,
    joystick_speed: f32,
    debug_mode: bool,
    frame_count: u64,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(PainterConfig::default())
    }
}

impl Painter {
    pub fn new(config: PainterConfig) -> Self {
        let total = config.region.area();
        Self {
            color: config.initial_color,
            brush: Brush::new(config.region),
            fill: FillState::new(total, config.estimator),
            engine: MusicEngine::new(config.engine),
            keyboard: KeyboardSource::new(),
            hardware: HardwareSource::new(),
            mode: InputMode::Keyboard,
            latch: ButtonLatch::default(),
            last_cycle: None,
            color_change_delay: config.color_change_delay,
            joystick_speed: config.joystick_speed,
            debug_mode: false,
            frame_count: 0,
        }
    }

    /// One animation frame. `now` is time since start on a monotonic clock.
    pub fn frame(&mut self, now: Duration) -> FrameReport {
        let debug = self.debug_mode;
        let input = self.active_source().sample(debug);

        if let Some(size) = input.potentiometer {
            self.brush.set_size(size);
        }
        self.brush.advance(input.joystick, self.joystick_speed);

        let cycled = if self.latch.update(input.button_down) {
            self.cycle_color(now)
        } else {
            None
        };

        let segment = self.brush.stroke_segment();
        let tone = cues::brush_tone(self.brush.position(), self.frame_count);
        let outputs = OutputState::for_color(self.color);
        self.fill.record_stroke_activity(&segment, self.brush.size());
        self.brush.commit();

        let report = FrameReport {
            input,
            segment,
            color: self.color,
            brush_size: self.brush.size(),
            tone,
            outputs,
            cycled,
            button_held: self.latch.is_held(),
        };
        self.frame_count += 1;
        report
    }

    /// One beat of the background sequence.
    pub fn beat(&mut self) -> Beat {
        self.engine.tick(self.fill.fill_ratio())
    }

    /// Step to the next palette color, unless the last step was too recent.
    pub fn cycle_color(&mut self, now: Duration) -> Option<NoteEvent> {
        if let Some(last) = self.last_cycle {
            if now.saturating_sub(last) < self.color_change_delay {
                return None;
            }
        }
        self.last_cycle = Some(now);
        let next = palette::index_of(palette::next(self.color));
        Some(self.select_color_at(next))
    }

    /// Select the swatch at `index` and return its note.
    pub fn select_color_at(&mut self, index: usize) -> NoteEvent {
        self.color = palette::color_at(index);
        log::info!("[palette] color={}", self.color);
        cues::color_select(index)
    }

    /// Mouse press at canvas coordinates; selects a swatch when inside the strip.
    pub fn handle_click(&mut self, point: Vec2) -> Option<NoteEvent> {
        let strip = self.brush.region().min.x;
        if !(0.0..strip).contains(&point.x) {
            return None;
        }
        palette::row_at(point.y).map(|row| self.select_color_at(row))
    }

    pub fn handle_key_down(&mut self, key: Key) -> Vec<Command> {
        match key {
            Key::ToggleDebug => {
                self.debug_mode = !self.debug_mode;
                log::info!("[keys] debug={}", self.debug_mode);
                vec![
                    Command::SetDebugOverlay(self.debug_mode),
                    Command::PreventDefault,
                ]
            }
            Key::Sim(SimKey::Button) => {
                if !self.debug_mode {
                    return Vec::new();
                }
                self.keyboard.key_down(SimKey::Button);
                vec![Command::PreventDefault]
            }
            Key::Sim(arrow) => {
                self.keyboard.key_down(arrow);
                if self.debug_mode {
                    vec![Command::PreventDefault]
                } else {
                    Vec::new()
                }
            }
            Key::ShowPanel => {
                if self.debug_mode {
                    vec![Command::ShowHardwarePanel]
                } else {
                    Vec::new()
                }
            }
            Key::Clear => {
                self.clear();
                let mut cmds = vec![Command::ClearCanvas];
                cmds.extend(cues::clear_arpeggio().into_iter().map(Command::PlayNote));
                cmds.push(Command::RescheduleBeat(self.engine.beat_period()));
                cmds
            }
            Key::Save => {
                log::info!("[keys] save {}.{}", EXPORT_FILENAME, EXPORT_EXTENSION);
                let mut cmds = vec![Command::ExportImage {
                    filename: EXPORT_FILENAME,
                    extension: EXPORT_EXTENSION,
                }];
                cmds.extend(cues::save_chord().into_iter().map(Command::PlayDelayed));
                cmds
            }
        }
    }

    pub fn handle_key_up(&mut self, key: Key) -> Vec<Command> {
        match key {
            Key::Sim(SimKey::Button) => {
                if !self.debug_mode {
                    return Vec::new();
                }
                self.keyboard.key_up(SimKey::Button);
                vec![Command::PreventDefault]
            }
            Key::Sim(arrow) => {
                self.keyboard.key_up(arrow);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Wipe painted state: fill goes back to zero and tempo to base.
    pub fn clear(&mut self) {
        self.fill.reset();
        self.engine.reset_tempo();
        log::info!("[keys] clear, bpm={:.0}", self.engine.bpm());
    }

    /// Brush size from the on-screen potentiometer slider.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush.set_size(size);
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            log::info!("[input] source={:?}", mode);
        }
        self.mode = mode;
        self.keyboard.release_all();
    }

    /// Feed one line from the controller board.
    pub fn push_hardware_line(&mut self, line: &str) -> Result<(), HardwareLineError> {
        self.hardware.push_line(line)
    }

    /// Drop held simulated keys, e.g. when the page loses focus.
    pub fn release_keys(&mut self) {
        self.keyboard.release_all();
    }

    fn active_source(&mut self) -> &mut dyn InputSource {
        match self.mode {
            InputMode::Keyboard => &mut self.keyboard,
            InputMode::Hardware => &mut self.hardware,
        }
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn fill(&self) -> &FillState {
        &self.fill
    }

    pub fn engine(&self) -> &MusicEngine {
        &self.engine
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }
}
