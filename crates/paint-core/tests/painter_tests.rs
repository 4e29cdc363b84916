// Host-side tests for the frame loop and event handling of `Painter`.

use glam::Vec2;
use paint_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn debug_painter() -> Painter {
    let mut p = Painter::default();
    p.handle_key_down(Key::ToggleDebug);
    assert!(p.debug_mode());
    p
}

#[test]
fn brush_stays_inside_drawable_region() {
    let mut p = debug_painter();
    let moves = [SimKey::Left, SimKey::Up, SimKey::Right, SimKey::Down];
    let mut now = Duration::ZERO;
    for key in moves {
        p.handle_key_down(Key::Sim(key));
        for _ in 0..200 {
            let r = p.frame(now);
            now += FRAME;
            let pos = r.segment.to;
            assert!(pos.x >= PALETTE_WIDTH && pos.x <= CANVAS_WIDTH, "x={}", pos.x);
            assert!(pos.y >= 0.0 && pos.y <= CANVAS_HEIGHT, "y={}", pos.y);
        }
        p.handle_key_up(Key::Sim(key));
    }
}

#[test]
fn segment_runs_from_previous_to_new_position() {
    let mut p = debug_painter();
    p.handle_key_down(Key::Sim(SimKey::Right));
    let r1 = p.frame(Duration::ZERO);
    assert_eq!(r1.segment.from, Vec2::new(425.0, 300.0));
    assert_eq!(r1.segment.to, Vec2::new(430.0, 300.0));
    let r2 = p.frame(FRAME);
    assert_eq!(r2.segment.from, r1.segment.to);
    assert_eq!(r2.segment.to, Vec2::new(435.0, 300.0));
}

#[test]
fn joystick_ignored_outside_debug_mode() {
    let mut p = Painter::default();
    p.handle_key_down(Key::Sim(SimKey::Down));
    let r = p.frame(Duration::ZERO);
    assert_eq!(r.segment.length(), 0.0);
    assert_eq!(r.input, InputState::default());
    assert!(r.joystick_status().is_none());
}

#[test]
fn fill_accumulates_monotonically_and_clamps() {
    let region = DrawableRegion {
        min: Vec2::new(50.0, 0.0),
        max: Vec2::new(60.0, 10.0),
    };
    let mut p = Painter::new(PainterConfig {
        region,
        ..PainterConfig::default()
    });
    assert_eq!(p.fill().total(), 100);
    let mut last = 0;
    for i in 0..40 {
        p.frame(FRAME * i);
        let filled = p.fill().filled();
        assert!(filled >= last);
        assert!(filled <= p.fill().total());
        last = filled;
    }
    assert_eq!(p.fill().filled(), 100);
    assert_eq!(p.fill().fill_ratio(), 1.0);
}

#[test]
fn default_fill_total_is_drawable_area() {
    let p = Painter::default();
    assert_eq!(p.fill().total(), 750 * 600);
}

#[test]
fn button_press_cycles_once_per_edge() {
    let mut p = debug_painter();
    assert_eq!(p.color(), PaletteColor::Black);

    p.handle_key_down(Key::Sim(SimKey::Button));
    let r = p.frame(ms(1000));
    assert_eq!(p.color(), PaletteColor::Red);
    let note = r.cycled.expect("edge should cycle");
    assert_eq!(note.midi, 60);
    assert_eq!(r.button_status(), "Button: Pressed");

    // held: no further changes, however long
    for i in 1..60u32 {
        let r = p.frame(ms(1000) + FRAME * i);
        assert!(r.cycled.is_none());
    }
    assert_eq!(p.color(), PaletteColor::Red);

    p.handle_key_up(Key::Sim(SimKey::Button));
    let r = p.frame(ms(3000));
    assert_eq!(r.button_status(), "Button: Not Pressed");
}

#[test]
fn holding_button_for_a_second_changes_color_at_most_once_per_window() {
    let mut p = debug_painter();
    p.handle_key_down(Key::Sim(SimKey::Button));
    let mut changes = 0;
    let mut now = Duration::ZERO;
    while now < ms(1000) {
        if p.frame(now).cycled.is_some() {
            changes += 1;
        }
        now += FRAME;
    }
    assert_eq!(changes, 1);
}

#[test]
fn cycle_requests_inside_debounce_window_collapse() {
    let mut p = Painter::default();
    assert!(p.cycle_color(ms(1000)).is_some());
    assert!(p.cycle_color(ms(1299)).is_none());
    assert_eq!(p.color(), PaletteColor::Red);

    assert!(p.cycle_color(ms(1300)).is_some());
    assert_eq!(p.color(), PaletteColor::Orange);
    assert!(p.cycle_color(ms(1600)).is_some());
    assert_eq!(p.color(), PaletteColor::Yellow);
}

#[test]
fn rapid_button_taps_are_debounced() {
    let mut p = debug_painter();
    let mut now = ms(500);
    let mut changes = 0;
    // tap every 100ms for a second
    for _ in 0..10 {
        p.handle_key_down(Key::Sim(SimKey::Button));
        if p.frame(now).cycled.is_some() {
            changes += 1;
        }
        p.handle_key_up(Key::Sim(SimKey::Button));
        p.frame(now + FRAME);
        now += ms(100);
    }
    // accepted at 500, 800, 1100, 1400
    assert_eq!(changes, 4);
}

#[test]
fn clicking_palette_row_selects_color_and_plays_note_once() {
    let mut p = Painter::default();
    let note = p
        .handle_click(Vec2::new(25.0, 3.0 * SWATCH_HEIGHT + 10.0))
        .expect("row 3 selects");
    assert_eq!(p.color(), PALETTE[3].color);
    assert_eq!(note.midi, PALETTE[3].note);
    assert!((note.velocity - 0.5).abs() < 1e-6);

    // clicks on the drawing area or below the strip do nothing
    assert!(p.handle_click(Vec2::new(300.0, 175.0)).is_none());
    assert!(p.handle_click(Vec2::new(25.0, 550.0)).is_none());
    assert_eq!(p.color(), PALETTE[3].color);
}

#[test]
fn outputs_follow_warm_colors() {
    let mut p = Painter::default();
    for i in 0..PALETTE_SIZE {
        p.select_color_at(i);
        let r = p.frame(FRAME * i as u32);
        let warm = matches!(
            PALETTE[i].color,
            PaletteColor::Red | PaletteColor::Orange | PaletteColor::Yellow
        );
        assert_eq!(r.outputs.led_on, warm, "led for {}", PALETTE[i].color);
        assert_eq!(r.outputs.buzzer_on, warm, "buzzer for {}", PALETTE[i].color);
    }
}

#[test]
fn clear_resets_fill_and_tempo() {
    let mut p = Painter::default();
    for i in 0..50_000u32 {
        p.frame(FRAME * i);
    }
    assert!(p.fill().fill_ratio() > 0.5);
    for _ in 0..3 {
        p.beat();
    }
    assert!(p.engine().bpm() > 80.0);

    let cmds = p.handle_key_down(Key::Clear);
    assert_eq!(p.fill().filled(), 0);
    assert_eq!(p.engine().bpm(), 80.0);
    assert_eq!(cmds[0], Command::ClearCanvas);
    assert!(cmds.contains(&Command::RescheduleBeat(Duration::from_millis(750))));

    let offsets: Vec<f32> = cmds
        .iter()
        .filter_map(|c| match c {
            Command::PlayNote(n) => Some(n.start_offset_sec),
            _ => None,
        })
        .collect();
    assert_eq!(offsets.len(), 4);
    for (i, o) in offsets.iter().enumerate() {
        assert!((o - i as f32 * 0.1).abs() < 1e-6);
    }
}

#[test]
fn tempo_stays_at_base_after_clear_until_previous_fill_is_passed() {
    let mut p = Painter::default();
    for i in 0..54_000u32 {
        p.frame(FRAME * i);
    }
    let retune = p.beat().new_bpm.expect("fill crossed a decile");
    assert!(retune > 80.0);
    let last = p.engine().last_fill_ratio();
    assert!(last > 0.5);

    p.handle_key_down(Key::Clear);
    assert_eq!(p.engine().bpm(), 80.0);
    assert_eq!(p.engine().last_fill_ratio(), last);

    // repaint about 11% of the canvas: still below the remembered level
    for i in 0..10_000u32 {
        p.frame(FRAME * (54_000 + i));
    }
    assert!(p.fill().fill_ratio() > 0.1);
    assert!(p.beat().new_bpm.is_none());
    assert_eq!(p.engine().bpm(), 80.0);
}

#[test]
fn save_exports_and_staggers_chord() {
    let mut p = Painter::default();
    let cmds = p.handle_key_down(Key::Save);
    assert_eq!(
        cmds[0],
        Command::ExportImage {
            filename: "myPainting",
            extension: "png"
        }
    );
    let delayed: Vec<(u128, u8)> = cmds
        .iter()
        .filter_map(|c| match c {
            Command::PlayDelayed(d) => Some((d.delay.as_millis(), d.note.midi)),
            _ => None,
        })
        .collect();
    assert_eq!(delayed, vec![(0, 60), (150, 64), (300, 67), (450, 72)]);
}

#[test]
fn panel_and_button_keys_need_debug_mode() {
    let mut p = Painter::default();
    assert!(p.handle_key_down(Key::ShowPanel).is_empty());
    assert!(p.handle_key_down(Key::Sim(SimKey::Button)).is_empty());

    let cmds = p.handle_key_down(Key::ToggleDebug);
    assert_eq!(cmds[0], Command::SetDebugOverlay(true));
    assert_eq!(
        p.handle_key_down(Key::ShowPanel),
        vec![Command::ShowHardwarePanel]
    );
    let cmds = p.handle_key_down(Key::ToggleDebug);
    assert_eq!(cmds[0], Command::SetDebugOverlay(false));
}

#[test]
fn joystick_status_mirrors_deflection() {
    let mut p = debug_painter();
    p.handle_key_down(Key::Sim(SimKey::Left));
    p.handle_key_down(Key::Sim(SimKey::Down));
    let r = p.frame(Duration::ZERO);
    assert_eq!(r.joystick_status().as_deref(), Some("Joystick: X=-100, Y=100"));
}

#[test]
fn hardware_source_drives_brush_and_size() {
    let mut p = Painter::default();
    p.set_input_mode(InputMode::Hardware);
    assert_eq!(p.input_mode(), InputMode::Hardware);
    p.push_hardware_line("1023,512,0,1023").expect("valid line");
    let r = p.frame(Duration::ZERO);
    // hardware is not gated by debug mode
    assert_eq!(r.segment.to, Vec2::new(430.0, 300.0));
    assert_eq!(r.brush_size, BRUSH_SIZE_MAX);

    assert!(p.push_hardware_line("garbage").is_err());
    // last good reading is kept
    let r = p.frame(FRAME);
    assert_eq!(r.segment.to, Vec2::new(435.0, 300.0));

    p.push_hardware_line("512,512,1,0").expect("valid line");
    let r = p.frame(ms(500));
    assert!(r.cycled.is_some());
    assert_eq!(r.brush_size, BRUSH_SIZE_MIN);
}

#[test]
fn beat_uses_current_fill() {
    let mut p = Painter::default();
    let beat = p.beat();
    assert_eq!(beat.chord.len(), 1);
    for i in 0..90_000u32 {
        p.frame(FRAME * i);
    }
    let beat = p.beat();
    assert_eq!(beat.chord.len(), 4);
    assert!(beat.new_bpm.is_some());
}

#[test]
fn slider_sets_brush_size_within_range() {
    let mut p = Painter::default();
    p.set_brush_size(12.0);
    assert_eq!(p.brush().size(), 12.0);
    p.set_brush_size(45.0);
    assert_eq!(p.brush().size(), 30.0);
}
