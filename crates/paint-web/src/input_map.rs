// Pure mappings from browser input values to core inputs. Kept free of
// web-sys types so host tests can include this file directly.

use glam::Vec2;
use paint_core::{Key, SimKey};

/// Map a `KeyboardEvent.key` value to a painter key.
#[inline]
pub fn key_for(key: &str) -> Option<Key> {
    match key {
        "d" | "D" => Some(Key::ToggleDebug),
        "ArrowLeft" => Some(Key::Sim(SimKey::Left)),
        "ArrowRight" => Some(Key::Sim(SimKey::Right)),
        "ArrowUp" => Some(Key::Sim(SimKey::Up)),
        "ArrowDown" => Some(Key::Sim(SimKey::Down)),
        " " => Some(Key::Sim(SimKey::Button)),
        "p" | "P" => Some(Key::ShowPanel),
        "c" | "C" => Some(Key::Clear),
        "s" | "S" => Some(Key::Save),
        _ => None,
    }
}

/// What to do with an auto-repeated keydown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepeatAction {
    /// Drop it, but stop the page scrolling under a held arrow or space.
    Suppress,
    /// Drop it silently.
    Ignore,
}

/// Repeats never reach the painter; held simulated controls already stay
/// down until keyup.
#[inline]
pub fn on_repeat(key: Key) -> RepeatAction {
    match key {
        Key::Sim(_) => RepeatAction::Suppress,
        Key::ToggleDebug | Key::ShowPanel | Key::Clear | Key::Save => RepeatAction::Ignore,
    }
}

/// Client (CSS pixel) coordinates to canvas backing-store pixels.
///
/// `rect` is the canvas bounding rect as `[left, top, width, height]`.
#[inline]
pub fn client_to_canvas(client: Vec2, rect: [f32; 4], canvas_size: Vec2) -> Vec2 {
    let [left, top, width, height] = rect;
    if width <= 0.0 || height <= 0.0 {
        return Vec2::new(-1.0, -1.0);
    }
    let x_css = client.x - left;
    let y_css = client.y - top;
    Vec2::new(
        (x_css / width) * canvas_size.x,
        (y_css / height) * canvas_size.y,
    )
}
