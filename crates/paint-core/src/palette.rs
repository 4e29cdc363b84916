//! The fixed ten-color palette.
//!
//! Index order is the visual stacking order of the swatch strip (top to
//! bottom) and also the pitch order of the color-selection notes.

use crate::constants::SWATCH_HEIGHT;
use std::fmt;
use std::str::FromStr;

/// One of the ten palette colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Brown,
    White,
    Black,
}

/// A palette slot: the color and the MIDI note played when it is selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: PaletteColor,
    pub note: u8,
}

pub const PALETTE_SIZE: usize = 10;

pub const PALETTE: [PaletteEntry; PALETTE_SIZE] = [
    PaletteEntry { color: PaletteColor::Red, note: 60 },
    PaletteEntry { color: PaletteColor::Orange, note: 62 },
    PaletteEntry { color: PaletteColor::Yellow, note: 64 },
    PaletteEntry { color: PaletteColor::Green, note: 65 },
    PaletteEntry { color: PaletteColor::Cyan, note: 67 },
    PaletteEntry { color: PaletteColor::Blue, note: 69 },
    PaletteEntry { color: PaletteColor::Magenta, note: 71 },
    PaletteEntry { color: PaletteColor::Brown, note: 72 },
    PaletteEntry { color: PaletteColor::White, note: 74 },
    PaletteEntry { color: PaletteColor::Black, note: 76 },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette color {0:?}")]
pub struct UnknownColor(pub String);

impl PaletteColor {
    /// CSS color keyword used for strokes and swatches.
    pub fn css_name(self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Green => "green",
            PaletteColor::Cyan => "cyan",
            PaletteColor::Blue => "blue",
            PaletteColor::Magenta => "magenta",
            PaletteColor::Brown => "brown",
            PaletteColor::White => "white",
            PaletteColor::Black => "black",
        }
    }

    /// Warm colors drive the LED/buzzer outputs.
    #[inline]
    pub fn is_warm(self) -> bool {
        matches!(
            self,
            PaletteColor::Red | PaletteColor::Orange | PaletteColor::Yellow
        )
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for PaletteColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .map(|e| e.color)
            .find(|c| c.css_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Color stored at `index`. Indices wrap so callers can step freely.
#[inline]
pub fn color_at(index: usize) -> PaletteColor {
    PALETTE[index % PALETTE_SIZE].color
}

/// Selection note stored at `index`.
#[inline]
pub fn note_at(index: usize) -> u8 {
    PALETTE[index % PALETTE_SIZE].note
}

/// Position of `color` in the palette.
pub fn index_of(color: PaletteColor) -> usize {
    // Every color is a member, so the scan always finds it.
    PALETTE
        .iter()
        .position(|e| e.color == color)
        .unwrap_or_default()
}

/// Next color in palette order, wrapping from the last back to the first.
#[inline]
pub fn next(color: PaletteColor) -> PaletteColor {
    color_at(index_of(color) + 1)
}

/// Palette row under a vertical canvas coordinate, if any.
pub fn row_at(y: f32) -> Option<usize> {
    if y.is_nan() || y < 0.0 {
        return None;
    }
    let row = (y / SWATCH_HEIGHT).floor() as usize;
    (row < PALETTE_SIZE).then_some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_of_inverts_color_at() {
        for i in 0..PALETTE_SIZE {
            assert_eq!(index_of(color_at(i)), i);
        }
    }

    #[test]
    fn next_wraps_black_to_red() {
        assert_eq!(next(PaletteColor::Black), PaletteColor::Red);
        assert_eq!(next(PaletteColor::Red), PaletteColor::Orange);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Magenta".parse::<PaletteColor>(), Ok(PaletteColor::Magenta));
        assert!("teal".parse::<PaletteColor>().is_err());
    }

    #[test]
    fn row_at_covers_only_the_swatch_strip() {
        assert_eq!(row_at(0.0), Some(0));
        assert_eq!(row_at(49.9), Some(0));
        assert_eq!(row_at(175.0), Some(3));
        assert_eq!(row_at(499.0), Some(9));
        assert_eq!(row_at(500.0), None);
        assert_eq!(row_at(-1.0), None);
        assert_eq!(row_at(f32::NAN), None);
    }
}
