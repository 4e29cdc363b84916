use crate::palette::PaletteColor;

/// Simulated LED and buzzer outputs of the controller board.
///
/// Derived from the current color every frame; never set directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputState {
    pub led_on: bool,
    pub buzzer_on: bool,
}

impl OutputState {
    #[inline]
    pub fn for_color(color: PaletteColor) -> Self {
        let warm = color.is_warm();
        Self {
            led_on: warm,
            buzzer_on: warm,
        }
    }
}
