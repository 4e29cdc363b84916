pub mod app;
pub mod brush;
pub mod constants;
pub mod cues;
pub mod fill;
pub mod input;
pub mod music;
pub mod output;
pub mod palette;
pub mod timer;

pub use app::*;
pub use brush::*;
pub use constants::*;
pub use fill::*;
pub use input::*;
pub use music::*;
pub use output::*;
pub use palette::{PaletteColor, PaletteEntry, UnknownColor, PALETTE, PALETTE_SIZE};
pub use timer::*;
