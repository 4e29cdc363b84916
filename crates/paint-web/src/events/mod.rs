pub mod hardware;
pub mod keyboard;
pub mod pointer;

pub use hardware::wire_hardware_bridge;
pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;
