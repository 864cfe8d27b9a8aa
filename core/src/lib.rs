pub use chip8::Chip8;
pub use display::FrameBuffer;
pub use error::Error;
pub use keypad::Keypad;
pub use peripherals::{Mute, Screen, Speaker};

mod chip8;
pub mod constants;
mod display;
mod error;
mod instruction;
mod keypad;
mod opcode;
mod operations;
mod peripherals;
pub mod state;
