use crate::constants::{MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_DEPTH};
use crate::display::FrameBuffer;

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry/borrow/collision flag
/// - (i) a 12-bit memory address register
///
/// Counter
/// - (pc) a 12-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per frame
///
/// ## Memory
/// - `STACK_DEPTH` return addresses for nested subroutine calls
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the font sprite sheet
///     - 0x200.. holds the loaded program
/// - a 64x32 frame buffer
///
/// ## Input
/// - Emulation halts while an Fx0A instruction waits for a key to be written to
///   `register_needing_key`
#[derive(Copy, Clone, Debug)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub register_needing_key: Option<u8>,
}

impl State {
    pub fn new() -> Self {
        // 0x000 - 0x050 is reserved for a sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: FrameBuffer::new(),
            register_needing_key: None,
        }
    }

    /// Reads the byte at `addr`, wrapping the address to 12 bits
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[wrap(addr)]
    }

    /// Writes `value` at `addr`, wrapping the address to 12 bits
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory[wrap(addr)] = value;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap(addr: u16) -> usize {
    (addr as usize) % MEMORY_SIZE
}
