/// The display is a 64x32 grid of monochrome pixels
pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// 4096 bytes of addressable memory; every address is masked to 12 bits
pub const MEMORY_SIZE: usize = 4096;
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// ROMs are loaded into memory starting at 0x200
pub const PROGRAM_START: u16 = 0x200;

/// Maximum depth of nested subroutine calls
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad (0x0..=0xF)
pub const KEY_COUNT: usize = 16;

/// Number of CPU cycles executed per frame
pub const CYCLES_PER_FRAME: usize = 15;

/// Frames (and timer decrements) per second
pub const FRAME_RATE: u32 = 60;

/// Each font glyph is 5 rows of an 8-wide sprite
pub const FONT_SPRITE_BYTES: u16 = 5;

/// # Sprite Sheet
/// Glyphs for the hex digits 0..F, stored at the very start of memory.
///
/// Each glyph is 4 pixels wide and 5 pixels tall; only the high nibble of each
/// byte is used, e.g. `0`:
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
