/// # Opcodes
///
/// Every Chip-8 instruction is a single big-endian 16-bit word. The high nibble picks an
/// instruction family and, where a family holds several instructions, the low nibble or
/// low byte picks the member:
/// ```text
/// [c x y n]    c    family (0x0..0xF)
///              x    register selector Vx, or the last register of V0..=Vx
///              y    register selector Vy
///              n    sprite height in rows, or an 8xyN ALU selector
/// [_ _ k k]    kk   8-bit immediate, or an Ex../Fx.. selector
/// [_ n n n]    nnn  12-bit address
/// ```
pub trait Opcode {
    /// All four nibbles, most significant first
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[c___]`
    fn family(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> u8;

    /// `[__y_]`
    fn y(&self) -> u8;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__kk]`
    fn kk(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    fn family(&self) -> u8 {
        (self >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self >> 8) & 0xF) as u8
    }

    fn y(&self) -> u8 {
        ((self >> 4) & 0xF) as u8
    }

    fn n(&self) -> u8 {
        (self & 0xF) as u8
    }

    fn kk(&self) -> u8 {
        (self & 0xFF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines the two bytes of an instruction into an opcode
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}
