//! Instruction handlers.
//!
//! Each handler receives the state with the program counter already advanced past the
//! opcode and returns the state after the instruction completes.

use rand::{Rng, RngCore};

use crate::constants::{ADDRESS_MASK, FONT_SPRITE_BYTES, STACK_DEPTH};
use crate::error::Error;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::state::State;

/// What an instruction can observe outside of the machine state
pub struct Io<'a> {
    pub keypad: &'a Keypad,
    pub rng: &'a mut dyn RngCore,
}

/// The address of the instruction currently executing
fn current(state: &State) -> u16 {
    state.pc.wrapping_sub(0x2) & ADDRESS_MASK
}

/// The pc after skipping the next instruction
fn skip(state: &State) -> u16 {
    state.pc.wrapping_add(0x2) & ADDRESS_MASK
}

/// clear
pub fn clr(_op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut frame_buffer = state.frame_buffer;
    frame_buffer.clear();
    Ok(State {
        frame_buffer,
        ..*state
    })
}

/// PC = STACK.pop()
pub fn rts(_op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let sp = state
        .sp
        .checked_sub(0x1)
        .ok_or(Error::StackUnderflow { pc: current(state) })?;
    Ok(State {
        pc: state.stack[sp as usize],
        sp,
        ..*state
    })
}

/// PC = addr
pub fn jump(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        pc: op.nnn(),
        ..*state
    })
}

/// STACK.push(PC); PC = addr
pub fn call(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    if state.sp as usize >= STACK_DEPTH {
        return Err(Error::StackOverflow {
            pc: current(state),
            depth: STACK_DEPTH,
        });
    }
    let mut stack = state.stack;
    stack[state.sp as usize] = state.pc;
    Ok(State {
        pc: op.nnn(),
        sp: state.sp + 0x1,
        stack,
        ..*state
    })
}

/// if Vx == kk then pc += 2
pub fn ske(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] == op.kk() {
        skip(state)
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// if Vx != kk then pc += 2
pub fn skne(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] != op.kk() {
        skip(state)
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// if Vx == Vy then pc += 2
pub fn skre(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] == state.v[op.y() as usize] {
        skip(state)
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// Vx = kk
pub fn load(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = op.kk();
    Ok(State { v, ..*state })
}

/// Vx += kk
/// Wraps on overflow without touching VF
pub fn add(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = v[op.x() as usize].wrapping_add(op.kk());
    Ok(State { v, ..*state })
}

/// Vx = Vy
pub fn mv(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx |= Vy
pub fn or(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] |= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx &= Vy
pub fn and(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] &= v[op.y() as usize];
    Ok(State { v, ..*state })
}

/// Vx ^= Vy
pub fn xor(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] ^= v[op.y() as usize];
    Ok(State { v, ..*state })
}

// The arithmetic and shift handlers below write VF after Vx, so the flag wins when x is F.

/// Vx += Vy; VF = carry
pub fn addr(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let (res, carry) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    let mut v = state.v;
    v[op.x() as usize] = res;
    v[0xF] = carry as u8;
    Ok(State { v, ..*state })
}

/// Vx -= Vy; VF = Vx > Vy
pub fn sub(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    let mut v = state.v;
    v[op.x() as usize] = vx.wrapping_sub(vy);
    v[0xF] = (vx > vy) as u8;
    Ok(State { v, ..*state })
}

/// Vx >>= 1; VF = the bit shifted out
/// Vy is ignored
pub fn shr(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let vx = state.v[op.x() as usize];
    let mut v = state.v;
    v[op.x() as usize] = vx >> 1;
    v[0xF] = vx & 0x1;
    Ok(State { v, ..*state })
}

/// Vx = Vy - Vx; VF = Vy > Vx
pub fn subn(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let (vx, vy) = (state.v[op.x() as usize], state.v[op.y() as usize]);
    let mut v = state.v;
    v[op.x() as usize] = vy.wrapping_sub(vx);
    v[0xF] = (vy > vx) as u8;
    Ok(State { v, ..*state })
}

/// Vx <<= 1; VF = the bit shifted out
/// Vy is ignored
pub fn shl(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let vx = state.v[op.x() as usize];
    let mut v = state.v;
    v[op.x() as usize] = vx << 1;
    v[0xF] = vx >> 7;
    Ok(State { v, ..*state })
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let pc = if state.v[op.x() as usize] != state.v[op.y() as usize] {
        skip(state)
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// I = addr
pub fn loadi(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        i: op.nnn(),
        ..*state
    })
}

/// PC = V0 + addr
pub fn jumpi(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        pc: (u16::from(state.v[0x0]) + op.nnn()) & ADDRESS_MASK,
        ..*state
    })
}

/// Vx = rand_byte & kk
pub fn rand(op: &dyn Opcode, state: &State, io: &mut Io) -> Result<State, Error> {
    let rand_byte: u8 = io.rng.gen();
    let mut v = state.v;
    v[op.x() as usize] = rand_byte & op.kk();
    Ok(State { v, ..*state })
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an 8-wide sprite from memory I..I+n onto the FrameBuffer at (Vx, Vy) with wrapping.
/// Sets VF if any lit pixel was erased.
pub fn draw(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let origin_x = state.v[op.x() as usize] as isize;
    let origin_y = state.v[op.y() as usize] as isize;
    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;

    // Reset the flag before accumulating collisions
    v[0xF] = 0x0;

    for row in 0..op.n() {
        let sprite = state.read(state.i.wrapping_add(u16::from(row)));
        for col in 0..8 {
            if sprite & (0x80 >> col) != 0
                && frame_buffer.toggle_pixel(origin_x + col as isize, origin_y + row as isize)
            {
                v[0xF] = 0x1;
            }
        }
    }

    Ok(State {
        v,
        frame_buffer,
        ..*state
    })
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: &dyn Opcode, state: &State, io: &mut Io) -> Result<State, Error> {
    let pc = if io.keypad.is_pressed(state.v[op.x() as usize]) {
        skip(state)
    } else {
        state.pc
    };
    Ok(State { pc, ..*state })
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: &dyn Opcode, state: &State, io: &mut Io) -> Result<State, Error> {
    let pc = if io.keypad.is_pressed(state.v[op.x() as usize]) {
        state.pc
    } else {
        skip(state)
    };
    Ok(State { pc, ..*state })
}

/// Vx = DT
pub fn moved(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    v[op.x() as usize] = state.delay_timer;
    Ok(State { v, ..*state })
}

/// await keypress for Vx
/// The key itself is written by the CPU once the keypad reports one.
pub fn keyd(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    log::debug!("awaiting key for V{:X}", op.x());
    Ok(State {
        register_needing_key: Some(op.x()),
        ..*state
    })
}

/// DT = Vx
pub fn loads(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        delay_timer: state.v[op.x() as usize],
        ..*state
    })
}

/// ST = Vx
pub fn ld(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        sound_timer: state.v[op.x() as usize],
        ..*state
    })
}

/// I += Vx
/// No flag is set when I leaves the 12-bit address space; it just wraps
pub fn addi(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        i: (state.i + u16::from(state.v[op.x() as usize])) & ADDRESS_MASK,
        ..*state
    })
}

/// I = Vx * 5
/// Set I to the memory address of the font glyph for Vx
/// See constants::SPRITE_SHEET
pub fn ldspr(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    Ok(State {
        i: u16::from(state.v[op.x() as usize]) * FONT_SPRITE_BYTES,
        ..*state
    })
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let vx = state.v[op.x() as usize];
    let mut next = *state;
    for (offset, digit) in [vx / 100, vx / 10 % 10, vx % 10].iter().enumerate() {
        next.write(state.i.wrapping_add(offset as u16), *digit);
    }
    Ok(next)
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut next = *state;
    for register in 0..=op.x() {
        next.write(state.i.wrapping_add(u16::from(register)), state.v[register as usize]);
    }
    Ok(next)
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: &dyn Opcode, state: &State, _io: &mut Io) -> Result<State, Error> {
    let mut v = state.v;
    for register in 0..=op.x() {
        v[register as usize] = state.read(state.i.wrapping_add(u16::from(register)));
    }
    Ok(State { v, ..*state })
}
