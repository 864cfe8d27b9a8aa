use crate::constants::ADDRESS_MASK;
use crate::error::Error;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A handler for a single kind of instruction
pub type Operation = fn(op: &dyn Opcode, state: &State, io: &mut Io) -> Result<State, Error>;

/// Selects the correct Operation for a given Opcode, if there is one
pub fn from_op(op: &dyn Opcode) -> Option<Operation> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => rts,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => ske,
        (0x4, ..) => skne,
        (0x5, .., 0x0) => skre,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => addr,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skrne,
        (0xA, ..) => loadi,
        (0xB, ..) => jumpi,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, .., 0x9, 0xE) => skpr,
        (0xE, .., 0xA, 0x1) => skup,
        (0xF, .., 0x0, 0x7) => moved,
        (0xF, .., 0x0, 0xA) => keyd,
        (0xF, .., 0x1, 0x5) => loads,
        (0xF, .., 0x1, 0x8) => ld,
        (0xF, .., 0x1, 0xE) => addi,
        (0xF, .., 0x2, 0x9) => ldspr,
        (0xF, .., 0x3, 0x3) => bcd,
        (0xF, .., 0x5, 0x5) => stor,
        (0xF, .., 0x6, 0x5) => read,
        _ => return None,
    };
    Some(operation)
}

/// Executes an already fetched opcode.
///
/// The pc is moved past the opcode before the instruction runs, so jumps and calls land on
/// their absolute targets. Unrecognized opcodes are reported and otherwise skipped.
pub fn execute(op: u16, state: &State, io: &mut Io) -> Result<State, Error> {
    let state = State {
        pc: state.pc.wrapping_add(0x2) & ADDRESS_MASK,
        ..*state
    };
    match from_op(&op) {
        Some(operation) => operation(&op, &state, io),
        None => {
            let at = state.pc.wrapping_sub(0x2) & ADDRESS_MASK;
            log::warn!("unrecognized opcode {:04X} at {:03X}", op, at);
            Ok(state)
        }
    }
}
