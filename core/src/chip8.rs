use std::io::Read;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{CYCLES_PER_FRAME, MEMORY_SIZE, PROGRAM_START};
use crate::display::FrameBuffer;
use crate::error::Error;
use crate::instruction;
use crate::keypad::Keypad;
use crate::opcode;
use crate::operations::Io;
use crate::peripherals::{Screen, Speaker};
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the random source backing `Cxkk`
///  - how many instructions run per frame
///
/// Supplies interfaces for:
/// - loading roms
/// - advancing the CPU and its timers
/// - running a whole frame against a keypad, a screen and a speaker
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    rng: StdRng,
    cycles_per_frame: usize,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            rng: StdRng::from_entropy(),
            cycles_per_frame: CYCLES_PER_FRAME,
        }
    }

    /// Replaces the random source with one that always produces the same bytes
    pub fn with_seed(self, seed: u64) -> Self {
        Chip8 {
            rng: StdRng::seed_from_u64(seed),
            ..self
        }
    }

    /// Sets how many instructions `tick` runs per frame
    pub fn with_cycles_per_frame(self, cycles_per_frame: usize) -> Self {
        Chip8 {
            cycles_per_frame,
            ..self
        }
    }

    /// Copies a program into memory at the program entry point
    ///
    /// # Arguments
    /// * `program` the raw ROM bytes
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Error> {
        let start = PROGRAM_START as usize;
        let max = MEMORY_SIZE - start;
        if program.len() > max {
            return Err(Error::RomTooLarge {
                size: program.len(),
                max,
            });
        }
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        log::info!("loaded {} byte program at {:03X}", program.len(), start);
        Ok(())
    }

    /// Load a rom from a reader
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), Error> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Advances the CPU by a single cycle
    /// - while awaiting a keypress, either captures the most recent key or does nothing
    /// - otherwise fetches and executes the next opcode
    pub fn advance_cpu(&mut self, keypad: &Keypad) -> Result<(), Error> {
        if let Some(register) = self.state.register_needing_key {
            if let Some(key) = keypad.last_pressed() {
                log::debug!("key {:X} captured into V{:X}", key, register);
                self.state.v[register as usize] = key;
                self.state.register_needing_key = None;
            }
            return Ok(());
        }

        let op = self.get_op();
        log::trace!(
            "{:04X} v{:02X?} i{:03X} pc{:03X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        let mut io = Io {
            keypad,
            rng: &mut self.rng,
        };
        self.state = instruction::execute(op, &self.state, &mut io)?;
        Ok(())
    }

    /// Decrements the delay and sound timers, stopping at zero
    pub fn advance_timers(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(1);
    }

    /// Runs a single frame
    /// - executes up to `cycles_per_frame` instructions, stopping early while awaiting a key
    /// - decrements the timers, unless still awaiting a key
    /// - tells the speaker whether to sound and hands the frame buffer to the screen
    pub fn tick(
        &mut self,
        keypad: &Keypad,
        screen: &mut dyn Screen,
        speaker: &mut dyn Speaker,
    ) -> Result<(), Error> {
        for _ in 0..self.cycles_per_frame {
            self.advance_cpu(keypad)?;
            if self.is_awaiting_key() {
                break;
            }
        }
        if !self.is_awaiting_key() {
            self.advance_timers();
        }
        speaker.tone(self.state.sound_timer > 0);
        screen.render(&self.state.frame_buffer);
        Ok(())
    }

    /// Whether an Fx0A instruction is blocked on a keypress
    pub fn is_awaiting_key(&self) -> bool {
        self.state.register_needing_key.is_some()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> u16 {
        opcode::from_bytes(
            self.state.read(self.state.pc),
            self.state.read(self.state.pc.wrapping_add(1)),
        )
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
