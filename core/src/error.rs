use thiserror::Error;

/// Failures that stop the Chip-8 from making progress
#[derive(Debug, Error)]
pub enum Error {
    #[error("stack overflow: CALL at {pc:#05X} exceeds {depth} nested subroutines")]
    StackOverflow { pc: u16, depth: usize },

    #[error("stack underflow: RET at {pc:#05X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("unable to read ROM: {0}")]
    Io(#[from] std::io::Error),
}
