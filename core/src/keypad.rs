use crate::constants::KEY_COUNT;

/// # Keypad
/// Chip-8 input is generated with a 16 key hexadecimal keypad.
///
/// Tracks which keys are held and which key was pressed most recently. It's owned by
/// whatever drives the emulator, updated from device events, and lent to the CPU each
/// frame so instructions can poll it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    held: [bool; KEY_COUNT],
    last_pressed: Option<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held and as the most recent key press
    ///
    /// # Arguments
    /// * `key` the keypad value 0x0..=0xF; anything else is ignored
    pub fn press(&mut self, key: u8) {
        if let Some(held) = self.held.get_mut(key as usize) {
            *held = true;
            self.last_pressed = Some(key);
        }
    }

    /// Marks `key` as released
    ///
    /// If `key` was the most recent press, the lowest key still held takes its place.
    pub fn release(&mut self, key: u8) {
        if let Some(held) = self.held.get_mut(key as usize) {
            *held = false;
            if self.last_pressed == Some(key) {
                self.last_pressed = self.held.iter().position(|&down| down).map(|k| k as u8);
            }
        }
    }

    /// Whether `key` is currently held down
    pub fn is_pressed(&self, key: u8) -> bool {
        self.held.get(key as usize).copied().unwrap_or(false)
    }

    /// The most recently pressed key that's still held, falling back to any held key.
    /// `None` only when no key is held.
    pub fn last_pressed(&self) -> Option<u8> {
        self.last_pressed
    }

    /// Releases every key
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
