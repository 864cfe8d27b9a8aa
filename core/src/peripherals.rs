use crate::display::FrameBuffer;

/// Something that can show a frame; handed the frame buffer once per frame.
pub trait Screen {
    fn render(&mut self, frame: &FrameBuffer);
}

/// Something that can play the Chip-8 tone.
///
/// Told once per frame whether the sound timer is still running.
pub trait Speaker {
    fn tone(&mut self, on: bool);
}

/// A speaker that never makes a sound
#[derive(Default)]
pub struct Mute;

impl Speaker for Mute {
    fn tone(&mut self, _on: bool) {}
}
