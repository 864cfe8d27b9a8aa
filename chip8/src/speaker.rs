use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chip8_core::Speaker;

const SAMPLE_RATE: i32 = 44_100;
const PITCH: f32 = 440.0;
const VOLUME: f32 = 0.2;

/// A square wave generator fed to the SDL2 audio callback
pub struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase < 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// # Tone
/// Plays a constant beep while the Chip-8 sound timer is running.
pub struct Tone {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl Tone {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| SquareWave {
            phase_inc: PITCH / spec.freq as f32,
            phase: 0.0,
            volume: VOLUME,
        })?;
        Ok(Tone {
            device,
            playing: false,
        })
    }
}

impl Speaker for Tone {
    fn tone(&mut self, on: bool) {
        match (on, self.playing) {
            (true, false) => self.device.resume(),
            (false, true) => self.device.pause(),
            _ => return,
        }
        self.playing = on;
    }
}
