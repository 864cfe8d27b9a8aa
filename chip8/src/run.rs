use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Error};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use chip8_core::{Chip8, Keypad, Mute, Speaker};
use chip8_display::Display;

use crate::keymap::keymap;
use crate::speaker::Tone;
use crate::Args;

const TITLE: &str = "Emu-8";

pub fn run(args: &Args) -> Result<(), Error> {
    let mut chip8 = Chip8::new().with_cycles_per_frame(args.speed);
    if let Some(seed) = args.seed {
        chip8 = chip8.with_seed(seed);
    }

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open ROM {}", args.rom.display()))?;
    chip8.load_rom(&mut BufReader::new(file))?;

    // Get SDL2 context
    let sdl = sdl2::init().map_err(Error::msg)?;
    let mut display = Display::new(&sdl, TITLE, args.scale).map_err(Error::msg)?;
    let mut speaker: Box<dyn Speaker> = if args.mute {
        Box::new(Mute)
    } else {
        Box::new(Tone::new(&sdl).map_err(Error::msg)?)
    };
    let mut events = sdl.event_pump().map_err(Error::msg)?;
    let mut keypad = Keypad::new();

    // Set initial timing
    let frame_time: Duration = Duration::from_secs(1) / args.fps;
    let mut last_frame: Instant = Instant::now();

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        keypad.press(kc)
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        keypad.release(kc)
                    }
                }
                // Key ups are lost while unfocused
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => keypad.clear(),
                _ => continue,
            };
        }

        // Run a frame, then draw and sound it
        chip8.tick(&keypad, &mut display, speaker.as_mut())?;

        // Handle timing
        let elapsed_frame_time = last_frame.elapsed();
        if frame_time > elapsed_frame_time {
            std::thread::sleep(frame_time - elapsed_frame_time);
        }
        last_frame = Instant::now();
    }

    speaker.tone(false);
    log::info!("shutting down");
    Ok(())
}
