use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use chip8_core::constants::{CYCLES_PER_FRAME, FRAME_RATE};

mod keymap;
mod run;
mod speaker;

/// Runs a Chip-8 ROM in a window
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// Size of each Chip-8 pixel on screen
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: u32,

    /// Instructions executed per frame
    #[arg(long, default_value_t = CYCLES_PER_FRAME)]
    speed: usize,

    /// Frames (and timer ticks) per second
    #[arg(
        long,
        default_value_t = FRAME_RATE,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    fps: u32,

    /// Seed for the random number instruction; random if absent
    #[arg(long)]
    seed: Option<u64>,

    /// Don't play the tone
    #[arg(long)]
    mute: bool,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
    log::info!("env logger initialized");

    if let Err(e) = run::run(&args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chip8", "game.ch8"]).unwrap();
        assert_eq!(args.rom, PathBuf::from("game.ch8"));
        assert_eq!(args.scale, 10);
        assert_eq!(args.speed, 15);
        assert_eq!(args.fps, 60);
        assert_eq!(args.seed, None);
        assert!(!args.mute);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "chip8", "--speed", "30", "--seed", "7", "--mute", "--scale", "4", "pong.ch8",
        ])
        .unwrap();
        assert_eq!(args.speed, 30);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.scale, 4);
        assert!(args.mute);
    }

    #[test]
    fn test_rejects_zero_fps() {
        assert!(Args::try_parse_from(["chip8", "--fps", "0", "game.ch8"]).is_err());
    }

    #[test]
    fn test_requires_rom() {
        assert!(Args::try_parse_from(["chip8"]).is_err());
    }
}
