//! Grid Snake headless host
//!
//! Drives the simulation the way a windowed host would: one tick, then wait
//! for the reported delay. Steering comes from per-player scripts instead of
//! a keyboard.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use grid_snake::sim::{Direction, GameEvent, GameState, TickInput, tick};
use grid_snake::{Settings, SimError};

#[derive(Debug, Parser)]
#[command(name = "grid-snake", about = "Run a headless grid snake round")]
struct Args {
    /// RNG seed for layout and placement
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Steering script, one per player: one char per tick, U/R/D/L to turn,
    /// anything else to keep going
    #[arg(long = "script")]
    scripts: Vec<String>,

    /// Stop after this many ticks even if nobody crashed
    #[arg(long, default_value_t = 500)]
    max_ticks: u64,

    /// Sleep the reported delay between ticks
    #[arg(long)]
    realtime: bool,

    /// Print the final frame as JSON
    #[arg(long)]
    dump_frame: bool,
}

fn parse_turn(c: char) -> Option<Direction> {
    match c.to_ascii_uppercase() {
        'U' => Some(Direction::Up),
        'R' => Some(Direction::Right),
        'D' => Some(Direction::Down),
        'L' => Some(Direction::Left),
        _ => None,
    }
}

/// Input for tick `n` from the per-player scripts
fn scripted_input(scripts: &[Vec<char>], n: usize) -> TickInput {
    let mut input = TickInput::default();
    for (slot, script) in input.turns.iter_mut().zip(scripts) {
        *slot = script.get(n).copied().and_then(parse_turn);
    }
    input
}

fn run(args: &Args) -> Result<(), SimError> {
    let settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut state = GameState::new(settings, args.seed)?;
    let scripts: Vec<Vec<char>> = args.scripts.iter().map(|s| s.chars().collect()).collect();

    let mut eaten = vec![0u32; state.snakes.len()];
    for n in 0..args.max_ticks {
        let input = scripted_input(&scripts, n as usize);
        let report = tick(&mut state, &input)?;

        for event in &report.events {
            match *event {
                GameEvent::PelletEaten { player, length } => {
                    eaten[player] += 1;
                    log::info!("Tick {}: player {} ate, length {}", n + 1, player, length);
                }
                GameEvent::Crashed { player, cause } => {
                    log::info!("Tick {}: player {} crashed into {:?}", n + 1, player, cause);
                }
            }
        }
        if report.terminated {
            break;
        }
        if args.realtime {
            std::thread::sleep(Duration::from_millis(report.delay_ms as u64));
        }
    }

    println!(
        "round {} ({:?} layout): {} ticks, pellets {:?}, delay {}ms, {}",
        state.round,
        state.layout,
        state.time_ticks,
        eaten,
        state.delay_ms(),
        if state.is_terminated() { "game over" } else { "still running" }
    );
    if args.dump_frame {
        println!("{}", state.frame().to_json()?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("Grid Snake (headless) starting, seed {}", args.seed);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
