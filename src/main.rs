//! Fishy entry point
//!
//! Headless driver: builds a world, feeds it a scripted key sequence and
//! ticks it until the run ends or the tick limit is reached.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fishy::Settings;
use fishy::sim::{Command, World, apply_command, tick};

#[derive(Debug, Parser)]
#[command(name = "fishy", about = "Eat smaller fish, avoid bigger ones")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the run seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the tick limit
    #[arg(long)]
    ticks: Option<u64>,
    /// Comma-separated key names fed one per tick, cycled (e.g. "right,up,T")
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,
    /// Start from a random population instead of the classic tank
    #[arg(long)]
    random: bool,
    /// Sleep the configured tick interval between ticks
    #[arg(long)]
    realtime: bool,
    /// Print the final world as JSON
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Fishy (headless) starting...");

    let mut settings = match &args.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        settings.max_ticks = ticks;
    }

    let mut world = if args.random {
        match World::random(&settings) {
            Ok(world) => world,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        World::classic(settings.seed)
    };

    let commands: Vec<Command> = args.keys.iter().map(|k| Command::from_key(k)).collect();
    let interval = if args.realtime {
        match settings.tick_interval() {
            Ok(interval) => Some(interval),
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    while !world.is_over() {
        if settings.tick_limit().is_some_and(|limit| world.time_ticks() >= limit) {
            log::warn!("Tick limit reached with the run still in progress");
            break;
        }
        if !commands.is_empty() {
            let command = commands[world.time_ticks() as usize % commands.len()];
            world = apply_command(&world, command);
        }
        world = tick(&world);
        if let Some(interval) = interval {
            std::thread::sleep(interval);
        }
    }

    println!(
        "{} after {} ticks (player size {})",
        world.outcome().message().unwrap_or("Still swimming"),
        world.time_ticks(),
        world.player().size()
    );

    if args.dump {
        match serde_json::to_string_pretty(&world) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize world: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
