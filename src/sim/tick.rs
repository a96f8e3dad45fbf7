//! Simulation step
//!
//! Advances a world deterministically. Each call reads one world value and
//! returns the next; terminal worlds are returned unchanged.

use super::movement::{Command, step_background, step_player};
use super::predation;
use super::state::World;
use super::termination::{Outcome, evaluate};

/// Advance the world by one tick.
///
/// The outcome is evaluated on the incoming world before anything moves. A
/// terminal verdict freezes the world as-is; otherwise every background fish
/// moves and the player feeds on whatever it now touches.
pub fn tick(world: &World) -> World {
    if world.is_over() {
        return world.clone();
    }

    let outcome = evaluate(&world.player, &world.population);
    if outcome.is_terminal() {
        log::info!(
            "Run ended at tick {}: {:?} (player size {})",
            world.time_ticks,
            outcome,
            world.player.size()
        );
        return World {
            outcome,
            ..world.clone()
        };
    }

    let mut rng = world.rng.clone();
    let moved: Vec<_> = world
        .population
        .iter()
        .map(|fish| step_background(fish, &world.field, &mut rng))
        .collect();
    let feeding = predation::resolve(&world.player, &moved, &world.field, &mut rng);

    World {
        seed: world.seed,
        field: world.field,
        player: feeding.player,
        population: feeding.population,
        outcome: Outcome::Playing,
        time_ticks: world.time_ticks + 1,
        rng,
    }
}

/// Apply a single player command.
///
/// Only the player changes; predation and the outcome check wait for the next
/// tick. `Quit` ends the run immediately.
pub fn apply_command(world: &World, command: Command) -> World {
    if world.is_over() {
        return world.clone();
    }

    match command {
        Command::NoOp => world.clone(),
        Command::Quit => {
            log::info!("Player quit at tick {}", world.time_ticks);
            World {
                outcome: Outcome::Quit,
                ..world.clone()
            }
        }
        _ => {
            let mut rng = world.rng.clone();
            let player = step_player(&world.player, command, &world.field, &mut rng);
            World {
                player,
                rng,
                ..world.clone()
            }
        }
    }
}
