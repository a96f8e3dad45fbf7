//! Win/loss evaluation

use serde::Serialize;

use super::collision::colliding_with;
use super::entity::Entity;

/// Current outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    /// Active gameplay
    #[default]
    Playing,
    /// Every background fish outweighs the player
    Won,
    /// Touched a fish at least as heavy as the player
    Lost,
    /// The player asked to leave
    Quit,
}

impl Outcome {
    /// Terminal outcomes freeze the world
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    /// End-of-run banner text
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Won => Some("YOU WON!"),
            Outcome::Lost => Some("YOU LOST!"),
            Outcome::Quit => Some("Goodbye"),
        }
    }
}

/// Decide whether the run continues.
///
/// Loss is checked first: touching any fish whose footprint is at least the
/// player's ends the run. Otherwise the run is won when every background fish
/// outweighs the player (an empty population counts).
pub fn evaluate(player: &Entity, population: &[Entity]) -> Outcome {
    let footprint = player.footprint();
    let outweighs = |fish: &Entity| fish.footprint() > footprint;

    if colliding_with(player, population).any(|(_, fish)| fish.footprint() >= footprint) {
        Outcome::Lost
    } else if population.iter().all(outweighs) {
        Outcome::Won
    } else {
        Outcome::Playing
    }
}
