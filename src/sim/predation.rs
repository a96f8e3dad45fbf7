//! Predation: the player eats the smaller fish it touches
//!
//! Predation only ever grows the player. Touching a fish that is at least as
//! heavy leaves everything unchanged here; the termination check ends the run.

use rand::Rng;

use super::collision::colliding_with;
use super::entity::Entity;
use super::state::Field;

/// Size gained from eating a fish of the given size
pub fn growth_for(eaten_size: i32) -> i32 {
    if eaten_size < 10 {
        2
    } else if eaten_size < 20 {
        3
    } else if eaten_size < 30 {
        5
    } else {
        7
    }
}

/// Result of resolving one tick's collisions
#[derive(Debug, Clone, PartialEq)]
pub struct Feeding {
    pub player: Entity,
    pub population: Vec<Entity>,
    /// Number of fish eaten (and respawned)
    pub eaten: usize,
    /// Size the player gained
    pub growth: i32,
}

/// Resolve collisions between the player and the population.
///
/// When every touched fish is strictly lighter than the player, the player
/// grows by the tier of the first touched fish (in population order) and each
/// touched fish is replaced in place by a fresh spawn. Otherwise nothing
/// changes.
pub fn resolve<R: Rng + ?Sized>(
    player: &Entity,
    population: &[Entity],
    field: &Field,
    rng: &mut R,
) -> Feeding {
    let footprint = player.footprint();
    let prey: Vec<usize> = colliding_with(player, population).map(|(i, _)| i).collect();

    let unchanged = || Feeding {
        player: *player,
        population: population.to_vec(),
        eaten: 0,
        growth: 0,
    };

    let Some(&first) = prey.first() else {
        return unchanged();
    };
    if prey.iter().any(|&i| population[i].footprint() >= footprint) {
        return unchanged();
    }

    let growth = growth_for(population[first].size());
    let mut next = population.to_vec();
    for &i in &prey {
        next[i] = Entity::spawn(field, rng);
    }

    log::debug!(
        "player ate {} fish, size {} -> {}",
        prey.len(),
        player.size(),
        player.size() + growth
    );

    Feeding {
        player: player.grown_by(growth),
        population: next,
        eaten: prey.len(),
        growth,
    }
}
