//! Axis-aligned proximity test between two fish

use super::entity::Entity;

/// True when `a` lies within `b`'s collision box.
///
/// The threshold is `b`'s size alone, so the test is not symmetric:
/// `collides(a, b)` can differ from `collides(b, a)`. Gameplay always passes
/// the player as `a` and a background fish as `b`.
#[inline]
pub fn collides(a: &Entity, b: &Entity) -> bool {
    // Widened so distant extreme positions cannot overflow
    let (pa, pb) = (a.position().as_i64vec2(), b.position().as_i64vec2());
    let reach = i64::from(b.collision_metric());
    let (dx, dy) = ((pa.x - pb.x).abs(), (pa.y - pb.y).abs());
    dx <= reach && dy <= reach
}

/// Background fish the player currently touches, in population order
pub fn colliding_with<'a>(
    player: &'a Entity,
    population: &'a [Entity],
) -> impl Iterator<Item = (usize, &'a Entity)> + 'a {
    population
        .iter()
        .enumerate()
        .filter(move |(_, fish)| collides(player, fish))
}
