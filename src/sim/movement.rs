//! Movement policy
//!
//! Background fish swim horizontally at a speed set by their size tier and
//! wrap to the opposite edge (on a fresh random row) when they leave the
//! field. The player moves one fixed step per directional command, with
//! boundary correction taking priority over the command.

use glam::IVec2;
use rand::Rng;

use super::entity::{Color, Entity, Facing};
use super::state::Field;
use crate::consts::*;

/// Discrete player command, as delivered by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    Right,
    Left,
    Up,
    Down,
    /// Pick a new random color
    RandomizeColor,
    /// Turn white ("incognito")
    Stealth,
    /// End the run immediately
    Quit,
    #[default]
    NoOp,
}

impl Command {
    /// Map a raw key name to a command. Unknown keys are a no-op.
    pub fn from_key(key: &str) -> Self {
        match key {
            "right" => Command::Right,
            "left" => Command::Left,
            "up" => Command::Up,
            "down" => Command::Down,
            "R" => Command::RandomizeColor,
            "T" => Command::Stealth,
            "x" => Command::Quit,
            _ => Command::NoOp,
        }
    }
}

/// Horizontal speed for a fish of the given size (bigger is slower)
pub fn speed_for_size(size: i32) -> i32 {
    if size < 20 {
        SPEED_FASTEST
    } else if size < 35 {
        SPEED_FAST
    } else if size < 50 {
        SPEED_MEDIUM
    } else {
        SPEED_SLOW
    }
}

/// Where a fish that left the field re-enters, if it left at all.
///
/// The row is kept; callers decide whether to re-roll it.
fn wrapped_x(entity: &Entity, field: &Field) -> Option<i32> {
    let x = entity.position().x;
    let size = entity.size();
    if x >= field.width + size {
        Some(1 + size)
    } else if x <= -size {
        Some(field.width - 1 - size)
    } else {
        None
    }
}

/// Advance a background fish by one tick
pub fn step_background<R: Rng + ?Sized>(entity: &Entity, field: &Field, rng: &mut R) -> Entity {
    let pos = entity.position();
    match wrapped_x(entity, field) {
        Some(x) => {
            let y = field.random_row(rng);
            log::debug!("fish size {} wrapped from x={} to ({}, {})", entity.size(), pos.x, x, y);
            entity.with_position(IVec2::new(x, y))
        }
        None => {
            let dx = speed_for_size(entity.size()) * entity.facing().sign();
            entity.with_position(pos.saturating_add(IVec2::new(dx, 0)))
        }
    }
}

/// Boundary correction for the player, applied before any directional step
fn correct_player(player: &Entity, field: &Field) -> Option<Entity> {
    let pos = player.position();
    let size = player.size();

    if let Some(x) = wrapped_x(player, field) {
        Some(player.with_position(IVec2::new(x, pos.y)))
    } else if pos.y == field.height - size {
        Some(player.with_position(pos - IVec2::new(0, PLAYER_STEP)))
    } else if pos.y == size {
        Some(player.with_position(pos + IVec2::new(0, PLAYER_STEP)))
    } else {
        None
    }
}

/// Apply one command to the player.
///
/// Directional commands first check the field boundary: a player that has
/// wrapped or touched the top/bottom edge is only corrected this step.
/// Color commands never move the player. `Quit` is handled by the world and
/// leaves the player unchanged here.
pub fn step_player<R: Rng + ?Sized>(
    player: &Entity,
    command: Command,
    field: &Field,
    rng: &mut R,
) -> Entity {
    let (delta, facing) = match command {
        Command::Right => (IVec2::new(PLAYER_STEP, 0), Facing::Right),
        Command::Left => (IVec2::new(-PLAYER_STEP, 0), Facing::Left),
        Command::Up => (IVec2::new(0, -PLAYER_STEP), player.facing()),
        Command::Down => (IVec2::new(0, PLAYER_STEP), player.facing()),
        Command::RandomizeColor => return player.with_color(Color::random(rng)),
        Command::Stealth => return player.with_color(Color::STEALTH),
        Command::Quit | Command::NoOp => return *player,
    };

    if let Some(corrected) = correct_player(player, field) {
        return corrected;
    }
    player
        .with_position(player.position().saturating_add(delta))
        .with_facing(facing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fish(x: i32, y: i32, size: i32, facing: Facing) -> Entity {
        Entity::new(IVec2::new(x, y), size, Color::RED, facing).unwrap()
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_speed_tier_boundaries() {
        assert_eq!(speed_for_size(1), 15);
        assert_eq!(speed_for_size(19), 15);
        assert_eq!(speed_for_size(20), 8);
        assert_eq!(speed_for_size(34), 8);
        assert_eq!(speed_for_size(35), 5);
        assert_eq!(speed_for_size(49), 5);
        assert_eq!(speed_for_size(50), 3);
        assert_eq!(speed_for_size(500), 3);
    }

    #[test]
    fn test_background_moves_by_tier() {
        let field = Field::default();
        let mut rng = rng();
        for (size, dx) in [(19, 15), (20, 8), (34, 8), (35, 5), (49, 5), (50, 3)] {
            let right = step_background(&fish(300, 200, size, Facing::Right), &field, &mut rng);
            assert_eq!(right.position(), IVec2::new(300 + dx, 200), "size {size}");
            let left = step_background(&fish(300, 200, size, Facing::Left), &field, &mut rng);
            assert_eq!(left.position(), IVec2::new(300 - dx, 200), "size {size}");
        }
    }

    #[test]
    fn test_right_edge_wraps_to_left() {
        let field = Field::default();
        let original = fish(820, 300, 20, Facing::Right);
        let wrapped = step_background(&original, &field, &mut rng());
        assert_eq!(wrapped.position().x, 21);
        assert!((field.respawn_y_min..=field.respawn_y_max).contains(&wrapped.position().y));
        assert_eq!(wrapped.size(), 20);
        assert_eq!(wrapped.color(), original.color());
        assert_eq!(wrapped.facing(), Facing::Right);
    }

    #[test]
    fn test_just_inside_right_edge_keeps_swimming() {
        let field = Field::default();
        let moved = step_background(&fish(819, 300, 20, Facing::Right), &field, &mut rng());
        assert_eq!(moved.position(), IVec2::new(827, 300));
    }

    #[test]
    fn test_left_edge_wraps_to_right() {
        let field = Field::default();
        let wrapped = step_background(&fish(-10, 300, 10, Facing::Left), &field, &mut rng());
        assert_eq!(wrapped.position().x, 789);
        assert!((field.respawn_y_min..=field.respawn_y_max).contains(&wrapped.position().y));
        assert_eq!(wrapped.facing(), Facing::Left);
    }

    #[test]
    fn test_wrap_row_is_seeded() {
        let field = Field::default();
        let fish = fish(900, 300, 30, Facing::Right);
        let a = step_background(&fish, &field, &mut rng());
        let b = step_background(&fish, &field, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_narrow_respawn_range() {
        let field = Field {
            respawn_y_min: 42,
            respawn_y_max: 42,
            ..Field::default()
        };
        let wrapped = step_background(&fish(900, 300, 30, Facing::Right), &field, &mut rng());
        assert_eq!(wrapped.position().y, 42);
    }

    #[test]
    fn test_large_field_and_fish_wrap_without_overflow() {
        let field = Field {
            width: MAX_FIELD_DIMENSION,
            height: MAX_FIELD_DIMENSION,
            ..Field::default()
        };
        let whale = fish(MAX_FIELD_DIMENSION + MAX_ENTITY_SIZE, 300, MAX_ENTITY_SIZE, Facing::Right);
        let wrapped = step_background(&whale, &field, &mut rng());
        assert_eq!(wrapped.position().x, 1 + MAX_ENTITY_SIZE);

        let lost = fish(i32::MIN, 300, 10, Facing::Left);
        let wrapped = step_background(&lost, &field, &mut rng());
        assert_eq!(wrapped.position().x, MAX_FIELD_DIMENSION - 11);
    }

    #[test]
    fn test_player_step_saturates_at_extremes() {
        let field = Field::default();
        let player = fish(400, i32::MAX, 20, Facing::Right);
        let moved = step_player(&player, Command::Down, &field, &mut rng());
        assert_eq!(moved.position(), IVec2::new(400, i32::MAX));
    }

    #[test]
    fn test_player_directions() {
        let field = Field::default();
        let mut rng = rng();
        let player = fish(150, 100, 20, Facing::Right);

        let right = step_player(&player, Command::Right, &field, &mut rng);
        assert_eq!(right.position(), IVec2::new(155, 100));
        assert_eq!(right.facing(), Facing::Right);

        let left = step_player(&player, Command::Left, &field, &mut rng);
        assert_eq!(left.position(), IVec2::new(145, 100));
        assert_eq!(left.facing(), Facing::Left);

        let up = step_player(&left, Command::Up, &field, &mut rng);
        assert_eq!(up.position(), IVec2::new(145, 95));
        assert_eq!(up.facing(), Facing::Left);

        let down = step_player(&player, Command::Down, &field, &mut rng);
        assert_eq!(down.position(), IVec2::new(150, 105));
    }

    #[test]
    fn test_player_wrap_takes_priority_over_direction() {
        let field = Field::default();
        let mut rng = rng();
        let player = fish(820, 100, 20, Facing::Right);

        let wrapped = step_player(&player, Command::Right, &field, &mut rng);
        // Same row, direction deferred to the next command
        assert_eq!(wrapped.position(), IVec2::new(21, 100));

        let moved = step_player(&wrapped, Command::Right, &field, &mut rng);
        assert_eq!(moved.position(), IVec2::new(26, 100));
    }

    #[test]
    fn test_player_left_wrap_keeps_row() {
        let field = Field::default();
        let player = fish(-20, 333, 20, Facing::Left);
        let wrapped = step_player(&player, Command::Up, &field, &mut rng());
        assert_eq!(wrapped.position(), IVec2::new(779, 333));
    }

    #[test]
    fn test_player_nudged_off_top_and_bottom() {
        let field = Field::default();
        let mut rng = rng();

        let at_bottom = fish(300, 780, 20, Facing::Right);
        let nudged = step_player(&at_bottom, Command::Down, &field, &mut rng);
        assert_eq!(nudged.position(), IVec2::new(300, 775));

        let at_top = fish(300, 20, 20, Facing::Right);
        let nudged = step_player(&at_top, Command::Up, &field, &mut rng);
        assert_eq!(nudged.position(), IVec2::new(300, 25));
    }

    #[test]
    fn test_color_commands_do_not_move() {
        let field = Field::default();
        let mut rng = rng();
        // Sitting on the bottom edge: color changes must not trigger the nudge
        let player = fish(300, 780, 20, Facing::Right);

        let stealth = step_player(&player, Command::Stealth, &field, &mut rng);
        assert_eq!(stealth.position(), player.position());
        assert_eq!(stealth.color(), Color::STEALTH);

        let recolored = step_player(&player, Command::RandomizeColor, &field, &mut rng);
        assert_eq!(recolored.position(), player.position());
        assert_eq!(recolored.size(), player.size());
    }

    #[test]
    fn test_noop_and_quit_leave_player_alone() {
        let field = Field::default();
        let player = fish(820, 780, 20, Facing::Right);
        assert_eq!(step_player(&player, Command::NoOp, &field, &mut rng()), player);
        assert_eq!(step_player(&player, Command::Quit, &field, &mut rng()), player);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key("right"), Command::Right);
        assert_eq!(Command::from_key("left"), Command::Left);
        assert_eq!(Command::from_key("up"), Command::Up);
        assert_eq!(Command::from_key("down"), Command::Down);
        assert_eq!(Command::from_key("R"), Command::RandomizeColor);
        assert_eq!(Command::from_key("T"), Command::Stealth);
        assert_eq!(Command::from_key("x"), Command::Quit);
        assert_eq!(Command::from_key("r"), Command::NoOp);
        assert_eq!(Command::from_key("space"), Command::NoOp);
        assert_eq!(Command::from_key(""), Command::NoOp);
    }
}
