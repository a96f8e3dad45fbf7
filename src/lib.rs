//! Fishy - an eat-or-be-eaten fish tank
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, movement, predation, outcome)
//! - `settings`: Run configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Field dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 800;

    /// Largest accepted field width or height
    pub const MAX_FIELD_DIMENSION: i32 = 1_000_000;

    /// Largest size a fish can have, or grow to
    pub const MAX_ENTITY_SIZE: i32 = 100_000;

    /// Vertical respawn range for wrapped and freshly spawned fish (inclusive)
    pub const RESPAWN_Y_MIN: i32 = 1;
    pub const RESPAWN_Y_MAX: i32 = 800;

    /// Distance the player moves per directional command
    pub const PLAYER_STEP: i32 = 5;

    /// Size range for freshly spawned fish (max exclusive)
    pub const SPAWN_SIZE_MIN: i32 = 5;
    pub const SPAWN_SIZE_MAX: i32 = 55;

    /// Horizontal speed per tick, by size tier (smaller fish swim faster)
    pub const SPEED_FASTEST: i32 = 15;
    pub const SPEED_FAST: i32 = 8;
    pub const SPEED_MEDIUM: i32 = 5;
    pub const SPEED_SLOW: i32 = 3;

    /// "Incognito" player color
    pub const STEALTH_COLOR: (u8, u8, u8) = (255, 255, 255);

    /// Presentation cadence in seconds (one tick every 0.2 s)
    pub const TICK_INTERVAL_SECS: f32 = 0.2;
    /// Longest accepted tick interval in seconds
    pub const MAX_TICK_INTERVAL_SECS: f32 = 3600.0;

    /// Size of the population `World::random` spawns
    pub const DEFAULT_POPULATION: usize = 9;
}
