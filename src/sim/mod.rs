//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, passed explicitly to anything that spawns or wraps
//! - Stable iteration order (population insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod movement;
pub mod predation;
pub mod state;
pub mod termination;
pub mod tick;

pub use collision::{collides, colliding_with};
pub use entity::{Color, Entity, EntityError, Facing};
pub use movement::{Command, speed_for_size, step_background, step_player};
pub use predation::{Feeding, growth_for, resolve};
pub use state::{Field, World, WorldError};
pub use termination::{Outcome, evaluate};
pub use tick::{apply_command, tick};
