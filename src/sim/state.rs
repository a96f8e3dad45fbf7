//! World state and field geometry
//!
//! The `World` is the authoritative game state. It is treated as a value:
//! `tick` and `apply_command` read one world and return the next.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::{Color, Entity, Facing};
use super::termination::Outcome;
use crate::consts::*;
use crate::settings::Settings;

/// Errors raised when building a world from invalid parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("field dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("field {width}x{height} exceeds the maximum dimension of {max}")]
    FieldTooLarge { width: i32, height: i32, max: i32 },
    #[error("respawn range {min}..={max} is empty")]
    EmptyRespawnRange { min: i32, max: i32 },
}

/// Bounded playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub width: i32,
    pub height: i32,
    /// Lowest row a respawned fish can appear on (inclusive)
    pub respawn_y_min: i32,
    /// Highest row a respawned fish can appear on (inclusive)
    pub respawn_y_max: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            respawn_y_min: RESPAWN_Y_MIN,
            respawn_y_max: RESPAWN_Y_MAX,
        }
    }
}

impl Field {
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(WorldError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_FIELD_DIMENSION || self.height > MAX_FIELD_DIMENSION {
            return Err(WorldError::FieldTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_FIELD_DIMENSION,
            });
        }
        if self.respawn_y_min > self.respawn_y_max {
            return Err(WorldError::EmptyRespawnRange {
                min: self.respawn_y_min,
                max: self.respawn_y_max,
            });
        }
        Ok(())
    }

    /// Uniform random row inside the respawn range
    pub fn random_row<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.random_range(self.respawn_y_min..=self.respawn_y_max)
    }

    /// Center of the field
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }
}

/// Complete game state (deterministic for a given seed and command stream)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct World {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) field: Field,
    pub(crate) player: Entity,
    /// Background fish in insertion order
    pub(crate) population: Vec<Entity>,
    pub(crate) outcome: Outcome,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    /// Seeded random stream for wraps and spawns
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl World {
    /// Create a world from an explicit player and population
    pub fn new(
        player: Entity,
        population: Vec<Entity>,
        field: Field,
        seed: u64,
    ) -> Result<Self, WorldError> {
        field.validate()?;
        Ok(Self {
            seed,
            field,
            player,
            population,
            outcome: Outcome::Playing,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Player in the middle of the field surrounded by freshly spawned fish
    pub fn random(settings: &Settings) -> Result<Self, WorldError> {
        settings.field.validate()?;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let player = starting_player(settings.field.center());
        let population = (0..settings.population)
            .map(|_| Entity::spawn(&settings.field, &mut rng))
            .collect();

        Ok(Self {
            seed: settings.seed,
            field: settings.field,
            player,
            population,
            outcome: Outcome::Playing,
            time_ticks: 0,
            rng,
        })
    }

    /// The classic tank: four random fish (one of them listed twice) and four
    /// hand-placed small fish around a size-18 player.
    pub fn classic(seed: u64) -> Self {
        let field = Field::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut spawn = || Entity::spawn(&field, &mut rng);
        let (a, b, c, d) = (spawn(), spawn(), spawn(), spawn());

        let placed = |x, y, size, color| placed_fish(IVec2::new(x, y), size, color);
        let population = vec![
            b,
            a,
            c,
            d,
            c,
            placed(500, 300, 10, Color::RED),
            placed(200, 300, 15, Color::rgb(255, 0, 255)),
            placed(100, 700, 18, Color::rgb(0, 255, 0)),
            placed(700, 100, 20, Color::rgb(0, 255, 255)),
        ];

        Self {
            seed,
            field,
            player: starting_player(IVec2::new(400, 400)),
            population,
            outcome: Outcome::Playing,
            time_ticks: 0,
            rng,
        }
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// Background fish in stable insertion order
    #[inline]
    pub fn population(&self) -> &[Entity] {
        &self.population
    }

    /// Every fish for drawing: the player first, then the population
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player).chain(self.population.iter())
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

fn starting_player(position: IVec2) -> Entity {
    placed_fish(position, 18, Color::RED)
}

fn placed_fish(position: IVec2, size: i32, color: Color) -> Entity {
    Entity::new(position, size, color, Facing::Right).expect("placed fish sizes are positive")
}
