//! Fish entities
//!
//! A fish is an immutable value: moving, growing, recoloring or respawning
//! always produces a new `Entity`. Construction validates size and color so
//! the rest of the simulation can assume well-formed values.

use glam::IVec2;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use super::state::Field;
use crate::consts::*;

/// Errors raised when constructing an entity from raw values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("entity size must be positive, got {0}")]
    NonPositiveSize(i32),
    #[error("entity size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: i32, max: i32 },
    #[error("color component {channel} out of range 0..=255: {value}")]
    ColorOutOfRange { channel: char, value: i32 },
}

/// RGB display color (inert to gameplay)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const STEALTH: Color = Color::rgb(STEALTH_COLOR.0, STEALTH_COLOR.1, STEALTH_COLOR.2);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unchecked integer components
    pub fn from_components(r: i32, g: i32, b: i32) -> Result<Self, EntityError> {
        let channel = |channel: char, value: i32| {
            u8::try_from(value).map_err(|_| EntityError::ColorOutOfRange { channel, value })
        };
        Ok(Self::rgb(channel('r', r)?, channel('g', g)?, channel('b', b)?))
    }

    /// Uniform random color, each channel in [0, 255)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        )
    }
}

/// Horizontal swimming direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

/// A fish: the player or a background fish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entity {
    position: IVec2,
    size: i32,
    color: Color,
    facing: Facing,
}

impl Entity {
    /// Create a validated entity. Size must be in `1..=MAX_ENTITY_SIZE`.
    pub fn new(position: IVec2, size: i32, color: Color, facing: Facing) -> Result<Self, EntityError> {
        if size <= 0 {
            return Err(EntityError::NonPositiveSize(size));
        }
        if size > MAX_ENTITY_SIZE {
            return Err(EntityError::SizeTooLarge {
                size,
                max: MAX_ENTITY_SIZE,
            });
        }
        Ok(Self {
            position,
            size,
            color,
            facing,
        })
    }

    /// Spawn a fresh background fish at the right edge of the field
    ///
    /// Vertical position, size, color and facing are all randomized.
    pub fn spawn<R: Rng + ?Sized>(field: &Field, rng: &mut R) -> Self {
        let y = field.random_row(rng);
        Self {
            position: IVec2::new(field.width, y),
            size: rng.random_range(SPAWN_SIZE_MIN..SPAWN_SIZE_MAX),
            color: Color::random(rng),
            facing: Facing::random(rng),
        }
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Proximity threshold used when this fish is the one being tested against
    #[inline]
    pub fn collision_metric(&self) -> i32 {
        self.size
    }

    /// Area-like mass used to rank fish against each other
    #[inline]
    pub fn footprint(&self) -> i64 {
        let size = i64::from(self.size);
        size * size
    }

    pub fn with_position(self, position: IVec2) -> Self {
        Self { position, ..self }
    }

    /// Grow by `delta`, capped at `MAX_ENTITY_SIZE`
    pub fn grown_by(self, delta: i32) -> Self {
        Self {
            size: self.size.saturating_add(delta).min(MAX_ENTITY_SIZE),
            ..self
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub fn with_facing(self, facing: Facing) -> Self {
        Self { facing, ..self }
    }
}
