//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame, velocities in px/frame
//! - Seeded RNG only
//! - Stable iteration order (ball, paddle, particles; bricks column-major)
//! - No rendering or platform dependencies

pub mod bricks;
pub mod collision;
pub mod entity;
pub mod particles;
pub mod state;
pub mod tick;

pub use bricks::{Brick, BrickGrid};
pub use collision::{Aabb, overlaps};
pub use entity::{Entity, Shape};
pub use particles::Particle;
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
