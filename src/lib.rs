//! Breakout - a brick breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, bricks, game state)
//! - `renderer`: Scene extraction and the renderers that consume it
//! - `platform`: Host-side input tracking and end-of-session notification
//! - `driver`: Per-frame orchestration (tick, render, reschedule)
//! - `settings`: Tunable game configuration

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{Driver, Schedule};
pub use error::{Error, Result};
pub use settings::{Playfield, Settings, Variant};

/// Game configuration constants
pub mod consts {
    /// Nominal frame period of the host's display refresh (ms)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Default playfield (canvas) dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Base ball speed per axis (px/frame)
    pub const BALL_SPEED: f32 = 3.0;
    /// Serve height above the floor
    pub const SERVE_HEIGHT: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Distance from the floor to the paddle's top edge
    pub const PADDLE_FLOOR_GAP: f32 = 15.0;
    /// Paddle bounces are suppressed for this long after one lands (ms)
    pub const PADDLE_COOLDOWN_MS: f64 = 100.0;

    /// Brick layout (fixed, not configurable)
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 5;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Particle burst per destroyed brick
    pub const PARTICLES_PER_BRICK: usize = 50;
    pub const PARTICLE_RADIUS: f32 = 2.0;
    pub const PARTICLE_MIN_SPEED: f32 = 0.2;
    pub const PARTICLE_MAX_SPEED: f32 = 3.0;

    pub const STARTING_LIVES: u8 = 3;
}
