//! Game state and core simulation types
//!
//! Everything one session mutates lives in `GameState`, owned by the frame
//! driver and passed explicitly into every simulation step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bricks::BrickGrid;
use super::collision::Aabb;
use super::entity::{Entity, Shape};
use super::particles::Particle;
use crate::consts::*;
use crate::settings::{Playfield, Settings};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball and paddle placed at the serve position; the ball moves next frame
    Serving,
    /// Active gameplay
    InPlay,
    /// Game is paused
    Paused,
    /// Lives exhausted (terminal)
    GameOver,
    /// Final grid cleared (terminal)
    Won,
}

impl GamePhase {
    /// Whether the session has ended
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Things that happened during a frame, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleBounce,
    BrickDestroyed { column: usize, row: usize, points: u64 },
    /// Ball reached the floor; the session re-serves if lives remain
    LifeLost { remaining: u8 },
    /// Grid emptied; `round` is the round now starting
    RoundCleared { round: u32 },
    GameOver { score: u64 },
    Won { score: u64 },
}

/// The ball (position is the center)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Place the ball at the serve spot, moving up at `speed` per axis
    pub fn serve(&mut self, playfield: &Playfield, speed: f32, rightward: bool) {
        self.pos = Vec2::new(playfield.width / 2.0, playfield.height - SERVE_HEIGHT);
        let dx = if rightward { speed } else { -speed };
        self.vel = Vec2::new(dx, -speed);
    }

    /// Position after this frame's velocity is applied
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }
}

impl Entity for Ball {
    fn shape(&self) -> Shape {
        Shape::Circle {
            center: self.pos,
            radius: self.radius,
        }
    }

    /// Apply velocity; reflections must already be decided for the frame
    fn update(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle (position is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle centered horizontally, just above the floor
    pub fn new(playfield: &Playfield) -> Self {
        let mut paddle = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        };
        paddle.reset(playfield);
        paddle
    }

    pub fn reset(&mut self, playfield: &Playfield) {
        self.pos = Vec2::new(
            (playfield.width - self.size.x) / 2.0,
            playfield.height - PADDLE_FLOOR_GAP,
        );
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Apply one frame of player intent.
    ///
    /// A pointer position centers the paddle under it and overrides the keys.
    /// Otherwise left wins over right when both are held.
    pub fn steer(
        &mut self,
        move_left: bool,
        move_right: bool,
        pointer_x: Option<f32>,
        speed: f32,
        playfield_width: f32,
    ) {
        if let Some(x) = pointer_x {
            self.pos.x = x - self.size.x / 2.0;
        } else if move_left {
            self.pos.x -= speed;
        } else if move_right {
            self.pos.x += speed;
        }
        self.clamp(playfield_width);
    }

    /// Keep the paddle fully inside `[0, playfield_width]`
    pub fn clamp(&mut self, playfield_width: f32) {
        self.pos.x = self.pos.x.clamp(0.0, (playfield_width - self.size.x).max(0.0));
    }

    /// Does the ball rest on the top edge within the paddle's span?
    ///
    /// Catches a descending ball whose next step would reach the paddle,
    /// even if the boxes do not overlap yet.
    pub fn touches_top(&self, ball: &Ball) -> bool {
        let bottom = ball.pos.y + ball.radius;
        ball.vel.y > 0.0
            && ball.pos.x >= self.pos.x
            && ball.pos.x <= self.pos.x + self.size.x
            && bottom + ball.vel.y >= self.pos.y
            && bottom <= self.pos.y + self.size.y
    }
}

impl Entity for Paddle {
    fn shape(&self) -> Shape {
        Shape::Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Phase to return to when a pause ends
    pub resume_phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Current round (1-based)
    pub round: u32,
    /// Serve speed per axis; grows each round
    pub ball_speed: f32,
    /// Host time (ms) before which paddle bounces are suppressed
    pub paddle_cooldown_until: f64,
    /// Frames simulated so far
    pub frame: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    pub particles: Vec<Particle>,
}

impl GameState {
    /// Start a new session: full grid, round 1, ball served
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Serving,
            resume_phase: GamePhase::Serving,
            score: 0,
            lives: settings.starting_lives,
            round: 1,
            ball_speed: settings.ball_speed,
            paddle_cooldown_until: f64::NEG_INFINITY,
            frame: 0,
            ball: Ball::default(),
            paddle: Paddle::new(&settings.playfield),
            bricks: BrickGrid::new(),
            particles: Vec::new(),
            settings,
        };
        state.serve();
        state
    }

    /// Reset paddle and ball to the serve position
    pub fn serve(&mut self) {
        let playfield = self.settings.playfield;
        let rightward = if self.settings.variant.random_serve() {
            self.rng.random_bool(0.5)
        } else {
            true
        };
        self.paddle.reset(&playfield);
        self.ball.serve(&playfield, self.ball_speed, rightward);
        self.phase = GamePhase::Serving;
    }

    /// Whether the paddle may bounce the ball at host time `now_ms`
    #[inline]
    pub fn paddle_ready(&self, now_ms: f64) -> bool {
        now_ms >= self.paddle_cooldown_until
    }

    /// Playfield rectangle
    pub fn bounds(&self) -> Aabb {
        let Playfield { width, height } = self.settings.playfield;
        Aabb::from_rect(Vec2::ZERO, Vec2::new(width, height))
    }

    /// Message for the end-of-session notifier, once the session has ended
    pub fn end_message(&self) -> Option<String> {
        match self.phase {
            GamePhase::GameOver => Some(format!("Game Over. Final Score: {}", self.score)),
            GamePhase::Won => Some("You Win!".to_string()),
            _ => None,
        }
    }
}
