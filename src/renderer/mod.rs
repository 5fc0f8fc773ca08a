//! Rendering boundary
//!
//! The simulation hands renderers a `Scene`: shapes tagged with what they
//! are, plus the HUD numbers. Styling belongs to each renderer.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use ascii::AsciiRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::{Entity, GameState, Shape};

/// What a draw command depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Ball,
    Paddle,
    Brick,
    Particle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub kind: DrawKind,
    pub shape: Shape,
}

/// Text overlay values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub round: u32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    /// Draw order: ball, paddle, particles, then bricks
    pub commands: Vec<DrawCommand>,
    pub hud: Hud,
}

impl Scene {
    /// Snapshot the drawable state of a game
    pub fn capture(state: &GameState) -> Self {
        let mut commands = Vec::with_capacity(2 + state.particles.len() + state.bricks.remaining());
        commands.push(DrawCommand {
            kind: DrawKind::Ball,
            shape: state.ball.shape(),
        });
        commands.push(DrawCommand {
            kind: DrawKind::Paddle,
            shape: state.paddle.shape(),
        });
        commands.extend(state.particles.iter().map(|p| DrawCommand {
            kind: DrawKind::Particle,
            shape: p.shape(),
        }));
        commands.extend(state.bricks.iter().map(|b| DrawCommand {
            kind: DrawKind::Brick,
            shape: b.shape(),
        }));

        Self {
            width: state.settings.playfield.width,
            height: state.settings.playfield.height,
            commands,
            hud: Hud {
                score: state.score,
                lives: state.lives,
                round: state.round,
            },
        }
    }

    /// Commands of one kind
    pub fn of_kind(&self, kind: DrawKind) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.kind == kind)
    }
}

/// Consumer of finished frames
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;

    #[test]
    fn test_capture_initial_scene() {
        let state = GameState::new(Settings::default(), 5);
        let scene = Scene::capture(&state);

        assert_eq!(scene.width, PLAYFIELD_WIDTH);
        assert_eq!(scene.commands[0].kind, DrawKind::Ball);
        assert_eq!(scene.commands[1].kind, DrawKind::Paddle);
        assert_eq!(scene.of_kind(DrawKind::Brick).count(), BRICK_ROWS * BRICK_COLUMNS);
        assert_eq!(scene.of_kind(DrawKind::Particle).count(), 0);
        assert_eq!(
            scene.hud,
            Hud {
                score: 0,
                lives: STARTING_LIVES,
                round: 1
            }
        );
        assert!(matches!(
            scene.commands[0].shape,
            Shape::Circle { radius, .. } if radius == BALL_RADIUS
        ));
    }

    #[test]
    fn test_capture_skips_destroyed_bricks() {
        let mut state = GameState::new(Settings::default(), 5);
        state.bricks.destroy(0, 0);
        state.bricks.destroy(4, 2);
        let scene = Scene::capture(&state);
        assert_eq!(scene.of_kind(DrawKind::Brick).count(), BRICK_ROWS * BRICK_COLUMNS - 2);
    }
}
