//! 2D canvas renderer (browser)

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{DrawKind, Renderer, Scene};
use crate::sim::Shape;

/// Colors for game elements
pub mod colors {
    pub const BALL: &str = "#FFF";
    pub const PADDLE: &str = "#FFF";
    pub const BRICK: &str = "#FFF";
    pub const PARTICLE: &str = "#FD4";
    pub const TEXT: &str = "#FFF";
}

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_font("16px Arial");
        Self { ctx }
    }

    fn fill_shape(&self, shape: &Shape, color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        match *shape {
            Shape::Circle { center, radius } => {
                let _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
            }
            Shape::Rect { pos, size } => {
                ctx.rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
        }
        ctx.fill();
        ctx.close_path();
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, scene: &Scene) {
        let (width, height) = (scene.width as f64, scene.height as f64);
        self.ctx.clear_rect(0.0, 0.0, width, height);

        for command in &scene.commands {
            let color = match command.kind {
                DrawKind::Ball => colors::BALL,
                DrawKind::Paddle => colors::PADDLE,
                DrawKind::Brick => colors::BRICK,
                DrawKind::Particle => colors::PARTICLE,
            };
            self.fill_shape(&command.shape, color);
        }

        self.ctx.set_fill_style_str(colors::TEXT);
        let hud = &scene.hud;
        let _ = self.ctx.fill_text(&format!("Score: {}", hud.score), 8.0, 20.0);
        let _ = self
            .ctx
            .fill_text(&format!("Round: {}", hud.round), width / 2.0 - 32.0, 20.0);
        let _ = self
            .ctx
            .fill_text(&format!("Lives: {}", hud.lives), width - 64.0, 20.0);
    }
}
