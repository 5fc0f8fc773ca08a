//! Text renderer for terminals and headless runs
//!
//! Rasterizes each scene into a fixed grid of characters, one cell per
//! `cell_size` block of playfield pixels.

use glam::Vec2;

use super::{DrawKind, Renderer, Scene};

fn glyph(kind: DrawKind) -> char {
    match kind {
        DrawKind::Ball => 'O',
        DrawKind::Paddle => '=',
        DrawKind::Brick => '#',
        DrawKind::Particle => '.',
    }
}

/// Higher wins when two shapes land in one cell
fn priority(c: char) -> u8 {
    match c {
        'O' => 4,
        '=' => 3,
        '#' => 2,
        '.' => 1,
        _ => 0,
    }
}

pub struct AsciiRenderer {
    cell_size: Vec2,
    frame: String,
    frames_drawn: u64,
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(Vec2::new(8.0, 16.0))
    }
}

impl AsciiRenderer {
    pub fn new(cell_size: Vec2) -> Self {
        Self {
            cell_size,
            frame: String::new(),
            frames_drawn: 0,
        }
    }

    /// The most recently drawn frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for AsciiRenderer {
    fn draw(&mut self, scene: &Scene) {
        let columns = (scene.width / self.cell_size.x).ceil().max(1.0) as usize;
        let rows = (scene.height / self.cell_size.y).ceil().max(1.0) as usize;
        let mut grid = vec![vec![' '; columns]; rows];

        for command in &scene.commands {
            let aabb = command.shape.aabb();
            let c = glyph(command.kind);

            // Cells the shape touches, clipped to the playfield
            let min = (aabb.min / self.cell_size).floor().max(Vec2::ZERO);
            let max = (aabb.max / self.cell_size).floor();
            if max.x < 0.0 || max.y < 0.0 {
                continue;
            }
            let (x0, y0) = (min.x as usize, min.y as usize);
            let x1 = (max.x as usize).min(columns - 1);
            let y1 = (max.y as usize).min(rows - 1);

            for row in grid.iter_mut().take(y1 + 1).skip(y0) {
                for cell in row.iter_mut().take(x1 + 1).skip(x0) {
                    if priority(c) > priority(*cell) {
                        *cell = c;
                    }
                }
            }
        }

        let hud = &scene.hud;
        let mut frame = format!(
            "Score: {}  Lives: {}  Round: {}\n",
            hud.score, hud.lives, hud.round
        );
        let border: String = std::iter::repeat_n('-', columns + 2).collect();
        frame.push_str(&border);
        frame.push('\n');
        for row in grid {
            frame.push('|');
            frame.extend(row);
            frame.push_str("|\n");
        }
        frame.push_str(&border);

        self.frame = frame;
        self.frames_drawn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_draws_all_parts() {
        let state = GameState::new(Settings::default(), 1);
        let mut renderer = AsciiRenderer::default();
        renderer.draw(&Scene::capture(&state));

        let frame = renderer.frame();
        assert!(frame.starts_with("Score: 0  Lives: 3  Round: 1"));
        assert!(frame.contains('O'));
        assert!(frame.contains('='));
        assert!(frame.contains('#'));
        // 480x320 at 8x16 cells: 60 columns, 20 rows, plus HUD and borders
        assert_eq!(frame.lines().count(), 1 + 1 + 20 + 1);
        assert!(frame.lines().skip(2).take(20).all(|l| l.chars().count() == 62));
        assert_eq!(renderer.frames_drawn(), 1);
    }

    #[test]
    fn test_offscreen_shapes_are_clipped() {
        let mut state = GameState::new(Settings::default(), 1);
        state
            .particles
            .push(crate::sim::Particle::new(Vec2::new(-50.0, -50.0), Vec2::ZERO));
        state
            .particles
            .push(crate::sim::Particle::new(Vec2::new(900.0, 900.0), Vec2::ZERO));
        let mut renderer = AsciiRenderer::default();
        renderer.draw(&Scene::capture(&state));
        assert!(!renderer.frame().contains('.'));
    }
}
