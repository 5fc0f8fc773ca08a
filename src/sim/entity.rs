//! Shared capability of everything that occupies the playfield
//!
//! Ball, paddle, bricks and particles expose a collision box, a drawable
//! shape and a per-frame `update`. Bricks never move and the paddle is
//! steered by input, so both keep the default no-op update.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// Renderable outline of an entity, in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Filled circle around `center`
    Circle { center: Vec2, radius: f32 },
    /// Filled rectangle with top-left corner `pos`
    Rect { pos: Vec2, size: Vec2 },
}

impl Shape {
    /// Bounding box of the outline
    pub fn aabb(&self) -> Aabb {
        match *self {
            Shape::Circle { center, radius } => Aabb::from_circle(center, radius),
            Shape::Rect { pos, size } => Aabb::from_rect(pos, size),
        }
    }
}

pub trait Entity {
    fn shape(&self) -> Shape;

    /// Collision box; entities collide as their shape's bounding box
    fn aabb(&self) -> Aabb {
        self.shape().aabb()
    }

    /// Advance one frame
    fn update(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot(Vec2);

    impl Entity for Dot {
        fn shape(&self) -> Shape {
            Shape::Circle {
                center: self.0,
                radius: 1.0,
            }
        }
    }

    #[test]
    fn test_static_entity_update_is_noop() {
        let mut dot = Dot(Vec2::new(5.0, 5.0));
        dot.update();
        assert_eq!(dot.0, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_default_aabb_follows_shape() {
        let dot = Dot(Vec2::new(5.0, 5.0));
        assert_eq!(dot.aabb(), Aabb::new(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0)));

        let rect = Shape::Rect {
            pos: Vec2::new(1.0, 2.0),
            size: Vec2::new(3.0, 4.0),
        };
        assert_eq!(rect.aabb().max, Vec2::new(4.0, 6.0));
    }
}
