//! Axis-aligned bounding box collision
//!
//! Every collider in the game (ball, paddle, bricks, particles) reduces to an
//! AABB. The overlap test is a closed-interval test: touching edges collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Box enclosing a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Closed-interval overlap with another box
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        overlaps(self, other)
    }

    /// True if this box lies entirely outside `bounds` on some side
    pub fn is_outside(&self, bounds: &Aabb) -> bool {
        self.max.x < bounds.min.x
            || self.min.x > bounds.max.x
            || self.max.y < bounds.min.y
            || self.min.y > bounds.max.y
    }
}

/// Do two rectangles overlap?
///
/// They overlap unless one is entirely to the left, right, above or below
/// the other. Shared edges and corners count as overlap.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    !(a.max.x < b.min.x || a.min.x > b.max.x || a.min.y > b.max.y || a.max.y < b.min.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_rect(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_basic() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &rect(5.0, 5.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &rect(11.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &rect(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(overlaps(&a, &rect(10.0, 0.0, 5.0, 5.0)));
        // Shares only a corner
        assert!(overlaps(&a, &rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_from_circle() {
        let b = Aabb::from_circle(Vec2::new(50.0, 20.0), 10.0);
        assert_eq!(b.min, Vec2::new(40.0, 10.0));
        assert_eq!(b.max, Vec2::new(60.0, 30.0));
        assert_eq!(b.center(), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn test_is_outside() {
        let field = rect(0.0, 0.0, 480.0, 320.0);
        assert!(!rect(470.0, 10.0, 20.0, 20.0).is_outside(&field));
        assert!(rect(481.0, 10.0, 5.0, 5.0).is_outside(&field));
        assert!(rect(10.0, -6.0, 5.0, 5.0).is_outside(&field));
        // Touching the edge is still inside
        assert!(!rect(480.0, 10.0, 5.0, 5.0).is_outside(&field));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_itself(x in -500.0f32..500.0, y in -500.0f32..500.0, w in 0.0f32..100.0, h in 0.0f32..100.0) {
            let a = rect(x, y, w, h);
            prop_assert!(overlaps(&a, &a));
        }

        #[test]
        fn prop_outside_never_overlaps(
            x in -500.0f32..500.0, y in -500.0f32..500.0, w in 0.0f32..100.0, h in 0.0f32..100.0,
        ) {
            let field = rect(0.0, 0.0, 480.0, 320.0);
            let b = rect(x, y, w, h);
            if b.is_outside(&field) {
                prop_assert!(!overlaps(&b, &field));
            } else {
                prop_assert!(overlaps(&b, &field));
            }
        }
    }
}
