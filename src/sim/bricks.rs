//! Brick grid
//!
//! A fixed `BRICK_COLUMNS x BRICK_ROWS` table of cells. Positions derive from
//! the grid index and the layout constants; only presence changes during a
//! round. Iteration is column-major, row-minor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Shape};
use crate::consts::*;

/// Top-left corner of the brick at a grid index
#[inline]
pub fn brick_position(column: usize, row: usize) -> Vec2 {
    Vec2::new(
        column as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
        row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
    )
}

/// Right and bottom edges of the full grid (used to validate playfields)
pub fn grid_extent() -> (f32, f32) {
    let last = brick_position(BRICK_COLUMNS - 1, BRICK_ROWS - 1);
    (last.x + BRICK_WIDTH, last.y + BRICK_HEIGHT)
}

/// One brick slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: usize,
    pub row: usize,
    pub pos: Vec2,
}

impl Brick {
    pub fn at(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            pos: brick_position(column, row),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(BRICK_WIDTH, BRICK_HEIGHT) * 0.5
    }
}

impl Entity for Brick {
    fn shape(&self) -> Shape {
        Shape::Rect {
            pos: self.pos,
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
        }
    }
}

/// The destructible grid for the current round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    /// Presence flags, indexed `column * BRICK_ROWS + row`
    cells: Vec<bool>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// A fully populated grid
    pub fn new() -> Self {
        Self {
            cells: vec![true; BRICK_COLUMNS * BRICK_ROWS],
        }
    }

    #[inline]
    fn index(column: usize, row: usize) -> usize {
        column * BRICK_ROWS + row
    }

    /// Mark every cell present again (start of a round)
    pub fn repopulate(&mut self) {
        self.cells.fill(true);
    }

    pub fn is_present(&self, column: usize, row: usize) -> bool {
        column < BRICK_COLUMNS && row < BRICK_ROWS && self.cells[Self::index(column, row)]
    }

    /// Remove a brick. Returns false if it was already gone.
    pub fn destroy(&mut self, column: usize, row: usize) -> bool {
        if !self.is_present(column, row) {
            return false;
        }
        self.cells[Self::index(column, row)] = false;
        true
    }

    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|&&present| present).count()
    }

    pub fn is_cleared(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Present bricks in column-major, row-minor order
    pub fn iter(&self) -> impl Iterator<Item = Brick> + '_ {
        (0..BRICK_COLUMNS)
            .flat_map(|column| (0..BRICK_ROWS).map(move |row| (column, row)))
            .filter(|&(column, row)| self.cells[Self::index(column, row)])
            .map(|(column, row)| Brick::at(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_positions() {
        assert_eq!(brick_position(0, 0), Vec2::new(30.0, 30.0));
        assert_eq!(brick_position(1, 0), Vec2::new(115.0, 30.0));
        assert_eq!(brick_position(0, 2), Vec2::new(30.0, 90.0));
        assert_eq!(grid_extent(), (445.0, 110.0));
    }

    #[test]
    fn test_new_grid_is_full() {
        let grid = BrickGrid::new();
        assert_eq!(grid.remaining(), BRICK_ROWS * BRICK_COLUMNS);
        assert!(!grid.is_cleared());
    }

    #[test]
    fn test_iteration_order_is_column_major() {
        let grid = BrickGrid::new();
        let order: Vec<_> = grid.iter().map(|b| (b.column, b.row)).take(4).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
    }

    #[test]
    fn test_destroy_is_one_shot() {
        let mut grid = BrickGrid::new();
        assert!(grid.destroy(2, 1));
        assert!(!grid.is_present(2, 1));
        assert!(!grid.destroy(2, 1));
        assert_eq!(grid.remaining(), BRICK_ROWS * BRICK_COLUMNS - 1);
        assert!(grid.iter().all(|b| (b.column, b.row) != (2, 1)));
    }

    #[test]
    fn test_out_of_range_is_absent() {
        let mut grid = BrickGrid::new();
        assert!(!grid.is_present(BRICK_COLUMNS, 0));
        assert!(!grid.destroy(0, BRICK_ROWS));
    }

    #[test]
    fn test_clear_and_repopulate() {
        let mut grid = BrickGrid::new();
        for column in 0..BRICK_COLUMNS {
            for row in 0..BRICK_ROWS {
                grid.destroy(column, row);
            }
        }
        assert!(grid.is_cleared());
        assert_eq!(grid.iter().count(), 0);

        grid.repopulate();
        assert_eq!(grid.remaining(), BRICK_ROWS * BRICK_COLUMNS);
    }

    #[test]
    fn test_brick_center() {
        let brick = Brick::at(0, 0);
        assert_eq!(brick.center(), Vec2::new(67.5, 40.0));
        assert_eq!(brick.aabb().max, Vec2::new(105.0, 50.0));
    }
}
