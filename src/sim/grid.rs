//! Static level terrain: the obstacle grid and the rectangle-to-cell query
//!
//! The grid never changes after construction; everything that moves is an
//! actor. `obstacle_at` is the one terrain probe moving actors use, and its
//! check order is part of the game rules (see the method docs).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Static terrain marker occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    /// Solid terrain; also what the world beyond the left, right and top
    /// edges reads as
    Wall,
    /// Deadly terrain; also what the world below the bottom edge reads as
    Lava,
}

/// Grid of optional obstacle markers, one tile per cell
///
/// Rows may have different lengths. `width` is the longest row; cells past a
/// short row's end are simply absent and read as passable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleGrid {
    rows: Vec<Vec<Option<Obstacle>>>,
    width: usize,
}

impl ObstacleGrid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Width in tiles (length of the longest row)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles (number of rows)
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Marker stored at cell `(x, y)`, if that cell exists and holds one
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .flatten()
    }

    /// Classify the terrain under an axis-aligned rectangle
    ///
    /// The rectangle expands to the cells it touches: floor the low edge,
    /// ceil the high edge, per axis. Checks run in a fixed priority order:
    /// anything past the left, right or top edge is `Wall`; then anything
    /// past the bottom edge is `Lava`; then the touched cells are scanned
    /// row-major (top to bottom, left to right) and the first marker wins.
    ///
    /// Callers rely on that order: a rectangle hanging off the bottom
    /// classifies as `Lava` even when its in-bounds cells hold walls, and a
    /// marker early in scan order shadows every later one.
    pub fn obstacle_at(&self, pos: DVec2, size: DVec2) -> Option<Obstacle> {
        // Saturating f64 -> i64 casts keep degenerate inputs (huge values,
        // NaN) inside ordinary integer comparisons.
        let left = pos.x.floor() as i64;
        let top = pos.y.floor() as i64;
        let right = (pos.x + size.x).ceil() as i64;
        let bottom = (pos.y + size.y).ceil() as i64;

        if left < 0 || right > self.width as i64 || top < 0 {
            return Some(Obstacle::Wall);
        }
        if bottom > self.rows.len() as i64 {
            return Some(Obstacle::Lava);
        }

        // Bounds are clear, so the casts below cannot underflow. A negative
        // size yields an empty range here, same as no touched cells.
        for y in top..bottom {
            for x in left..right {
                if let Some(marker) = self.get(x as usize, y as usize) {
                    return Some(marker);
                }
            }
        }
        None
    }
}
