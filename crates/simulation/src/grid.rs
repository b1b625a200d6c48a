use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, GROUND_Y};

/// Integer address of one grid square on the ground plane.
///
/// World X maps to `x`, world Z maps to `y`. There is no vertical axis:
/// building placement is planar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Quantize a world-space point onto the grid.
pub fn world_to_cell(point: Vec3) -> CellCoord {
    let gx = (point.x / CELL_SIZE).floor() as i32;
    let gy = (point.z / CELL_SIZE).floor() as i32;
    CellCoord::new(gx, gy)
}

/// World-space center of a cell on the ground plane.
pub fn cell_to_world_center(cell: CellCoord) -> Vec3 {
    let wx = cell.x as f32 * CELL_SIZE + CELL_SIZE * 0.5;
    let wz = cell.y as f32 * CELL_SIZE + CELL_SIZE * 0.5;
    Vec3::new(wx, GROUND_Y, wz)
}

/// Snap a world position to the center of the cell containing it.
pub fn snap_to_grid(point: Vec3) -> Vec3 {
    cell_to_world_center(world_to_cell(point))
}
