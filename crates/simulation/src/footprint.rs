//! Rotation-aware footprints of placeable objects.
//!
//! An object's base is described by four vertices in its local frame, ordered
//! `(min,min) (max,min) (max,max) (min,max)` on the XZ plane. The footprint is
//! measured by quantizing the world-space vertices onto the grid: width is the
//! cell distance between vertex 0 and vertex 1, depth between vertex 0 and
//! vertex 3, and vertex 0 is the anchor cell.
//!
//! A quarter turn rotates the object about +Y and shifts the vertex order by
//! one, which keeps vertex 0 on the minimum world corner. Quarter turns are
//! applied with exact component swaps so vertices lying on cell boundaries
//! quantize the same way in every heading.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::{world_to_cell, CellCoord};

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

/// One of the four discrete headings a placeable can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// The heading after one more quarter turn.
    pub fn next(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    pub fn degrees(self) -> f32 {
        f32::from(self.quarter_turns()) * 90.0
    }

    /// Orientation for the visual transform.
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_y(self.degrees().to_radians())
    }

    /// Rotate a local offset about +Y. Matches [`Rotation::to_quat`] exactly.
    pub fn apply(self, v: Vec3) -> Vec3 {
        match self {
            Rotation::Deg0 => v,
            Rotation::Deg90 => Vec3::new(v.z, v.y, -v.x),
            Rotation::Deg180 => Vec3::new(-v.x, v.y, -v.z),
            Rotation::Deg270 => Vec3::new(-v.z, v.y, v.x),
        }
    }
}

// ---------------------------------------------------------------------------
// Base vertices
// ---------------------------------------------------------------------------

/// The four base vertices of an object's bounding box in its local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCorners(pub [Vec3; 4]);

impl BaseCorners {
    /// Bottom face of an axis-aligned box given by its center and full size.
    pub fn from_box(center: Vec3, size: Vec3) -> Self {
        let h = size * 0.5;
        Self([
            center + Vec3::new(-h.x, -h.y, -h.z),
            center + Vec3::new(h.x, -h.y, -h.z),
            center + Vec3::new(h.x, -h.y, h.z),
            center + Vec3::new(-h.x, -h.y, h.z),
        ])
    }

    /// Vertex order after one quarter turn: `v'[i] = v[(i + 1) % 4]`.
    pub fn shifted(self) -> Self {
        let v = self.0;
        Self([v[1], v[2], v[3], v[0]])
    }

    /// World-space vertices of an object at `position` facing `rotation`.
    pub fn to_world(self, position: Vec3, rotation: Rotation) -> [Vec3; 4] {
        self.0.map(|v| position + rotation.apply(v))
    }
}

// ---------------------------------------------------------------------------
// Footprint
// ---------------------------------------------------------------------------

/// The rectangular block of cells an object's base covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub origin: CellCoord,
    pub width: u32,
    pub depth: u32,
}

impl Footprint {
    pub const fn new(origin: CellCoord, width: u32, depth: u32) -> Self {
        Self {
            origin,
            width,
            depth,
        }
    }

    /// Same size, swapped axes.
    pub fn swapped(self) -> Self {
        Self::new(self.origin, self.depth, self.width)
    }

    pub fn area(self) -> u32 {
        self.width * self.depth
    }

    pub fn cells(self) -> Vec<CellCoord> {
        cells_covered(self.origin, self.width, self.depth)
    }

    pub fn contains(self, cell: CellCoord) -> bool {
        let dx = cell.x - self.origin.x;
        let dy = cell.y - self.origin.y;
        dx >= 0 && dy >= 0 && (dx as u32) < self.width && (dy as u32) < self.depth
    }
}

/// Measure the footprint of four world-space base vertices.
pub fn compute_footprint(corners: [Vec3; 4]) -> Footprint {
    let cells = corners.map(world_to_cell);
    let width = (cells[0].x - cells[1].x).unsigned_abs();
    let depth = (cells[0].y - cells[3].y).unsigned_abs();
    Footprint::new(cells[0], width, depth)
}

/// Every cell in `[origin.x, origin.x + width) x [origin.y, origin.y + depth)`.
pub fn cells_covered(origin: CellCoord, width: u32, depth: u32) -> Vec<CellCoord> {
    let mut cells = Vec::with_capacity((width * depth) as usize);
    for dx in 0..width as i32 {
        for dy in 0..depth as i32 {
            cells.push(origin.offset(dx, dy));
        }
    }
    cells
}
