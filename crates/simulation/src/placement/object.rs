use bevy::prelude::*;

use crate::buildings::BuildingKind;
use crate::footprint::{compute_footprint, BaseCorners, Footprint, Rotation};
use crate::grid::{snap_to_grid, world_to_cell, CellCoord};

/// A candidate structure that follows the pointer until it is committed.
///
/// Width and depth are measured once from the bounding box when the object is
/// created and swapped on every quarter turn. `placed` flips to true exactly
/// once, after which the object no longer moves or rotates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceableObject {
    kind: BuildingKind,
    corners: BaseCorners,
    rotation: Rotation,
    width: u32,
    depth: u32,
    position: Vec3,
    placed: bool,
}

impl PlaceableObject {
    /// Create an unplaced object of `kind`, snapped to the cell under `pointer`.
    pub fn new(kind: BuildingKind, pointer: Vec3) -> Self {
        Self::with_corners(kind, kind.base_corners(), pointer)
    }

    /// Create an unplaced object with an explicit local base.
    pub fn with_corners(kind: BuildingKind, corners: BaseCorners, pointer: Vec3) -> Self {
        let position = snap_to_grid(pointer);
        let measured = compute_footprint(corners.to_world(position, Rotation::Deg0));
        Self {
            kind,
            corners,
            rotation: Rotation::Deg0,
            width: measured.width,
            depth: measured.depth,
            position,
            placed: false,
        }
    }

    pub fn kind(&self) -> BuildingKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Snapped world position of the object's pivot.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// (width, depth) in cells for the current heading.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.depth)
    }

    /// World position of base vertex 0, the footprint's anchor.
    pub fn start_position(&self) -> Vec3 {
        self.position + self.rotation.apply(self.corners.0[0])
    }

    /// World-space base vertices in the current heading.
    pub fn world_corners(&self) -> [Vec3; 4] {
        self.corners.to_world(self.position, self.rotation)
    }

    pub fn origin(&self) -> CellCoord {
        world_to_cell(self.start_position())
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.origin(), self.width, self.depth)
    }

    pub fn cells(&self) -> Vec<CellCoord> {
        self.footprint().cells()
    }

    /// Follow the pointer, snapping to the center of the cell beneath it.
    pub fn move_to(&mut self, pointer: Vec3) {
        if self.placed {
            return;
        }
        self.position = snap_to_grid(pointer);
    }

    /// Quarter turn: swap width/depth and shift the vertex order by one.
    pub fn rotate(&mut self) {
        if self.placed {
            return;
        }
        self.rotation = self.rotation.next();
        std::mem::swap(&mut self.width, &mut self.depth);
        self.corners = self.corners.shifted();
    }

    pub(crate) fn place(&mut self) {
        self.placed = true;
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).with_rotation(self.rotation.to_quat())
    }
}
