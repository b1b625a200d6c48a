//! The select → drag → confirm/cancel state machine.
//!
//! ```text
//! Idle --select--> Dragging --confirm (cells free)--> Idle (object placed)
//!                  Dragging --confirm (blocked)-----> Dragging
//!                  Dragging --rotate----------------> Dragging
//!                  Dragging --cancel----------------> Idle (object discarded)
//! ```
//!
//! The free-check and the commit happen inside one [`PlacementController::confirm`]
//! call, so no other writer can claim cells between them.

use std::fmt;

use bevy::prelude::*;

use super::object::PlaceableObject;
use crate::buildings::BuildingKind;
use crate::footprint::Rotation;
use crate::grid::CellCoord;
use crate::occupancy::OccupancyMap;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlacementState {
    #[default]
    Idle,
    Dragging(PlaceableObject),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// A command that needs an object arrived while nothing is selected.
    NotDragging,
    /// The footprint overlaps cells that are already occupied.
    Rejected { blocked: Vec<CellCoord> },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NotDragging => f.write_str("no building selected"),
            PlacementError::Rejected { blocked } => {
                write!(f, "footprint overlaps {} occupied cell(s)", blocked.len())
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Result of a successful confirm.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// The committed object, with `is_placed() == true`.
    pub object: PlaceableObject,
    /// Cells newly marked occupied.
    pub cells: Vec<CellCoord>,
}

/// What the renderer needs to draw the in-progress object.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementPreview {
    pub kind: BuildingKind,
    pub rotation: Rotation,
    pub position: Vec3,
    pub cells: Vec<CellCoord>,
    pub blocked: Vec<CellCoord>,
}

impl PlacementPreview {
    pub fn is_valid(&self) -> bool {
        self.blocked.is_empty()
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct PlacementController {
    state: PlacementState,
}

impl PlacementController {
    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    pub fn dragging(&self) -> Option<&PlaceableObject> {
        match &self.state {
            PlacementState::Dragging(object) => Some(object),
            PlacementState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PlacementState::Dragging(_))
    }

    /// Start dragging a new object at the pointer's cell. An object that was
    /// already being dragged is discarded and returned.
    pub fn select(&mut self, kind: BuildingKind, pointer: Vec3) -> Option<PlaceableObject> {
        self.drag(PlaceableObject::new(kind, pointer))
    }

    /// Start dragging an already-built object, discarding any current one.
    pub fn drag(&mut self, object: PlaceableObject) -> Option<PlaceableObject> {
        match std::mem::replace(&mut self.state, PlacementState::Dragging(object)) {
            PlacementState::Dragging(previous) => Some(previous),
            PlacementState::Idle => None,
        }
    }

    /// Move the dragged object to the cell under `pointer`.
    pub fn update_pointer(&mut self, pointer: Vec3) {
        if let PlacementState::Dragging(object) = &mut self.state {
            object.move_to(pointer);
        }
    }

    pub fn rotate(&mut self) -> Result<Rotation, PlacementError> {
        match &mut self.state {
            PlacementState::Dragging(object) => {
                object.rotate();
                Ok(object.rotation())
            }
            PlacementState::Idle => Err(PlacementError::NotDragging),
        }
    }

    /// Commit the dragged object if every footprint cell is free.
    ///
    /// On rejection the controller stays in `Dragging` and the occupancy map
    /// is untouched.
    pub fn confirm(&mut self, occupancy: &mut OccupancyMap) -> Result<Placement, PlacementError> {
        let mut object = match std::mem::take(&mut self.state) {
            PlacementState::Dragging(object) => object,
            PlacementState::Idle => return Err(PlacementError::NotDragging),
        };
        let cells = object.cells();
        if !occupancy.is_free(&cells) {
            let blocked = occupancy.blocked(&cells);
            self.state = PlacementState::Dragging(object);
            return Err(PlacementError::Rejected { blocked });
        }
        occupancy.commit(&cells);
        object.place();
        Ok(Placement { object, cells })
    }

    /// Discard the dragged object. Occupancy is never touched.
    pub fn cancel(&mut self) -> Result<PlaceableObject, PlacementError> {
        match std::mem::take(&mut self.state) {
            PlacementState::Dragging(object) => Ok(object),
            PlacementState::Idle => Err(PlacementError::NotDragging),
        }
    }

    pub fn preview(&self, occupancy: &OccupancyMap) -> Option<PlacementPreview> {
        let object = self.dragging()?;
        let cells = object.cells();
        let blocked = occupancy.blocked(&cells);
        Some(PlacementPreview {
            kind: object.kind(),
            rotation: object.rotation(),
            position: object.position(),
            cells,
            blocked,
        })
    }
}
