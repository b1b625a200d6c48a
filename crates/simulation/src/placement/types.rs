use bevy::prelude::*;

use super::controller::PlacementPreview;
use crate::buildings::BuildingKind;
use crate::grid::CellCoord;

/// Edge-triggered placement inputs, one per key/button press.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementCommand {
    Select(BuildingKind),
    Rotate,
    Confirm,
    Cancel,
}

/// Sent once per successful placement with the cells it claimed.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlacementCommitted {
    pub entity: Entity,
    pub kind: BuildingKind,
    pub cells: Vec<CellCoord>,
}

/// Ground-plane point under the pointer this frame, if any.
///
/// Written by the client's pointer raycast; read while dragging.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerWorldPos(pub Option<Vec3>);

/// Footprint of the in-progress object and whether it could be placed now.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct DragPreview(pub Option<PlacementPreview>);

impl DragPreview {
    pub fn is_valid(&self) -> Option<bool> {
        self.0.as_ref().map(PlacementPreview::is_valid)
    }
}
