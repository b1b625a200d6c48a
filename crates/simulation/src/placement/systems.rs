use bevy::prelude::*;

use super::controller::{PlacementController, PlacementError};
use super::types::{DragPreview, PlacementCommand, PlacementCommitted, PointerWorldPos};
use crate::buildings::PlacedBuilding;
use crate::occupancy::OccupancyMap;

/// Keep the dragged object under the pointer. When the pointer is off the
/// ground the object stays where it was last seen.
pub fn follow_pointer(pointer: Res<PointerWorldPos>, mut controller: ResMut<PlacementController>) {
    if !controller.is_dragging() {
        return;
    }
    if let Some(point) = pointer.0 {
        controller.update_pointer(point);
    }
}

/// Apply this frame's placement commands in arrival order.
pub fn apply_placement_commands(
    mut commands: Commands,
    mut events: EventReader<PlacementCommand>,
    pointer: Res<PointerWorldPos>,
    mut controller: ResMut<PlacementController>,
    mut occupancy: ResMut<OccupancyMap>,
    mut committed: EventWriter<PlacementCommitted>,
) {
    for command in events.read() {
        match *command {
            PlacementCommand::Select(kind) => {
                let at = pointer.0.unwrap_or(Vec3::ZERO);
                if let Some(previous) = controller.select(kind, at) {
                    debug!("Discarded unplaced {} in favour of {}", previous.kind(), kind);
                }
                info!("Selected {} for placement", kind);
            }
            PlacementCommand::Rotate => match controller.rotate() {
                Ok(rotation) => debug!("Rotated to {}°", rotation.degrees()),
                Err(e) => debug!("Rotate ignored: {}", e),
            },
            PlacementCommand::Confirm => match controller.confirm(&mut occupancy) {
                Ok(placement) => {
                    let object = &placement.object;
                    let footprint = object.footprint();
                    let entity = commands
                        .spawn((
                            PlacedBuilding {
                                kind: object.kind(),
                                footprint,
                                rotation: object.rotation(),
                            },
                            object.transform(),
                        ))
                        .id();
                    info!(
                        "Placed {} at {} ({}x{} cells, {} occupied total)",
                        object.kind(),
                        footprint.origin,
                        footprint.width,
                        footprint.depth,
                        occupancy.len()
                    );
                    committed.send(PlacementCommitted {
                        entity,
                        kind: object.kind(),
                        cells: placement.cells,
                    });
                }
                Err(PlacementError::NotDragging) => {}
                Err(e) => debug!("Placement rejected: {}", e),
            },
            PlacementCommand::Cancel => {
                if let Ok(discarded) = controller.cancel() {
                    info!("Cancelled placement of {}", discarded.kind());
                }
            }
        }
    }
}

/// Publish the drag footprint and its validity for the renderer.
pub fn update_drag_preview(
    controller: Res<PlacementController>,
    occupancy: Res<OccupancyMap>,
    mut preview: ResMut<DragPreview>,
) {
    let next = controller.preview(&occupancy);
    if preview.0 != next {
        preview.0 = next;
    }
}
