use bevy::prelude::*;

use super::controller::PlacementController;
use super::systems::{apply_placement_commands, follow_pointer, update_drag_preview};
use super::types::{DragPreview, PlacementCommand, PlacementCommitted, PointerWorldPos};
use crate::occupancy::OccupancyMap;
use crate::session::round_in_progress;
use crate::SimulationSet;

/// Registers occupancy, the placement controller and their per-frame systems.
/// Building stops once the round is over.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OccupancyMap>()
            .init_resource::<PlacementController>()
            .init_resource::<PointerWorldPos>()
            .init_resource::<DragPreview>()
            .add_event::<PlacementCommand>()
            .add_event::<PlacementCommitted>()
            .add_systems(
                Update,
                (follow_pointer, apply_placement_commands, update_drag_preview)
                    .chain()
                    .in_set(SimulationSet::Input)
                    .run_if(round_in_progress),
            );
    }
}
