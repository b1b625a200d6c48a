use bevy::prelude::*;

use simulation::features::{feature_enabled, Feature};
use simulation::SimulationSet;

pub mod camera;
pub mod cursor;
pub mod input;
pub mod preview;
pub mod scene;

#[cfg(test)]
mod tests;

use camera::FollowCamera;

/// Window-side half of the game: pointer and keyboard in, 3D scene and
/// gizmos out.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowCamera>()
            .add_systems(Startup, (camera::setup_camera, scene::setup_scene))
            .add_systems(
                Update,
                (
                    cursor::update_pointer_world_pos.run_if(feature_enabled(Feature::Pointer)),
                    input::keyboard_placement_input,
                    input::mouse_placement_input,
                    input::keyboard_player_input,
                )
                    .before(SimulationSet::Input),
            )
            .add_systems(
                Update,
                (
                    scene::spawn_building_meshes,
                    scene::update_vat_materials,
                    camera::follow_player.run_if(feature_enabled(Feature::Camera)),
                )
                    .after(SimulationSet::PostSim),
            )
            .add_systems(
                Update,
                (
                    preview::draw_lot_grid,
                    preview::draw_occupied_cells,
                    preview::draw_drag_preview,
                )
                    .after(SimulationSet::PostSim),
            );
    }
}
