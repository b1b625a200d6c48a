use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::features::{feature_enabled, Feature};
use simulation::SimulationSet;

pub mod hud;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<hud::GameOverBanner>()
            .add_systems(Startup, theme::apply_tavern_theme)
            .add_systems(
                Update,
                (
                    hud::latch_game_over,
                    hud::hud_ui.run_if(feature_enabled(Feature::Hud)),
                    hud::game_over_ui,
                )
                    .chain()
                    .after(SimulationSet::PostSim),
            );
    }
}
