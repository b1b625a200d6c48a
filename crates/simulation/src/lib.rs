use bevy::prelude::*;

pub mod brewing;
pub mod buildings;
pub mod config;
pub mod customers;
pub mod features;
pub mod food;
pub mod footprint;
pub mod game_params;
pub mod grid;
pub mod keybindings;
pub mod occupancy;
pub mod placement;
pub mod player;
mod plugin_registration;
pub mod session;
pub mod sim_rng;
pub mod simulation_sets;

pub use simulation_sets::SimulationSet;

/// Headless gameplay: grid placement plus the tavern round. Needs only
/// `Time`; windowing, input devices and rendering live in client crates.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<features::DisabledFeatures>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Simulation,
                    SimulationSet::PostSim,
                )
                    .chain(),
            );

        plugin_registration::register_feature_plugins(app);
    }
}
