use bevy::prelude::*;

use crate::*;

/// Register all gameplay plugins.
///
/// Each plugin is registered on its own line. When adding a new feature
/// plugin, append an `app.add_plugins(...)` line to the matching section.
pub(crate) fn register_feature_plugins(app: &mut App) {
    // Shared state
    app.add_plugins(sim_rng::SimRngPlugin);
    app.add_plugins(game_params::GameParamsPlugin);
    app.add_plugins(session::SessionPlugin);
    app.add_plugins(keybindings::KeyBindingsPlugin);

    // Building placement
    app.add_plugins(placement::PlacementPlugin);

    // Tavern floor
    app.add_plugins(player::PlayerPlugin);
    app.add_plugins(brewing::BrewingPlugin);
    app.add_plugins(customers::CustomersPlugin);
}
