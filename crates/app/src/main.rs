use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::config::SEED_ENV_VAR;
use simulation::game_params::GameParams;
use simulation::sim_rng::SimRng;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bubble Tavern".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    // Inserted before SimulationPlugin so its defaults don't replace them.
    app.insert_resource(GameParams::from_env_or_default())
        .insert_resource(seeded_rng())
        .add_plugins((
            simulation::SimulationPlugin,
            rendering::RenderingPlugin,
            ui::UiPlugin,
        ));

    app.run();
}

fn seeded_rng() -> SimRng {
    let Ok(raw) = std::env::var(SEED_ENV_VAR) else {
        return SimRng::from_entropy();
    };
    match raw.trim().parse::<u64>() {
        Ok(seed) => {
            info!("Using seed {} from {}", seed, SEED_ENV_VAR);
            SimRng::from_seed_u64(seed)
        }
        Err(e) => {
            warn!("{}={:?} is not a u64 ({}), seeding from entropy", SEED_ENV_VAR, raw, e);
            SimRng::from_entropy()
        }
    }
}
