/// Edge length of one grid cell in world units.
pub const CELL_SIZE: f32 = 1.0;

/// World-space Y of the ground plane that buildings are placed on.
pub const GROUND_Y: f32 = 0.0;

/// Half extent (in cells) of the playable lot drawn by the client.
/// Occupancy itself is unbounded; this only sizes the visible ground.
pub const LOT_HALF_EXTENT: i32 = 24;

pub const LOT_WORLD_SIZE: f32 = (LOT_HALF_EXTENT * 2) as f32 * CELL_SIZE;

/// Environment variable naming an optional JSON file of [`GameParams`] overrides.
///
/// [`GameParams`]: crate::game_params::GameParams
pub const PARAMS_ENV_VAR: &str = "BUBBLE_TAVERN_PARAMS";

/// Environment variable holding a `u64` seed for reproducible customer demands.
pub const SEED_ENV_VAR: &str = "BUBBLE_TAVERN_SEED";
