//! Data-driven game parameters.
//!
//! Collects the gameplay tunables (session length, vat behaviour, customer
//! patience and payments, player reach) into a single [`GameParams`]
//! resource. Systems read `Res<GameParams>` instead of module constants, and
//! the client may override the defaults from a JSON file at start-up.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Session parameters
// ---------------------------------------------------------------------------

/// Tunables for the round clock and the player's wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionParams {
    /// Length of one round in seconds.
    pub duration_secs: f32,
    /// Pebbles the player starts with.
    pub starting_pebbles: i64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            duration_secs: 180.0,
            starting_pebbles: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// Bubble vat parameters
// ---------------------------------------------------------------------------

/// Tunables shared by every bubble vat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleParams {
    pub max_level: f32,
    pub min_level: f32,
    /// Level lost per whole elapsed second.
    pub decay_rate: f32,
    /// Level gained per strike.
    pub increase_amount: f32,
    /// Level at or above which the vat can hand out food.
    pub ready_threshold: f32,
    /// Seconds between decay steps.
    pub decay_interval_secs: f32,
}

impl Default for BubbleParams {
    fn default() -> Self {
        Self {
            max_level: 100.0,
            min_level: 0.0,
            decay_rate: 1.0,
            increase_amount: 20.0,
            ready_threshold: 75.0,
            decay_interval_secs: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Customer parameters
// ---------------------------------------------------------------------------

/// Tunables for customer tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerParams {
    /// Seconds a customer waits before leaving unserved.
    pub wait_secs: f32,
    /// Seconds a table stays empty after a customer leaves.
    pub table_cooldown_secs: f32,
    /// Pebbles earned for a correct delivery.
    pub payment: i64,
    /// Pebbles added (negative) when a customer leaves unserved.
    pub penalty: i64,
}

impl Default for CustomerParams {
    fn default() -> Self {
        Self {
            wait_secs: 30.0,
            table_cooldown_secs: 5.0,
            payment: 50,
            penalty: -10,
        }
    }
}

// ---------------------------------------------------------------------------
// Player parameters
// ---------------------------------------------------------------------------

/// Tunables for the player avatar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerParams {
    /// Movement speed in world units per second.
    pub move_speed: f32,
    /// Reach for striking vats, picking up food and delivering it.
    pub interact_radius: f32,
}

impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            interact_radius: 5.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level GameParams resource
// ---------------------------------------------------------------------------

/// Central resource holding all data-driven game parameters.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameParams {
    pub session: SessionParams,
    pub bubbles: BubbleParams,
    pub customers: CustomerParams,
    pub player: PlayerParams,
}

impl GameParams {
    /// Parse a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read overrides from the file named by [`PARAMS_ENV_VAR`], falling back
    /// to defaults when the variable is unset or the file is unusable.
    ///
    /// [`PARAMS_ENV_VAR`]: crate::config::PARAMS_ENV_VAR
    pub fn from_env_or_default() -> Self {
        let Ok(path) = std::env::var(crate::config::PARAMS_ENV_VAR) else {
            return Self::default();
        };
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("GameParams: cannot read {}: {}, using defaults", path, e);
                return Self::default();
            }
        };
        match Self::from_json_str(&text) {
            Ok(params) => {
                info!("GameParams: loaded overrides from {}", path);
                params
            }
            Err(e) => {
                warn!("GameParams: invalid JSON in {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct GameParamsPlugin;

impl Plugin for GameParamsPlugin {
    fn build(&self, app: &mut App) {
        // Keep params inserted by the client before the plugin was added.
        app.init_resource::<GameParams>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GameParams::default();

        assert!((params.session.duration_secs - 180.0).abs() < f32::EPSILON);
        assert_eq!(params.session.starting_pebbles, 50);

        assert!((params.bubbles.max_level - 100.0).abs() < f32::EPSILON);
        assert!((params.bubbles.decay_rate - 1.0).abs() < f32::EPSILON);
        assert!((params.bubbles.increase_amount - 20.0).abs() < f32::EPSILON);
        assert!((params.bubbles.ready_threshold - 75.0).abs() < f32::EPSILON);

        assert!((params.customers.wait_secs - 30.0).abs() < f32::EPSILON);
        assert!((params.customers.table_cooldown_secs - 5.0).abs() < f32::EPSILON);
        assert_eq!(params.customers.payment, 50);
        assert_eq!(params.customers.penalty, -10);

        assert!((params.player.interact_radius - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let params =
            GameParams::from_json_str(r#"{ "session": { "duration_secs": 60.0 } }"#).unwrap();
        assert!((params.session.duration_secs - 60.0).abs() < f32::EPSILON);
        assert_eq!(params.session.starting_pebbles, 50);
        assert_eq!(params.customers, CustomerParams::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(GameParams::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut params = GameParams::default();
        params.customers.payment = 75;
        params.bubbles.ready_threshold = 60.0;
        let json = serde_json::to_string(&params).unwrap();
        let decoded = GameParams::from_json_str(&json).unwrap();
        assert_eq!(params, decoded);
    }
}
