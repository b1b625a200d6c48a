//! Session-wide switches for behaviours whose collaborators are missing.
//!
//! A behaviour that finds a required resource, entity or window absent logs
//! once and turns itself off for the rest of the session; the rest of the game
//! keeps running.

use std::collections::HashMap;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Pointer,
    Camera,
    PlayerActions,
    PlayerMovement,
    CustomerTables,
    Hud,
}

#[derive(Resource, Debug, Default)]
pub struct DisabledFeatures {
    disabled: HashMap<Feature, String>,
}

impl DisabledFeatures {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        !self.disabled.contains_key(&feature)
    }

    /// Turn `feature` off. Logs and returns true only the first time.
    pub fn disable(&mut self, feature: Feature, reason: impl Into<String>) -> bool {
        if self.disabled.contains_key(&feature) {
            return false;
        }
        let reason = reason.into();
        error!("{:?} disabled for this session: {}", feature, reason);
        self.disabled.insert(feature, reason);
        true
    }

    pub fn reason(&self, feature: Feature) -> Option<&str> {
        self.disabled.get(&feature).map(String::as_str)
    }
}

/// Run condition: true unless `feature` has been disabled.
pub fn feature_enabled(
    feature: Feature,
) -> impl FnMut(Option<Res<DisabledFeatures>>) -> bool + Clone {
    move |disabled: Option<Res<DisabledFeatures>>| {
        disabled.is_none_or(|d| d.is_enabled(feature))
    }
}
