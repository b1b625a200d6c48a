use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CELL_SIZE;
use crate::footprint::{BaseCorners, Footprint, Rotation};

/// Kinds of structure the player can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    Tavern,
    TownHall,
}

impl BuildingKind {
    pub const ALL: [BuildingKind; 2] = [BuildingKind::Tavern, BuildingKind::TownHall];

    pub fn label(self) -> &'static str {
        match self {
            BuildingKind::Tavern => "Tavern",
            BuildingKind::TownHall => "Town Hall",
        }
    }

    /// Number key that selects this building (1-based).
    pub fn hotkey_index(self) -> u8 {
        match self {
            BuildingKind::Tavern => 1,
            BuildingKind::TownHall => 2,
        }
    }

    /// Base (width, depth) in cells when unrotated.
    pub fn base_cells(self) -> (u32, u32) {
        match self {
            BuildingKind::Tavern => (3, 3),
            BuildingKind::TownHall => (5, 3),
        }
    }

    /// Height of the bounding box in world units.
    pub fn height(self) -> f32 {
        match self {
            BuildingKind::Tavern => 2.0,
            BuildingKind::TownHall => 3.0,
        }
    }

    /// Full size of the local bounding box, in world units.
    pub fn bounding_size(self) -> Vec3 {
        let (w, d) = self.base_cells();
        Vec3::new(w as f32 * CELL_SIZE, self.height(), d as f32 * CELL_SIZE)
    }

    /// Base vertices of the bounding box, which sits on the ground and is
    /// centered on the object's position.
    pub fn base_corners(self) -> BaseCorners {
        let size = self.bounding_size();
        BaseCorners::from_box(Vec3::new(0.0, size.y * 0.5, 0.0), size)
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A committed, immovable structure.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBuilding {
    pub kind: BuildingKind,
    pub footprint: Footprint,
    pub rotation: Rotation,
}
