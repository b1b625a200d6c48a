//! Grid building placement.
//!
//! - `object`: the dragged [`PlaceableObject`] and its rotation-aware footprint
//! - `controller`: the select / rotate / confirm / cancel state machine
//! - `types`: events and resources shared with the client
//! - `systems`: per-frame pointer following, command handling, preview
//! - `plugin`: wiring

mod controller;
mod object;
mod plugin;
mod systems;
mod types;


pub use controller::{
    Placement, PlacementController, PlacementError, PlacementPreview, PlacementState,
};
pub use object::PlaceableObject;
pub use plugin::PlacementPlugin;
pub use systems::{apply_placement_commands, follow_pointer, update_drag_preview};
pub use types::{DragPreview, PlacementCommand, PlacementCommitted, PointerWorldPos};
