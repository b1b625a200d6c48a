//! Deterministic per-frame ordering via `SystemSet` phases.
//!
//! All gameplay runs in `Update`, advanced by the frame's `Time` delta:
//!
//! ```text
//! Input  →  Simulation  →  PostSim
//! ```
//!
//! * **Input** – Edge-triggered commands from the client: placement
//!   (select / rotate / confirm / cancel) and player actions.
//! * **Simulation** – Countdowns and rules: session clock, vat decay and
//!   strikes, customer patience, deliveries.
//! * **PostSim** – Reactions that only read the frame's results (game-over
//!   handling, logging).

use bevy::prelude::*;

/// Ordered phases for gameplay systems in the `Update` schedule.
///
/// Configured as a chain: `Input` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Client commands: placement and player actions.
    Input,
    /// Timers and gameplay rules.
    Simulation,
    /// Read-only follow-up of the frame's results.
    PostSim,
}
