//! Cells permanently claimed by committed placements.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::grid::CellCoord;

/// Set of occupied cells.
///
/// A cell is present iff some committed placement covers it. The map only
/// grows: there is no demolition, so a committed cell stays occupied for the
/// rest of the session.
#[derive(Resource, Debug, Default, Clone)]
pub struct OccupancyMap {
    cells: HashSet<CellCoord>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.cells.contains(&cell)
    }

    /// True iff none of `cells` is occupied. Every candidate cell is checked;
    /// a single occupied cell fails the whole set.
    pub fn is_free(&self, cells: &[CellCoord]) -> bool {
        cells.iter().all(|c| !self.cells.contains(c))
    }

    /// The occupied subset of `cells`, in input order.
    pub fn blocked(&self, cells: &[CellCoord]) -> Vec<CellCoord> {
        cells
            .iter()
            .copied()
            .filter(|c| self.cells.contains(c))
            .collect()
    }

    /// Mark every cell in `cells` occupied.
    ///
    /// The caller must have checked [`OccupancyMap::is_free`] for the same set
    /// earlier in the same tick. Returns how many cells were newly claimed.
    pub fn commit(&mut self, cells: &[CellCoord]) -> usize {
        let before = self.cells.len();
        self.cells.extend(cells.iter().copied());
        self.cells.len() - before
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().copied()
    }
}
