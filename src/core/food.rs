//! Food module - owns the current food cell
//!
//! A new cell is drawn uniformly from the grid whenever the snake eats. The
//! draw does NOT avoid the snake's body; the food can land on an occupied
//! cell. That matches the original behavior and is kept deliberately.

use crate::core::grid;
use crate::core::rng::SimpleRng;
use crate::types::Cell;

/// The single food item on the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    /// Place the initial food at a random cell.
    pub fn new(rng: &mut SimpleRng) -> Self {
        Self {
            cell: grid::random_cell(rng),
        }
    }

    /// Replace the stored cell with a fresh random one.
    pub fn relocate(&mut self, rng: &mut SimpleRng) {
        self.cell = grid::random_cell(rng);
    }

    /// Current food cell.
    pub fn position(&self) -> Cell {
        self.cell
    }

    #[cfg(test)]
    pub fn set_position(&mut self, cell: Cell) {
        self.cell = cell;
    }
}
