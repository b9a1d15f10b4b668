use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-facing view of the grid, built up one reveal at a time. Always the
/// same shape as the [`Minefield`] it is played against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    cells: Array2<CellView>,
}

impl BoardView {
    /// A fresh board with every cell still hidden.
    pub fn hidden(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_index()]
    }

    pub fn hidden_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_hidden())
            .count()
            .try_into()
            .unwrap()
    }

    /// Full clear: every cell is showing something.
    pub fn is_cleared(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Reveals one cell against `field`, returning whether it was a mine.
    /// Revealing a zero-count cell opens only that cell; there is no
    /// flood-fill. Fails on out-of-bounds or already-revealed targets
    /// without touching the board.
    pub fn reveal(&mut self, field: &Minefield, coords: Coord2) -> Result<bool> {
        debug_assert_eq!(self.size(), field.size());

        let coords = field.validate_coords(coords)?;
        if self.cell_at(coords).is_revealed() {
            return Err(GameError::AlreadyRevealed);
        }

        Ok(if field.contains_mine(coords) {
            self.cells[coords.to_index()] = CellView::Mine;
            true
        } else {
            let count = field.adjacent_mine_count(coords);
            self.cells[coords.to_index()] = CellView::Count(count);
            false
        })
    }

    /// Forces every mine position to show as a mine, leaving all other cells
    /// untouched. Used for the final display once a game is over.
    pub fn mark_all_mines(&mut self, field: &Minefield) {
        debug_assert_eq!(self.size(), field.size());

        for coords in field.iter_mine_coords() {
            self.cells[coords.to_index()] = CellView::Mine;
        }
    }
}
