use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One player's private grid of cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default(BOARD_SIZE.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Callers must have validated `coords` already.
    pub(crate) fn set_cell(&mut self, coords: Coord2, cell: Cell) {
        self.cells[coords.to_nd_index()] = cell;
    }

    /// Whether any chest cell is still waiting to be dug.
    pub fn has_remaining_chests(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_undug_chest())
    }

    /// Win condition for whoever digs on this board.
    pub fn is_fully_found(&self) -> bool {
        !self.has_remaining_chests()
    }

    /// Number of undug cells belonging to `chest`.
    pub fn remaining_pieces(&self, chest: ChestType) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Chest(chest))
            .count() as CellCount
    }

    /// Row-major iterator over every cell along with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.size(), BOARD_SIZE);
        assert!(board.cells().all(|(_, cell)| cell == Cell::Empty));
        assert!(!board.has_remaining_chests());
        assert!(board.is_fully_found());
    }

    #[test]
    fn cell_at_checks_bounds() {
        let board = Board::new();

        assert_eq!(board.cell_at((9, 9)), Ok(Cell::Empty));
        assert_eq!(board.cell_at((10, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.cell_at((0, 10)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn remaining_chests_tracks_undug_cells_only() {
        let mut board = Board::new();
        board.set_cell((3, 4), Cell::Chest(ChestType::Rubies));
        board.set_cell((3, 5), Cell::DugChest(ChestType::Rubies));
        board.set_cell((0, 0), Cell::Dug);

        assert!(board.has_remaining_chests());
        assert_eq!(board.remaining_pieces(ChestType::Rubies), 1);

        board.set_cell((3, 4), Cell::DugChest(ChestType::Rubies));
        assert!(!board.has_remaining_chests());
        assert_eq!(board.remaining_pieces(ChestType::Rubies), 0);
    }

    #[test]
    fn cells_iterate_row_major() {
        let mut board = Board::new();
        board.set_cell((0, 1), Cell::Dug);

        let mut iter = board.cells();
        assert_eq!(iter.next(), Some(((0, 0), Cell::Empty)));
        assert_eq!(iter.next(), Some(((0, 1), Cell::Dug)));
        assert_eq!(board.rows().count(), 10);
    }
}
