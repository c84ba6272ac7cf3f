use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells of a single game plus the geometry that defines their neighborhoods.
///
/// Cells are stored row-major, so the flat index `row * cols + col` addresses the same cell as
/// the `(row, col)` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds an annotated board with mines at the given indices.
    ///
    /// Duplicate indices are placed once. Fails with [`GameError::InvalidIndex`] if any index is
    /// out of range, or [`GameError::TooManyMines`] if no safe cell would remain.
    pub fn from_mine_indices(grid: Grid, mines: &[CellIndex]) -> Result<Self> {
        if grid.rows() == 0 || grid.cols() == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines.iter().any(|&index| !grid.contains(index)) {
            return Err(GameError::InvalidIndex);
        }

        let board = Self::with_mines(grid, mines.iter().copied());
        if board.mine_count >= grid.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    /// Places mines, skipping indices out of range, then runs the adjacency pass.
    pub(crate) fn with_mines(grid: Grid, mines: impl IntoIterator<Item = CellIndex>) -> Self {
        let mut board = Self {
            grid,
            cells: Array2::default(grid.size().to_nd_index()),
            mine_count: 0,
        };

        for index in mines {
            if !grid.contains(index) {
                continue;
            }
            let cell = &mut board[index];
            if !cell.is_mine() {
                cell.set_mine();
                board.mine_count += 1;
            }
        }

        crate::adjacency::annotate(&mut board);
        board
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if self.grid.contains(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn get(&self, index: CellIndex) -> Option<&Cell> {
        self.grid
            .contains(index)
            .then(|| &self.cells[self.grid.coords_of(index).to_nd_index()])
    }

    /// Cells paired with their flat index, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, &Cell)> {
        self.cells.iter().enumerate()
    }

    pub fn neighbors(&self, index: CellIndex) -> NeighborIter {
        self.grid.neighbors(index)
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(index, _)| index)
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[self.grid.coords_of(index).to_nd_index()]
    }
}

impl IndexMut<CellIndex> for Board {
    fn index_mut(&mut self, index: CellIndex) -> &mut Self::Output {
        &mut self.cells[self.grid.coords_of(index).to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn fresh_board_is_hidden() {
        let board = Board::from_mine_indices(Grid::new(3, 4), &[0, 5, 11]).unwrap();

        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.mine_count(), 3);
        assert_eq!(board.safe_cells(), 9);
        for (_, cell) in board.iter() {
            assert!(!cell.revealed());
            assert!(!cell.flagged());
        }
        assert_eq!(board.mine_indices().collect::<Vec<_>>(), [0, 5, 11]);
    }

    #[test]
    fn duplicate_mines_are_placed_once() {
        let board = Board::from_mine_indices(Grid::new(2, 2), &[1, 1, 2]).unwrap();

        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn rejects_bad_layouts() {
        assert_eq!(
            Board::from_mine_indices(Grid::new(2, 2), &[4]),
            Err(GameError::InvalidIndex)
        );
        assert_eq!(
            Board::from_mine_indices(Grid::new(1, 2), &[0, 1]),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            Board::from_mine_indices(Grid::new(0, 3), &[]),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let board = Board::from_mine_indices(Grid::new(2, 3), &[]).unwrap();

        assert!(board.get(5).is_some());
        assert!(board.get(6).is_none());
        assert_eq!(board.validate_index(6), Err(GameError::InvalidIndex));
    }

    #[test]
    fn iteration_order_matches_flat_index() {
        let board = Board::from_mine_indices(Grid::new(3, 2), &[3]).unwrap();

        assert!(board[3].is_mine());
        assert_eq!(board.grid().coords_of(3), (1, 1));
        let (index, cell) = board.iter().nth(3).unwrap();
        assert_eq!(index, 3);
        assert!(cell.is_mine());
    }
}
