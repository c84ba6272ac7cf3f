use crate::*;

/// Number of mines among the in-bounds neighbors of `index`.
///
/// Orthogonal and diagonal neighbors weigh the same; the cell itself is not counted.
pub fn count_adjacent_mines(board: &Board, index: CellIndex) -> u8 {
    board
        .neighbors(index)
        .map(|neighbor| board[neighbor].int_value())
        .sum()
}

/// Fills in the adjacency count of every cell, mines included.
///
/// Runs once per board, right after mine placement.
pub(crate) fn annotate(board: &mut Board) {
    for index in 0..CellIndex::from(board.total_cells()) {
        let count = count_adjacent_mines(board, index);
        board[index].set_adjacent_mines(count);
    }
}
