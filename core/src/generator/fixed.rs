use alloc::vec::Vec;

use super::*;

/// Places mines at a predetermined set of indices, every time.
///
/// Indices outside the configured board are dropped with a warning.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mines: Vec<CellIndex>,
}

impl FixedBoardGenerator {
    pub fn new(mines: Vec<CellIndex>) -> Self {
        Self { mines }
    }

    pub fn mines(&self) -> &[CellIndex] {
        &self.mines
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Board {
        let grid = config.grid();
        let in_range = self.mines.iter().copied().filter(|&index| {
            let contained = grid.contains(index);
            if !contained {
                log::warn!("Ignoring mine at {index}, board only has {} cells", grid.total_cells());
            }
            contained
        });
        let board = Board::with_mines(grid, in_range);

        if board.mine_count() != config.mines() {
            log::warn!(
                "Fixed layout count mismatch, actual: {}, configured: {}",
                board.mine_count(),
                config.mines()
            );
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn places_given_mines_every_time() {
        let config = GameConfig::new(2, 3, 2).unwrap();
        let mut generator = FixedBoardGenerator::new(vec![1, 5]);

        for _ in 0..2 {
            let board = generator.generate(config);
            assert!(board[1].is_mine());
            assert!(board[5].is_mine());
            assert_eq!(board.mine_count(), 2);
        }
    }

    #[test]
    fn drops_out_of_range_mines() {
        let config = GameConfig::new(2, 2, 1).unwrap();
        let board = FixedBoardGenerator::new(vec![3, 9]).generate(config);

        assert_eq!(board.mine_count(), 1);
        assert!(board[3].is_mine());
    }
}
