use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniformly random mine placement driven by a seeded generator, so a seed always replays the
/// same sequence of boards.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, config: GameConfig) -> Board {
        let total_cells = CellIndex::from(config.total_cells());
        let mines = CellIndex::from(config.mines());

        // distinct by construction, no rejection loop even for nearly full boards
        let picks = rand::seq::index::sample(&mut self.rng, total_cells, mines);
        let board = Board::with_mines(config.grid(), picks);

        // double check mine count
        if board.mine_count() != config.mines() {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines()
            );
        }
        board
    }
}
