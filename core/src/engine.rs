use alloc::collections::VecDeque;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both end states are final until the next [`Game::play`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One game session: the current board, its state, and the externally ticked clock.
///
/// The engine is synchronous and keeps no internal locking; callers serialize access.
#[derive(Clone, Debug)]
pub struct Game<G = RandomBoardGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    state: GameState,
    elapsed_seconds: u32,
    flags_placed: CellCount,
    detonated: Option<CellIndex>,
}

impl Game {
    /// Starts a game with randomly placed mines, seeded for reproducibility.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomBoardGenerator::new(seed))
    }
}

impl Game<FixedBoardGenerator> {
    /// Starts a game with mines at exactly the given indices; replays reuse the same layout.
    pub fn with_mines(rows: Coord, cols: Coord, mines: &[CellIndex]) -> Result<Self> {
        let board = Board::from_mine_indices(Grid::new(rows, cols), mines)?;
        let config = GameConfig::new(rows, cols, board.mine_count())?;
        let mines = board.mine_indices().collect();
        Ok(Self::with_generator(config, FixedBoardGenerator::new(mines)))
    }
}

impl<G: BoardGenerator> Game<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Self {
        let board = generator.generate(config);
        Self {
            config,
            generator,
            board,
            state: GameState::default(),
            elapsed_seconds: 0,
            flags_placed: 0,
            detonated: None,
        }
    }

    /// Discards the current board and deals a new one for the current configuration.
    pub fn play(&mut self) {
        self.board = self.generator.generate(self.config);
        self.state = GameState::InProgress;
        self.elapsed_seconds = 0;
        self.flags_placed = 0;
        self.detonated = None;
        log::debug!(
            "New game {}x{} with {} mines",
            self.config.rows(),
            self.config.cols(),
            self.board.mine_count()
        );
    }

    /// Switches to another configuration and starts over.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
        self.play();
    }

    /// Reveals a single cell and re-evaluates the game state.
    ///
    /// Revealed or flagged cells, and any cell once the game has finished, are left untouched.
    pub fn reveal(&mut self, index: CellIndex) -> Result<GameState> {
        let index = self.board.validate_index(index)?;

        if self.state.is_finished() || !self.board[index].is_hidden() {
            return Ok(self.state);
        }

        self.board[index].reveal();
        if self.board[index].is_mine() {
            log::debug!("Mine hit at {index}");
            self.detonated = Some(index);
            self.state = GameState::Lost;
        } else {
            log::debug!(
                "Revealed {index}, adjacent mines: {}",
                self.board[index].adjacent_mines()
            );
            self.evaluate();
        }
        Ok(self.state)
    }

    /// Breadth-first reveal of the zero-count region around `index`.
    ///
    /// `index` must be a safe, unflagged cell without adjacent mines; it may already be revealed.
    /// Nonzero safe cells bordering the region are revealed but not expanded. Returns the newly
    /// revealed indices in visiting order, starting with `index`, or nothing if the start cell
    /// does not qualify.
    pub fn flood_reveal(&mut self, index: CellIndex) -> Result<Vec<CellIndex>> {
        let index = self.board.validate_index(index)?;

        let start = self.board[index];
        if self.state.is_finished()
            || start.is_mine()
            || start.flagged()
            || start.adjacent_mines() != 0
        {
            return Ok(Vec::new());
        }

        self.board[index].reveal();
        let mut revealed = Vec::from([index]);
        let mut to_visit = VecDeque::from([index]);
        log::trace!("Starting flood-fill from {index}");

        while let Some(visit_index) = to_visit.pop_front() {
            for neighbor in self.board.neighbors(visit_index) {
                let cell = self.board[neighbor];
                if !cell.is_hidden() || cell.is_mine() {
                    continue;
                }

                // marked before queueing so no index is visited twice
                self.board[neighbor].reveal();
                revealed.push(neighbor);
                log::trace!(
                    "Flood revealed {neighbor}, adjacent mines: {}",
                    cell.adjacent_mines()
                );

                if cell.adjacent_mines() == 0 {
                    to_visit.push_back(neighbor);
                }
            }
        }

        self.evaluate();
        Ok(revealed)
    }

    /// Reveals a cell and, when it has no adjacent mines, the region around it.
    pub fn open(&mut self, index: CellIndex) -> Result<OpenOutcome> {
        let index = self.board.validate_index(index)?;

        if self.state.is_finished() || !self.board[index].is_hidden() {
            return Ok(OpenOutcome::unchanged(self.state));
        }

        self.reveal(index)?;
        let mut revealed = self.flood_reveal(index)?;
        if revealed.is_empty() {
            revealed.push(index);
        }
        Ok(OpenOutcome {
            state: self.state,
            revealed,
        })
    }

    /// Flags or unflags a hidden cell. Has no effect on the game state.
    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        let index = self.board.validate_index(index)?;

        if self.state.is_finished() || self.board[index].revealed() {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.board[index];
        cell.toggle_flag();
        if cell.flagged() {
            self.flags_placed += 1;
        } else {
            self.flags_placed -= 1;
        }
        Ok(MarkOutcome::Changed)
    }

    /// Advances the elapsed-time counter by one second.
    pub fn tick_elapsed_seconds(&mut self) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.board.get(index).copied()
    }

    pub fn cell_view(&self, index: CellIndex) -> Option<CellView> {
        let cell = self.board.get(index)?;
        if self.detonated == Some(index) {
            return Some(CellView::Detonated);
        }
        Some(cell.view(matches!(self.state, GameState::Lost)))
    }

    pub fn total_cells(&self) -> CellCount {
        self.board.total_cells()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed
    }

    /// Mines not yet accounted for by a flag; negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flags_placed as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn detonated(&self) -> Option<CellIndex> {
        self.detonated
    }

    /// Mines that are still hidden.
    pub fn hidden_mines(&self) -> CellCount {
        self.tally().0
    }

    pub fn safe_revealed(&self) -> CellCount {
        self.tally().1
    }

    fn tally(&self) -> (CellCount, CellCount) {
        let mut hidden_mines = 0;
        let mut safe_revealed = 0;
        for (_, cell) in self.board.iter() {
            match (cell.is_mine(), cell.revealed()) {
                (true, false) => hidden_mines += 1,
                (false, true) => safe_revealed += 1,
                _ => {}
            }
        }
        (hidden_mines, safe_revealed)
    }

    fn evaluate(&mut self) {
        if self.state.is_finished() {
            return;
        }

        let (hidden_mines, safe_revealed) = self.tally();
        if safe_revealed == self.board.safe_cells() && hidden_mines == self.board.mine_count() {
            log::debug!("All {safe_revealed} safe cells revealed, game won");
            self.state = GameState::Won;
        }
    }
}
