use serde::{Deserialize, Serialize};

/// Per-position record of the board.
///
/// `adjacent_mines` is filled in once when the board is built and never changes afterwards; the
/// reveal and flag bits are the only state mutated during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn revealed(self) -> bool {
        self.revealed
    }

    pub const fn flagged(self) -> bool {
        self.flagged
    }

    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// Contribution of this cell to its neighbors' adjacency counts.
    pub const fn int_value(self) -> u8 {
        if self.is_mine { 1 } else { 0 }
    }

    /// Neither revealed nor flagged.
    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Eligible for flood reveal: a hidden, unflagged safe cell with no adjacent mines.
    pub const fn is_open(self) -> bool {
        !self.is_mine && self.adjacent_mines == 0 && self.is_hidden()
    }

    pub(crate) fn set_mine(&mut self) {
        self.is_mine = true;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }

    /// How the cell should be drawn; `game_lost` exposes every mine and wrong flag.
    pub const fn view(self, game_lost: bool) -> CellView {
        match (self.revealed, self.flagged, self.is_mine) {
            (true, _, true) => CellView::Mine,
            (true, _, false) if self.adjacent_mines == 0 => CellView::Empty,
            (true, _, false) => CellView::Count(self.adjacent_mines),
            (false, true, false) if game_lost => CellView::WrongFlag,
            (false, true, _) => CellView::Flagged,
            (false, false, true) if game_lost => CellView::Mine,
            (false, false, _) => CellView::Hidden,
        }
    }
}

/// Player-visible rendering of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Empty,
    Count(u8),
    Mine,
    /// The mine whose reveal lost the game.
    Detonated,
    // only shown after a loss:
    WrongFlag,
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        use CellView::*;
        match self {
            Hidden => true,
            Flagged => true,
            Empty => false,
            Count(_) => false,
            Mine => false,
            Detonated => false,
            WrongFlag => true,
        }
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
