use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many mines, at least one cell must be safe")]
    TooManyMines,
    #[error("Cell index out of range")]
    InvalidIndex,
}

pub type Result<T> = core::result::Result<T, GameError>;
