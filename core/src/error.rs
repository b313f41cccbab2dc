use thiserror::Error;

use crate::Difficulty;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board needs at least one row and one column")]
    EmptyBoard,
    #[error("board axes are limited to 255 cells")]
    BoardTooLarge,
    #[error("board needs at least one mine")]
    NoMines,
    #[error("mines must leave at least one safe cell")]
    TooManyMines,
    #[error("cell grid does not match declared size")]
    ShapeMismatch,
    #[error("declared mine count does not match the mine cells")]
    MineCountMismatch,
    #[error("stored counters or status do not match the cells")]
    InconsistentState,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Game already over, no new moves are accepted")]
    GameAlreadyOver,
    #[error("Difficulty preset {0} is not available yet")]
    PresetUnavailable(Difficulty),
    #[error("Unknown difficulty preset")]
    UnknownPreset,
}

pub type Result<T> = core::result::Result<T, GameError>;
