//! Error types for the solver.

use thiserror::Error;

/// A layout string that does not describe a legal board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 16 cells, found {0}")]
    WrongLength(usize),

    #[error("unknown symbol {symbol:?} at cell {index}")]
    UnknownSymbol { symbol: char, index: usize },

    #[error("expected exactly one empty cell, found {0}")]
    EmptyCount(usize),

    /// Invalid cells must sit exactly on the two fixed invalid indices.
    #[error("invalid marker does not match the fixed invalid cells at {0}")]
    MisplacedInvalid(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The frontier ran dry before any board reached the goal.
    #[error("no solution found after exploring {explored} boards")]
    Exhausted { explored: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
