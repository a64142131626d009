//! Error types for rules-engine operations.

use thiserror::Error;

use crate::types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("square out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("no piece on {square}")]
    NoPieceAt { square: Square },

    #[error("move {notation} is not legal in the current position")]
    IllegalMove { notation: String },

    #[error("cannot undo: the move log is empty")]
    NothingToUndo,
}

pub type ChessResult<T> = Result<T, ChessError>;
