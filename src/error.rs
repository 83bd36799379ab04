//! Error types for the tic-tac-toe engine

use std::fmt;

use thiserror::Error;

use crate::tictactoe::Player;

/// Why a move request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Index outside 0-8
    OutOfBounds,
    /// Target cell already holds a mark
    Occupied,
    /// The requesting side is not the side to move
    WrongTurn { expected: Player },
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "position is out of bounds (must be 0-8)"),
            IllegalMoveReason::Occupied => write!(f, "position is already occupied"),
            IllegalMoveReason::WrongTurn { expected } => {
                write!(f, "it is {expected}'s turn to move")
            }
        }
    }
}

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move at position {position}: {reason}")]
    IllegalMove {
        position: usize,
        reason: IllegalMoveReason,
    },

    #[error("game already over")]
    GameOver,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("player quit")]
    PlayerQuit,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid difficulty '{input}'. Expected one of: easy, moderate, hard")]
    ParseDifficulty { input: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for an [`Error::IllegalMove`]
    pub fn illegal_move(position: usize, reason: IllegalMoveReason) -> Self {
        Error::IllegalMove { position, reason }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
