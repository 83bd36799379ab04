//! Tic-Tac-Toe board engine

pub mod board;
pub mod game;
pub mod lines;

pub use board::{BoardState, Cell, Player};
pub use game::{GameRecord, Move, Outcome};
pub use lines::{Line, LineAnalyzer, WINNING_LINES};
