//! Tic-Tac-Toe engine with a difficulty-tiered computer opponent
//!
//! This crate provides:
//! - A board engine: move legality, turn order, win/draw detection
//! - A computer opponent with easy, moderate and hard (minimax) tiers
//! - A session record with score tally for front ends
//! - A match driver for computer-vs-computer series
//! - A terminal front end (`tictactoe` binary)

pub mod ai;
pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod tictactoe;

pub use ai::{ComputerPlayer, Difficulty, select_move};
pub use error::{Error, IllegalMoveReason, Result};
pub use session::{GameMode, Scoreboard, Session};
pub use tictactoe::{BoardState, Cell, Line, Outcome, Player};
