//! Computer opponent
//!
//! This module provides:
//! - Difficulty tiers (easy, moderate, hard)
//! - Exhaustive minimax search
//! - Tiered move selection with an injectable random source
//! - A seedable computer player

pub mod difficulty;
pub mod minimax;
pub mod player;
pub mod strategy;

pub use difficulty::Difficulty;
pub use minimax::{best_move, score_moves};
pub use player::ComputerPlayer;
pub use strategy::{completing_move, select_move};
