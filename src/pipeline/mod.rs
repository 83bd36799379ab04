//! Match series between move selectors
//!
//! This module provides:
//! - A single-game driver that applies every move through the board engine
//! - Repeated series with win/draw tallies
//! - Observers for progress reporting

pub mod observers;
pub mod series;

pub use observers::ProgressObserver;
pub use series::{MatchSeries, SeriesResult, play_game};

pub use crate::ports::{MoveSelector, Observer};
