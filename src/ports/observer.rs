//! Observer port - watching a series of games
//!
//! The methods are called in this order:
//! 1. `on_series_start(total_games)` once
//! 2. `on_move(game_num, state, position)` for each move, then
//!    `on_game_end(game_num, outcome)` once per game
//! 3. `on_series_end()` once

use crate::{
    Result,
    tictactoe::{BoardState, Outcome},
};

/// Observer for match series. Every method defaults to a no-op.
pub trait Observer {
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called before `position` is applied to `state`.
    fn on_move(&mut self, _game_num: usize, _state: &BoardState, _position: usize) -> Result<()> {
        Ok(())
    }

    /// Called with the terminal outcome of a finished game. `game_num` counts from 1.
    fn on_game_end(&mut self, _game_num: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
