//! Move selection by difficulty tier

use rand::{Rng, seq::IndexedRandom};
use tracing::debug;

use super::{difficulty::Difficulty, minimax};
use crate::{
    Error, Result,
    tictactoe::{BoardState, Player},
};

/// Pick a move for the side to move on `board`.
///
/// - Easy: 70% uniform random empty cell, otherwise minimax.
/// - Moderate: win now if possible, else block the opponent's immediate win,
///   else 50% random, otherwise minimax.
/// - Hard: minimax.
///
/// All randomness is drawn from `rng`, so a seeded generator gives
/// reproducible play.
///
/// # Errors
///
/// Returns [`Error::GameOver`] if the board is already won or full.
pub fn select_move<R: Rng + ?Sized>(
    board: &BoardState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize> {
    if board.is_terminal() {
        return Err(Error::GameOver);
    }
    let computer = board.to_move;
    let empty = board.empty_cells();

    let choice = match difficulty {
        Difficulty::Easy => {
            if rng.random_bool(difficulty.random_move_probability()) {
                debug!(%difficulty, "random move");
                random_cell(&empty, rng)?
            } else {
                searched_move(board)?
            }
        }
        Difficulty::Moderate => {
            if let Some(pos) = completing_move(board, computer) {
                debug!(position = pos, "taking win");
                pos
            } else if let Some(pos) = completing_move(board, computer.opponent()) {
                debug!(position = pos, "blocking opponent");
                pos
            } else if rng.random_bool(difficulty.random_move_probability()) {
                debug!(%difficulty, "random move");
                random_cell(&empty, rng)?
            } else {
                searched_move(board)?
            }
        }
        Difficulty::Hard => searched_move(board)?,
    };

    debug!(%difficulty, player = %computer, position = choice, "selected move");
    Ok(choice)
}

/// First empty cell (ascending) where `player`'s mark would win on the spot.
///
/// Only a completed line counts; a move that fills the board without one is
/// not a win.
pub fn completing_move(board: &BoardState, player: Player) -> Option<usize> {
    board.winning_moves_for(player).first().copied()
}

fn random_cell<R: Rng + ?Sized>(empty: &[usize], rng: &mut R) -> Result<usize> {
    empty.choose(rng).copied().ok_or(Error::GameOver)
}

fn searched_move(board: &BoardState) -> Result<usize> {
    minimax::best_move(board).ok_or(Error::GameOver)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::Cell;

    fn board_from(cells: [Cell; 9], to_move: Player) -> BoardState {
        BoardState { cells, to_move }
    }

    #[test]
    fn completing_move_ignores_draw_filling_moves() {
        // XOX
        // XOO
        // OX.   X to move; 8 fills the board without a line
        let board = BoardState::from_string("XOXXOOOX.").unwrap();
        assert_eq!(completing_move(&board, Player::X), None);
        assert_eq!(completing_move(&board, Player::O), None);
    }

    #[test]
    fn completing_move_prefers_lowest_index() {
        // XX.
        // X..
        // ...
        let board = board_from(
            [
                Cell::X,
                Cell::X,
                Cell::Empty,
                Cell::X,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ],
            Player::X,
        );
        assert_eq!(completing_move(&board, Player::X), Some(2));
    }

    #[test]
    fn terminal_board_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = BoardState::from_string("XXXOO....").unwrap();
        assert!(matches!(
            select_move(&board, Difficulty::Hard, &mut rng),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn every_tier_returns_an_empty_cell() {
        let board = BoardState::from_string("X...O....").unwrap();
        for difficulty in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard] {
            let mut rng = StdRng::seed_from_u64(7);
            for _ in 0..20 {
                let pos = select_move(&board, difficulty, &mut rng).unwrap();
                assert!(board.is_empty(pos), "{difficulty} picked occupied {pos}");
            }
        }
    }

    #[test]
    fn single_empty_cell_is_forced() {
        // XOX / XOO / OX.
        let board = BoardState::from_string("XOXXOOOX.").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for difficulty in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard] {
            assert_eq!(select_move(&board, difficulty, &mut rng).unwrap(), 8);
        }
    }
}
