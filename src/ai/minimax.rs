//! Exhaustive minimax search
//!
//! Scores are from the perspective of the side to move at the root (the
//! computer). A computer win scores `10 - depth`, an opponent win
//! `depth - 10`, and a draw `0`, so faster wins and slower losses rank higher.
//! The full tree is at most 9! leaves, small enough to search without pruning.

use tracing::trace;

use crate::tictactoe::{BoardState, Outcome, Player};

/// Score of a win at depth zero
pub const WIN_SCORE: i32 = 10;

/// Score every empty cell as a first move for the side to move.
///
/// Returns `(position, score)` pairs in ascending position order. The board
/// is not modified; each branch searches a private copy.
pub fn score_moves(board: &BoardState) -> Vec<(usize, i32)> {
    let computer = board.to_move;
    board
        .empty_cells()
        .into_iter()
        .map(|pos| {
            let child = board.with_mark(pos, computer);
            (pos, minimax(&child, computer, 0, false))
        })
        .collect()
}

/// Best move for the side to move, or `None` on a full board.
///
/// Ties go to the lowest index: a later move must score strictly higher to
/// replace the current best.
pub fn best_move(board: &BoardState) -> Option<usize> {
    let scores = score_moves(board);
    trace!(?scores, "root scores");

    let mut best: Option<(usize, i32)> = None;
    for (pos, score) in scores {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

fn minimax(board: &BoardState, computer: Player, depth: i32, maximizing: bool) -> i32 {
    match board.evaluate() {
        Outcome::Win(winner, _) if winner == computer => return WIN_SCORE - depth,
        Outcome::Win(..) => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing {
        computer
    } else {
        computer.opponent()
    };
    let children = board
        .empty_cells()
        .into_iter()
        .map(|pos| minimax(&board.with_mark(pos, mover), computer, depth + 1, !maximizing));

    if maximizing {
        children.max().unwrap_or(0)
    } else {
        children.min().unwrap_or(0)
    }
}
