//! Best-move command - analyze a single position

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    ai::{Difficulty, score_moves, select_move},
    cli::output::{print_kv, print_section, render_board},
    tictactoe::{BoardState, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Show minimax scores and the chosen move for a board")]
pub struct BestMoveArgs {
    /// Board as 9 cells, row-major: X, O and . for empty (e.g. "X...O....")
    pub board: String,

    /// Tier used to pick the move
    #[arg(long, short = 'd', default_value = "hard")]
    pub difficulty: Difficulty,

    /// Random seed for the easy and moderate tiers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

/// Analysis of one position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub board: String,
    pub outcome: Outcome,
    /// `(position, score)` for the side to move; empty when terminal
    pub scores: Vec<(usize, i32)>,
    pub selected: Option<usize>,
}

/// Score the position and pick a move at `difficulty`.
pub fn analyze(board: &BoardState, difficulty: Difficulty, seed: Option<u64>) -> Result<Analysis> {
    let outcome = board.evaluate();
    if outcome.is_terminal() {
        return Ok(Analysis {
            board: board.encode(),
            outcome,
            scores: Vec::new(),
            selected: None,
        });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let selected = select_move(board, difficulty, &mut rng)?;

    Ok(Analysis {
        board: board.encode(),
        outcome,
        scores: score_moves(board),
        selected: Some(selected),
    })
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = BoardState::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let analysis = analyze(&board, args.difficulty, args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Position");
    println!("{}", render_board(&board, analysis.outcome));

    match analysis.outcome {
        Outcome::Win(player, line) => print_kv("Result", &format!("{player} won on {line}")),
        Outcome::Draw => print_kv("Result", "draw"),
        Outcome::InProgress => {
            print_kv("To move", &board.to_move.to_string());
            print_section("Minimax scores");
            for (pos, score) in &analysis.scores {
                print_kv(&format!("Cell {}", pos + 1), &score.to_string());
            }
            if let Some(pos) = analysis.selected {
                print_kv(
                    &format!("Selected ({})", args.difficulty),
                    &format!("cell {} (index {pos})", pos + 1),
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_board_has_no_selection() {
        let board = BoardState::from_string("XXXOO....").unwrap();
        let analysis = analyze(&board, Difficulty::Hard, None).unwrap();
        assert!(analysis.outcome.is_terminal());
        assert!(analysis.scores.is_empty());
        assert_eq!(analysis.selected, None);
    }

    #[test]
    fn hard_selection_matches_best_score() {
        let board = BoardState::from_string("XX.OO....").unwrap();
        let analysis = analyze(&board, Difficulty::Hard, Some(0)).unwrap();
        assert_eq!(analysis.selected, Some(2));
        assert_eq!(analysis.scores.len(), 5);
    }
}
