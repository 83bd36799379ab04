//! Outcomes and game records

use serde::{Deserialize, Serialize};

use super::{
    board::{BoardState, Player},
    lines::Line,
};

/// Status of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player, Line),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player, _) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub board: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Start a record from an empty board
    pub fn new() -> Self {
        GameRecord {
            board: BoardState::new(),
            moves: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Propagates [`BoardState::apply_move`] failures; the record is unchanged.
    pub fn play(&mut self, position: usize) -> crate::Result<Outcome> {
        let player = self.board.to_move;
        self.outcome = self.board.apply_move(position, player)?;
        self.moves.push(Move { position, player });
        Ok(self.outcome)
    }

    /// Positions played, in order
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}
