//! Computer-controlled player

use rand::{SeedableRng, rngs::StdRng};

use super::{difficulty::Difficulty, strategy::select_move};
use crate::{Result, ports::MoveSelector, tictactoe::BoardState};

/// Computer opponent at a fixed difficulty, owning its random source.
#[derive(Clone)]
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl std::fmt::Debug for ComputerPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputerPlayer")
            .field("name", &self.name)
            .field("difficulty", &self.difficulty)
            .finish()
    }
}

impl ComputerPlayer {
    /// Create a computer player seeded from the operating system
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            name: format!("Computer ({difficulty})"),
            difficulty,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a computer player with a deterministic seed
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(difficulty)
        }
    }

    /// Create from an optional seed
    pub fn from_seed(difficulty: Difficulty, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(difficulty, seed),
            None => Self::new(difficulty),
        }
    }

    /// Override the display name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl MoveSelector for ComputerPlayer {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        select_move(state, self.difficulty, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_moves() {
        let board = BoardState::new();
        let mut a = ComputerPlayer::with_seed(Difficulty::Easy, 42);
        let mut b = ComputerPlayer::with_seed(Difficulty::Easy, 42);

        let first: Vec<usize> = (0..16).map(|_| a.select_move(&board).unwrap()).collect();
        let second: Vec<usize> = (0..16).map(|_| b.select_move(&board).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn name_reflects_difficulty() {
        let player = ComputerPlayer::with_seed(Difficulty::Moderate, 0);
        assert_eq!(player.name(), "Computer (moderate)");
        assert_eq!(player.named("AI").name(), "AI");
    }
}
