//! Game session: mode, live board and score tally
//!
//! The session is the caller-owned "current game" record. It enforces turn
//! order between the human and the computer, counts each finished round once,
//! and keeps scores across round resets and mode changes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ai::{ComputerPlayer, Difficulty},
    app::SessionConfig,
    error::IllegalMoveReason,
    ports::MoveSelector,
    tictactoe::{BoardState, Outcome, Player},
};

/// The side the computer plays in [`GameMode::PlayerVsComputer`]
pub const COMPUTER_SIDE: Player = Player::O;

/// Who is seated at O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board
    PlayerVsPlayer,
    /// The human plays X, the computer plays O
    PlayerVsComputer { difficulty: Difficulty },
}

impl GameMode {
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer { difficulty } => Some(difficulty),
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PlayerVsComputer {
            difficulty: Difficulty::default(),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "player vs player"),
            GameMode::PlayerVsComputer { difficulty } => {
                write!(f, "player vs computer ({difficulty})")
            }
        }
    }
}

/// Running tally of finished rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Scoreboard {
    /// Count a terminal outcome. `InProgress` is ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X, _) => self.x_wins += 1,
            Outcome::Win(Player::O, _) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn rounds(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// A sequence of rounds under one mode
#[derive(Debug)]
pub struct Session {
    mode: GameMode,
    board: BoardState,
    outcome: Outcome,
    scores: Scoreboard,
    computer: Option<ComputerPlayer>,
    seed: Option<u64>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            mode: config.mode,
            board: BoardState::new(),
            outcome: Outcome::InProgress,
            scores: Scoreboard::default(),
            computer: Self::seat_computer(config.mode, config.seed),
            seed: config.seed,
        }
    }

    fn seat_computer(mode: GameMode, seed: Option<u64>) -> Option<ComputerPlayer> {
        mode.difficulty()
            .map(|difficulty| ComputerPlayer::from_seed(difficulty, seed).named("AI"))
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// True when the round is live and the computer is to move
    pub fn is_computer_turn(&self) -> bool {
        self.computer.is_some() && !self.outcome.is_terminal() && self.board.to_move == COMPUTER_SIDE
    }

    /// Apply a human move for the side to move.
    ///
    /// # Errors
    ///
    /// - [`Error::IllegalMove`] with [`IllegalMoveReason::WrongTurn`] when the
    ///   computer is to move
    /// - any [`BoardState::apply_move`] error
    pub fn play(&mut self, position: usize) -> Result<Outcome> {
        if self.is_computer_turn() {
            return Err(Error::illegal_move(
                position,
                IllegalMoveReason::WrongTurn {
                    expected: COMPUTER_SIDE,
                },
            ));
        }
        let player = self.board.to_move;
        let outcome = self.board.apply_move(position, player)?;
        debug!(%player, position, "human move");
        self.finish_move(outcome);
        Ok(outcome)
    }

    /// Let the computer choose and apply its move.
    ///
    /// Returns the chosen position and the resulting outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotComputerTurn`] in player-vs-player mode, when X is
    /// to move, or after the round has ended.
    pub fn computer_turn(&mut self) -> Result<(usize, Outcome)> {
        if !self.is_computer_turn() {
            return Err(Error::NotComputerTurn);
        }
        let computer = self.computer.as_mut().ok_or(Error::NotComputerTurn)?;
        let position = computer.select_move(&self.board)?;
        let outcome = self.board.apply_move(position, COMPUTER_SIDE)?;
        debug!(position, difficulty = ?self.mode.difficulty(), "computer move");
        self.finish_move(outcome);
        Ok((position, outcome))
    }

    fn finish_move(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        if outcome.is_terminal() {
            self.scores.record(outcome);
            info!(?outcome, scores = %self.scores, "round finished");
        }
    }

    /// Fresh board, X to move. Scores are kept.
    pub fn reset_round(&mut self) {
        self.board.reset();
        self.outcome = Outcome::InProgress;
    }

    /// Zero the tally.
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }

    /// Switch mode and start a fresh round. Scores are kept.
    pub fn change_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.computer = Self::seat_computer(mode, self.seed);
        self.reset_round();
    }

    /// Whether `player` is the computer in this session
    pub fn is_computer(&self, player: Player) -> bool {
        self.computer.is_some() && player == COMPUTER_SIDE
    }

    fn display_name(&self, player: Player) -> String {
        if self.is_computer(player) {
            "AI".to_string()
        } else {
            format!("Player {player}")
        }
    }

    /// One-line description of whose turn it is or how the round ended
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Win(player, _) => format!("{} Wins!", self.display_name(player)),
            Outcome::Draw => "It's a Draw!".to_string(),
            Outcome::InProgress => match self.mode {
                GameMode::PlayerVsComputer { difficulty } if self.is_computer_turn() => {
                    format!("AI is thinking... ({difficulty})")
                }
                _ => format!("Player {}'s Turn", self.board.to_move),
            },
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
