//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{
    game::Outcome,
    lines::LineAnalyzer,
};
use crate::error::{Error, IllegalMoveReason, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Complete board state including cells and whose turn it is
///
/// `Copy` is cheap here (9 cells plus the side to move), which lets search code
/// branch on private copies without touching the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Clear the board for a new round
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order;
    /// whitespace is filtered out. The player to move is inferred from the
    /// piece counts.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are not equal or X ahead by one
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        let to_move = if count.x == count.o {
            Player::X
        } else if count.x == count.o + 1 {
            Player::O
        } else {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        };

        Ok(BoardState { cells, to_move })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// All empty positions in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `player`'s mark at `pos` and hand the turn to the opponent.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] if the board is already won or full
    /// - [`Error::IllegalMove`] if `pos` is off the board, occupied, or
    ///   `player` is not the side to move
    pub fn apply_move(&mut self, pos: usize, player: Player) -> Result<Outcome> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if pos >= 9 {
            return Err(Error::illegal_move(pos, IllegalMoveReason::OutOfBounds));
        }
        if !self.is_empty(pos) {
            return Err(Error::illegal_move(pos, IllegalMoveReason::Occupied));
        }
        if player != self.to_move {
            return Err(Error::illegal_move(
                pos,
                IllegalMoveReason::WrongTurn {
                    expected: self.to_move,
                },
            ));
        }

        self.cells[pos] = player.to_cell();
        self.to_move = player.opponent();
        let outcome = self.evaluate();
        trace!(position = pos, %player, ?outcome, "move applied");
        Ok(outcome)
    }

    /// Copy of the board with `player`'s mark at `pos`, without legality checks.
    ///
    /// Used by search code on positions it has already checked are empty.
    pub(crate) fn with_mark(&self, pos: usize, player: Player) -> BoardState {
        let mut next = *self;
        next.cells[pos] = player.to_cell();
        next.to_move = player.opponent();
        next
    }

    /// Classify the position: a completed line wins, a full board draws.
    pub fn evaluate(&self) -> Outcome {
        if let Some((player, line)) = LineAnalyzer::completed_line(&self.cells) {
            Outcome::Win(player, line)
        } else if !self.cells.contains(&Cell::Empty) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.evaluate().is_terminal()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.evaluate().winner()
    }

    /// Empty cells where `player` would complete a line
    pub fn winning_moves_for(&self, player: Player) -> Vec<usize> {
        LineAnalyzer::winning_moves(&self.cells, player)
    }

    /// Compact encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Line;

    fn play_all(moves: &[usize]) -> BoardState {
        let mut board = BoardState::new();
        for &pos in moves {
            let player = board.to_move;
            board.apply_move(pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.to_move, Player::X);
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.evaluate(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move() {
        let mut board = BoardState::new();

        let outcome = board.apply_move(4, Player::X).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
        assert_eq!(board.cells[4], Cell::X);
        assert_eq!(board.to_move, Player::O);

        let err = board.apply_move(4, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut board = BoardState::new();
        let err = board.apply_move(9, Player::X).unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalMove {
                position: 9,
                reason: IllegalMoveReason::OutOfBounds
            }
        ));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_apply_move_rejects_wrong_side() {
        let mut board = BoardState::new();
        let err = board.apply_move(0, Player::O).unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalMove {
                reason: IllegalMoveReason::WrongTurn {
                    expected: Player::X
                },
                ..
            }
        ));
        assert!(board.is_empty(0));
    }

    #[test]
    fn test_apply_move_after_win_is_game_over() {
        let mut board = play_all(&[0, 3, 1, 4, 2]);
        assert_eq!(board.winner(), Some(Player::X));
        assert!(matches!(
            board.apply_move(5, Player::O),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_empty_cells() {
        let mut board = BoardState::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());

        board.apply_move(4, Player::X).unwrap();
        board.apply_move(0, Player::O).unwrap();
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_win_detection_vertical() {
        // O wins on middle column (1, 4, 7)
        let board = play_all(&[0, 1, 2, 4, 5, 7]);
        assert_eq!(
            board.evaluate(),
            Outcome::Win(Player::O, Line::all().nth(4).unwrap())
        );
    }

    #[test]
    fn test_draw_detection() {
        let board = play_all(&[0, 1, 2, 4, 3, 6, 5, 8, 7]);
        assert_eq!(board.evaluate(), Outcome::Draw);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        // XOX / OXO / OXX : X completes the main diagonal on the last move
        let board = BoardState::from_string("XOXOXOOXX").unwrap();
        assert!(matches!(board.evaluate(), Outcome::Win(Player::X, _)));
    }

    #[test]
    fn test_reset() {
        let mut board = play_all(&[0, 4, 8]);
        board.reset();
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX ......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        assert_eq!(board.to_move, Player::O);

        assert!(matches!(
            BoardState::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            BoardState::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
        assert!(matches!(
            BoardState::from_string("OO......."),
            Err(Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 2
            })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
        assert_eq!(board.encode(), "XOX.O.X..");
    }

    #[test]
    fn test_with_mark_leaves_source_board_untouched() {
        let board = BoardState::new();
        let next = board.with_mark(4, Player::X);
        assert!(board.is_empty(4));
        assert_eq!(next.cells[4], Cell::X);
        assert_eq!(next.to_move, Player::O);
    }
}
