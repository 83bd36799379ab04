//! Winning line analysis for Tic-Tac-Toe

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// One of the eight winning index triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([usize; 3]);

impl Line {
    /// All eight lines in scan order (rows, columns, diagonals)
    pub fn all() -> impl Iterator<Item = Line> {
        WINNING_LINES.iter().copied().map(Line)
    }

    /// Cell indices covered by the line
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.0.contains(&pos)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}-{b}-{c}")
    }
}

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First completed line on the board, with the mark that completed it
    pub fn completed_line(cells: &[Cell; 9]) -> Option<(Player, Line)> {
        Line::all().find_map(|line| {
            let [a, b, c] = line.cells();
            let player = cells[a].to_player()?;
            (cells[b] == cells[a] && cells[c] == cells[a]).then_some((player, line))
        })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all positions that would immediately win for the player, ascending
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_completed_line_reports_first_line_in_scan_order() {
        // XXX
        // X..
        // X..
        let mut cells = [Cell::Empty; 9];
        for pos in [0, 1, 2, 3, 6] {
            cells[pos] = Cell::X;
        }

        let (player, line) = LineAnalyzer::completed_line(&cells).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(line.cells(), [0, 1, 2]);
    }

    #[test]
    fn test_completed_line_ignores_empty_triples() {
        let cells = [Cell::Empty; 9];
        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![2, 6]);
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_winning_moves_blocked_line() {
        // X.X with O in between is not a threat
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }

    #[test]
    fn test_line_display() {
        let line = Line::all().last().unwrap();
        assert_eq!(line.to_string(), "2-4-6");
    }
}
