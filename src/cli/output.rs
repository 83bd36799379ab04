//! Output formatting for CLI

use crate::tictactoe::{BoardState, Cell, Outcome};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render the board as a grid, numbering empty cells 1-9 for input.
///
/// Cells on the winning line are wrapped in brackets.
pub fn render_board(board: &BoardState, outcome: Outcome) -> String {
    let winning = match outcome {
        Outcome::Win(_, line) => Some(line),
        _ => None,
    };

    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let pos = row * 3 + col;
                let symbol = match board.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    cell => cell.to_char().to_string(),
                };
                if winning.is_some_and(|line| line.contains(pos)) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

/// Format a rate as a percentage
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
