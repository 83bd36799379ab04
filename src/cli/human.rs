//! Human player reading moves from a line-oriented input

use std::{
    cell::RefCell,
    io::{BufRead, Write},
    rc::Rc,
};

use crate::{
    Error, Result, ai::Difficulty, ports::MoveSelector, session::GameMode,
    tictactoe::BoardState,
};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Cell index 0-8 (typed as 1-9)
    Move(usize),
    ResetRound,
    ResetScores,
    /// `m pvp` or `m <difficulty>`
    ChangeMode(GameMode),
    Quit,
}

/// Parse a line typed at the prompt. Cells are numbered 1-9.
pub fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim().to_ascii_lowercase();
    if let Some((command, arg)) = line.split_once(char::is_whitespace) {
        return match command {
            "m" | "mode" => parse_mode(arg.trim()).map(Input::ChangeMode),
            _ => None,
        };
    }
    match line.as_str() {
        "r" | "reset" => Some(Input::ResetRound),
        "s" | "scores" => Some(Input::ResetScores),
        "q" | "quit" | "exit" => Some(Input::Quit),
        other => match other.parse::<usize>() {
            Ok(n @ 1..=9) => Some(Input::Move(n - 1)),
            _ => None,
        },
    }
}

fn parse_mode(arg: &str) -> Option<GameMode> {
    match arg {
        "pvp" => Some(GameMode::PlayerVsPlayer),
        other => other
            .parse::<Difficulty>()
            .ok()
            .map(|difficulty| GameMode::PlayerVsComputer { difficulty }),
    }
}

/// Read the next line, `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|source| Error::Io {
        operation: "read input".to_string(),
        source,
    })?;
    Ok((read > 0).then_some(line))
}

/// Line source that several human seats can read in turn
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Human seated through a reader (stdin in the binary)
pub struct HumanPlayer<R> {
    name: String,
    input: SharedInput<R>,
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self::sharing(name, Rc::new(RefCell::new(reader)))
    }

    /// Seat a human on an input that other seats also read from
    pub fn sharing(name: impl Into<String>, input: SharedInput<R>) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> MoveSelector for HumanPlayer<R> {
    /// Prompt until a legal cell is entered.
    ///
    /// # Errors
    ///
    /// [`Error::PlayerQuit`] on `q`, [`Error::InputClosed`] at end of input.
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        loop {
            print!("{} ({}) move [1-9]: ", self.name, state.to_move);
            std::io::stdout().flush()?;

            let Some(line) = read_line(&mut *self.input.borrow_mut())? else {
                return Err(Error::InputClosed);
            };
            match parse_input(&line) {
                Some(Input::Move(pos)) if state.is_empty(pos) => return Ok(pos),
                Some(Input::Move(pos)) => println!("Cell {} is taken.", pos + 1),
                Some(Input::Quit) => return Err(Error::PlayerQuit),
                _ => println!("Enter a number from 1 to 9."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
