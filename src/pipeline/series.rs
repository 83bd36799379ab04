//! Match driver for two move selectors

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    ports::{MoveSelector, Observer},
    tictactoe::{GameRecord, Outcome, Player},
};

/// Play one game from an empty board, X first.
///
/// Each selector's move is applied through the board engine exactly like a
/// human move, so an illegal choice surfaces as an error.
pub fn play_game(x: &mut dyn MoveSelector, o: &mut dyn MoveSelector) -> Result<GameRecord> {
    play_observed(0, x, o, &mut [])
}

fn play_observed(
    game_num: usize,
    x: &mut dyn MoveSelector,
    o: &mut dyn MoveSelector,
    observers: &mut [Box<dyn Observer>],
) -> Result<GameRecord> {
    let mut game = GameRecord::new();

    while !game.outcome.is_terminal() {
        let selector: &mut dyn MoveSelector = match game.board.to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let position = selector.select_move(&game.board)?;
        debug!(player = %game.board.to_move, name = selector.name(), position, "move");

        for observer in observers.iter_mut() {
            observer.on_move(game_num, &game.board, position)?;
        }
        game.play(position)?;
    }

    Ok(game)
}

/// Tally of a finished series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SeriesResult {
    /// Count one finished game
    pub fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        match outcome {
            Outcome::Win(Player::X, _) => self.x_wins += 1,
            Outcome::Win(Player::O, _) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games > 0 {
            count as f64 / self.total_games as f64
        } else {
            0.0
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

/// Repeated games between the same two selectors
pub struct MatchSeries {
    games: usize,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchSeries {
    pub fn new(games: usize) -> Self {
        Self {
            games,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the series
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play every game with `x` opening
    pub fn run(&mut self, x: &mut dyn MoveSelector, o: &mut dyn MoveSelector) -> Result<SeriesResult> {
        let mut result = SeriesResult::default();

        for observer in &mut self.observers {
            observer.on_series_start(self.games)?;
        }

        for game_num in 1..=self.games {
            let game = play_observed(game_num, x, o, &mut self.observers)?;
            result.record(game.outcome);
            for observer in &mut self.observers {
                observer.on_game_end(game_num, game.outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        info!(
            x = x.name(),
            o = o.name(),
            games = result.total_games,
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "series finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{Error, tictactoe::BoardState};

    /// Plays a fixed script of positions
    struct Scripted {
        moves: Vec<usize>,
    }

    impl MoveSelector for Scripted {
        fn select_move(&mut self, _state: &BoardState) -> Result<usize> {
            if self.moves.is_empty() {
                return Err(Error::GameOver);
            }
            Ok(self.moves.remove(0))
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    /// Shares (moves, games) counts with the test body
    struct Counting(Rc<RefCell<(usize, usize)>>);

    impl Observer for Counting {
        fn on_move(&mut self, _: usize, _: &BoardState, _: usize) -> Result<()> {
            self.0.borrow_mut().0 += 1;
            Ok(())
        }

        fn on_game_end(&mut self, _: usize, _: Outcome) -> Result<()> {
            self.0.borrow_mut().1 += 1;
            Ok(())
        }
    }

    #[test]
    fn play_game_alternates_selectors() {
        let mut x = Scripted {
            moves: vec![0, 1, 2],
        };
        let mut o = Scripted { moves: vec![3, 4] };

        let game = play_game(&mut x, &mut o).unwrap();
        assert_eq!(game.positions(), vec![0, 3, 1, 4, 2]);
        assert_eq!(game.outcome.winner(), Some(Player::X));
    }

    #[test]
    fn illegal_selection_is_an_error() {
        let mut x = Scripted { moves: vec![4] };
        let mut o = Scripted { moves: vec![4] };
        assert!(matches!(
            play_game(&mut x, &mut o),
            Err(Error::IllegalMove { position: 4, .. })
        ));
    }

    #[test]
    fn series_result_rates() {
        let mut result = SeriesResult::default();
        result.record(Outcome::Draw);
        result.record(Outcome::Draw);
        result.record(Outcome::Draw);
        let line = crate::tictactoe::Line::all().next().unwrap();
        result.record(Outcome::Win(Player::O, line));

        assert_eq!(result.total_games, 4);
        assert_eq!(result.draws, 3);
        assert!((result.draw_rate() - 0.75).abs() < 1e-12);
        assert!((result.o_win_rate() - 0.25).abs() < 1e-12);
        assert_eq!(result.x_win_rate(), 0.0);
    }

    #[test]
    fn observers_see_every_move() {
        let mut x = Scripted {
            moves: vec![0, 1, 2],
        };
        let mut o = Scripted { moves: vec![3, 4] };

        let counts = Rc::new(RefCell::new((0, 0)));
        let mut series = MatchSeries::new(1).with_observer(Box::new(Counting(counts.clone())));
        let result = series.run(&mut x, &mut o).unwrap();

        assert_eq!(result.x_wins, 1);
        assert_eq!(*counts.borrow(), (5, 1));
    }
}
