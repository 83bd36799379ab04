//! Observer implementations for match series

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    pipeline::series::SeriesResult,
    ports::Observer,
    tictactoe::Outcome,
};

/// Progress bar observer - shows series progress with a running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: SeriesResult,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: SeriesResult::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "X:{} O:{} D:{}",
            self.tally.x_wins, self.tally.o_wins, self.tally.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: Outcome) -> Result<()> {
        self.tally.record(outcome);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}
