//! Match command - a series of games between two seats

use std::{
    cell::RefCell,
    fmt,
    io::{self, StdinLock},
    path::PathBuf,
    rc::Rc,
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Error,
    ai::{ComputerPlayer, Difficulty},
    cli::{
        human::{HumanPlayer, SharedInput},
        output::{percent, print_kv, print_section},
    },
    pipeline::{MatchSeries, ProgressObserver},
    ports::MoveSelector,
};

/// Who sits at one side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Computer(Difficulty),
}

impl FromStr for Seat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("human") {
            Ok(Seat::Human)
        } else {
            s.parse().map(Seat::Computer)
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Computer(difficulty) => write!(f, "{difficulty}"),
        }
    }
}

impl Seat {
    fn into_selector(
        self,
        label: &str,
        seed: Option<u64>,
        stdin: &SharedInput<StdinLock<'static>>,
    ) -> Box<dyn MoveSelector> {
        match self {
            Seat::Human => Box::new(HumanPlayer::sharing(
                format!("Human {label}"),
                Rc::clone(stdin),
            )),
            Seat::Computer(difficulty) => Box::new(
                ComputerPlayer::from_seed(difficulty, seed).named(format!("{label} ({difficulty})")),
            ),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two seats")]
pub struct SeriesArgs {
    /// Seat for X: human, easy, moderate or hard
    #[arg(long, default_value = "hard")]
    pub x: Seat,

    /// Seat for O: human, easy, moderate or hard
    #[arg(long, default_value = "hard")]
    pub o: Seat,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed (O uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SeriesArgs) -> Result<()> {
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let mut x = args.x.into_selector("X", args.seed, &stdin);
    let mut o = args
        .o
        .into_selector("O", args.seed.map(|s| s.wrapping_add(1)), &stdin);

    print_section("Match Configuration");
    print_kv("X", x.name());
    print_kv("O", o.name());
    print_kv("Games", &args.games.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut series = MatchSeries::new(args.games);
    if !args.no_progress && args.x != Seat::Human && args.o != Seat::Human {
        series = series.with_observer(Box::new(ProgressObserver::new()));
    }
    let result = match series.run(x.as_mut(), o.as_mut()) {
        Ok(result) => result,
        Err(Error::PlayerQuit) => {
            println!("\nMatch abandoned.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    print_section("Match Results");
    print_kv("Total games", &result.total_games.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", result.x_wins, percent(result.x_win_rate())),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", result.o_wins, percent(result.o_win_rate())),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", result.draws, percent(result.draw_rate())),
    );

    if let Some(path) = &args.export {
        result
            .save(path)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        println!("\nResults exported to: {}", path.display());
    }

    Ok(())
}
