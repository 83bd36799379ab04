//! Play command - interactive rounds on the terminal

use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    ai::Difficulty,
    app::SessionConfig,
    cli::{
        human::{Input, parse_input, read_line},
        output::{print_kv, print_section, render_board},
    },
    session::{GameMode, Session},
};

#[derive(Parser, Debug)]
#[command(about = "Play interactively against the computer or another human")]
pub struct PlayArgs {
    /// Computer strength: easy, moderate or hard
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Two humans take turns instead of playing the computer
    #[arg(long, conflicts_with = "difficulty")]
    pub pvp: bool,

    /// Random seed for the computer
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON session config; command-line flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PlayArgs {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load_from_file(path)
                .with_context(|| format!("loading session config {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if self.pvp {
            config = config.with_mode(GameMode::PlayerVsPlayer);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.session_config()?;
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    print_section("Tic-Tac-Toe");
    print_kv("Mode", &session.mode().to_string());
    println!("Enter 1-9 to move, r for a new round, s to reset scores, q to quit.");
    println!("Switch mode with m pvp, m easy, m moderate or m hard.");

    run(&mut session, &mut input)
}

/// Drive the session from `input` until quit or end of input.
pub fn run<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    loop {
        while session.is_computer_turn() {
            println!("\n{}", session.status_line());
            let (position, _) = session.computer_turn()?;
            println!("AI plays {}", position + 1);
        }

        println!("\n{}", render_board(session.board(), session.outcome()));
        println!("{}", session.status_line());
        if session.outcome().is_terminal() {
            println!("Scores  {}", session.scores());
            println!("r for a new round, q to quit.");
        }

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match parse_input(&line) {
            Some(Input::Move(pos)) => {
                if let Err(err) = session.play(pos) {
                    println!("{err}");
                }
            }
            Some(Input::ResetRound) => session.reset_round(),
            Some(Input::ResetScores) => {
                session.reset_scores();
                println!("Scores reset!");
            }
            Some(Input::ChangeMode(mode)) => {
                session.change_mode(mode);
                println!("Mode: {mode}");
            }
            Some(Input::Quit) => {
                println!("Final scores  {}", session.scores());
                return Ok(());
            }
            None => println!("Enter 1-9, r, s, m <mode> or q."),
        }
    }
}
