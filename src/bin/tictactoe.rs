//! Tic-Tac-Toe CLI - play against the computer, run matches, analyze positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with an easy, moderate or unbeatable computer", long_about = None)]
struct Cli {
    /// Log decisions at debug level (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on the terminal
    Play(tictactoe_ai::cli::commands::play::PlayArgs),

    /// Run a series of games between two seats
    Match(tictactoe_ai::cli::commands::series::SeriesArgs),

    /// Show minimax scores and the chosen move for a board
    BestMove(tictactoe_ai::cli::commands::best_move::BestMoveArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => tictactoe_ai::cli::commands::play::execute(args),
        Commands::Match(args) => tictactoe_ai::cli::commands::series::execute(args),
        Commands::BestMove(args) => tictactoe_ai::cli::commands::best_move::execute(args),
    }
}
