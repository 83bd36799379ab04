//! CLI subcommands

pub mod best_move;
pub mod play;
pub mod series;
