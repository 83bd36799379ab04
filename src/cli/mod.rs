//! CLI infrastructure for the terminal front end
//!
//! This module provides the command-line interface for interactive play,
//! computer-vs-computer series, and best-move queries.

pub mod commands;
pub mod human;
pub mod output;
