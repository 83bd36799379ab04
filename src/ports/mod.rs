//! Ports (trait boundaries) between the engine and its callers.
//!
//! Players (human input, computer opponents) and match observers (progress
//! bars, tallies) plug into the match driver through these traits.

pub mod observer;
pub mod selector;

pub use observer::Observer;
pub use selector::MoveSelector;
