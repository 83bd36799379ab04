//! Move selector port - anything that can choose a move

use crate::{Result, tictactoe::BoardState};

/// Chooses moves for whichever side is to move.
///
/// Implemented by [`crate::ai::ComputerPlayer`] and by the terminal front
/// end's human player, so the match driver can seat either on either side.
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{
///     ports::MoveSelector,
///     tictactoe::BoardState,
/// };
///
/// struct FirstEmpty;
///
/// impl MoveSelector for FirstEmpty {
///     fn select_move(&mut self, state: &BoardState) -> tictactoe_ai::Result<usize> {
///         state
///             .empty_cells()
///             .first()
///             .copied()
///             .ok_or(tictactoe_ai::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// assert_eq!(FirstEmpty.select_move(&BoardState::new()).unwrap(), 0);
/// ```
pub trait MoveSelector {
    /// Select a move for the side to move on `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be chosen (terminal state) or if the
    /// move source itself fails (e.g. closed input).
    fn select_move(&mut self, state: &BoardState) -> Result<usize>;

    /// Name used in logs and reports.
    fn name(&self) -> &str;
}

impl<T: MoveSelector + ?Sized> MoveSelector for Box<T> {
    fn select_move(&mut self, state: &BoardState) -> Result<usize> {
        (**self).select_move(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
