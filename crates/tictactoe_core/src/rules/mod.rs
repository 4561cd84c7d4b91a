//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They know nothing about whose turn it is
//! or how the board got into its current shape, so they evaluate synthetic
//! positions just as well as ones reached through play.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::outcome::GameOutcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board.
///
/// Returns `Won` for the first completed line in rows, columns, diagonals
/// order, `Draw` for a full board with no line, and `InProgress` otherwise.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((winner, line)) = winning_line(board) {
        return GameOutcome::Won { winner, line };
    }
    if is_full(board) {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}
