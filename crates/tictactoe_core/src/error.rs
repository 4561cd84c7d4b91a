//! Move rejection errors.

use crate::types::Coord;
use derive_more::{Display, Error};

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The coordinate is outside the 3x3 board.
    #[display("Coordinate ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Coord),
}
