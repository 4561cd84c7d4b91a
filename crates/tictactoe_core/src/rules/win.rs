//! Win detection logic for tic-tac-toe.

use crate::line::Line;
use crate::types::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Lines are scanned rows first, then columns, then the main and anti
/// diagonals. Boards with more than one completed line report the earliest.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    Line::iter().find_map(|line| {
        let [a, b, c] = line.coords();
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}
