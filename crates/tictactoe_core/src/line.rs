//! The eight fixed winning lines.

use crate::types::Coord;
use serde::{Deserialize, Serialize};

/// One of the 8 lines that win the game when uniformly marked.
///
/// Declaration order is the detection order: rows, then columns, then diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// (0,0) to (2,2).
    #[display("main diagonal")]
    MainDiagonal,
    /// (0,2) to (2,0).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// The ordered coordinate triple of this line.
    pub fn coords(self) -> [Coord; 3] {
        let idx: [usize; 3] = match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        };
        idx.map(|i| Coord::ALL[i])
    }

    /// Checks if the coordinate lies on this line.
    pub fn contains(self, coord: Coord) -> bool {
        self.coords().contains(&coord)
    }
}
