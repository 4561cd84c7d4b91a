//! Game outcomes and move transitions.

use crate::line::Line;
use crate::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// Outcome of the game at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOutcome {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("player {winner} wins on the {line}")]
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// The board filled up without a line.
    #[display("draw")]
    Draw,
}

impl GameOutcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameOutcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// What a successful move did to the game.
///
/// Presentation and audio react to this value; the game itself has no
/// knowledge of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// The game goes on with `next` to move.
    Continued {
        /// Where the mark went.
        placed: Coord,
        /// Mark that was placed.
        mark: Player,
        /// Player to move now.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// Where the mark went.
        placed: Coord,
        /// The winner (also the mark placed).
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// The move filled the board without a line.
    Drew {
        /// Where the mark went.
        placed: Coord,
        /// Mark that was placed.
        mark: Player,
    },
}

impl Transition {
    /// Where the mark went.
    pub fn placed(&self) -> Coord {
        match self {
            Transition::Continued { placed, .. }
            | Transition::Won { placed, .. }
            | Transition::Drew { placed, .. } => *placed,
        }
    }

    /// Mark that was placed.
    pub fn mark(&self) -> Player {
        match self {
            Transition::Continued { mark, .. } | Transition::Drew { mark, .. } => *mark,
            Transition::Won { winner, .. } => *winner,
        }
    }

    /// Outcome after the move.
    pub fn outcome(&self) -> GameOutcome {
        match self {
            Transition::Continued { .. } => GameOutcome::InProgress,
            Transition::Won { winner, line, .. } => GameOutcome::Won {
                winner: *winner,
                line: *line,
            },
            Transition::Drew { .. } => GameOutcome::Draw,
        }
    }

    /// True if this move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Transition::Continued { .. })
    }
}
