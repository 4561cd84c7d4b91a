//! Pure tic-tac-toe game logic.
//!
//! The crate holds the 3x3 board, turn tracking and win/draw detection. It
//! performs no I/O: callers feed moves to [`GameState::apply_move`] and react
//! to the returned [`Transition`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameOutcome, GameState, Line, Player, Transition};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.apply_move(row, col)?;
//! }
//! let transition = game.apply_move(0, 2)?;
//! assert!(matches!(transition, Transition::Won { winner: Player::X, line: Line::TopRow, .. }));
//! assert!(game.current_outcome().is_terminal());
//! # Ok::<(), tictactoe_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod line;
mod outcome;
pub mod rules;
mod types;

pub use error::InvalidMove;
pub use game::GameState;
pub use line::Line;
pub use outcome::{GameOutcome, Transition};
pub use rules::evaluate;
pub use types::{Board, Cell, Coord, Player};
