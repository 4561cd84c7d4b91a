//! Game state machine for tic-tac-toe.

use crate::error::InvalidMove;
use crate::outcome::{GameOutcome, Transition};
use crate::rules;
use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game: the board, whose turn it is, and the outcome.
///
/// The only mutation is [`GameState::apply_move`]; [`GameState::reset`]
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    history: Vec<Coord>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`InvalidMove::GameOver`] once the game is won or drawn
    /// - [`InvalidMove::OutOfRange`] if either coordinate is outside `0..=2`
    /// - [`InvalidMove::Occupied`] if the cell already holds a mark
    ///
    /// On error the state is left untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Transition, InvalidMove> {
        if self.outcome.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        let coord = Coord::new(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        self.apply_move_at(coord)
    }

    /// Places the current player's mark at an already validated coordinate.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::apply_move`], minus the range check.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move_at(&mut self, coord: Coord) -> Result<Transition, InvalidMove> {
        if self.outcome.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if !self.board.get(coord).is_empty() {
            return Err(InvalidMove::Occupied(coord));
        }

        let mark = self.current_player;
        self.board.place(coord, mark);
        self.history.push(coord);
        self.outcome = rules::evaluate(&self.board);

        let transition = match self.outcome {
            GameOutcome::InProgress => {
                self.current_player = mark.opponent();
                Transition::Continued {
                    placed: coord,
                    mark,
                    next: self.current_player,
                }
            }
            GameOutcome::Won { winner, line } => {
                info!(%winner, %line, moves = self.history.len(), "Game won");
                Transition::Won {
                    placed: coord,
                    winner,
                    line,
                }
            }
            GameOutcome::Draw => {
                info!(moves = self.history.len(), "Game drawn");
                Transition::Drew {
                    placed: coord,
                    mark,
                }
            }
        };

        debug!(?transition, "Move applied");
        Ok(transition)
    }

    /// Starts over: empty board, X to move, game in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(previous = %self.outcome, "Resetting game");
        *self = Self::new();
    }

    /// Returns the current outcome.
    pub fn current_outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the player to move, or the player who made the final move
    /// once the game has ended.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        Coord::new(row, col).map(|coord| self.board.get(coord))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the coordinates played so far, oldest first.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    #[test]
    fn test_first_move_toggles_player() {
        let mut game = GameState::new();
        let t = game.apply_move(1, 1).unwrap();
        assert_eq!(
            t,
            Transition::Continued {
                placed: Coord::new(1, 1).unwrap(),
                mark: Player::X,
                next: Player::O
            }
        );
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.cell_at(1, 1), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_occupied_rejected_without_change() {
        let mut game = GameState::new();
        game.apply_move(0, 0).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply_move(0, 0),
            Err(InvalidMove::Occupied(Coord::new(0, 0).unwrap()))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.apply_move(3, 1),
            Err(InvalidMove::OutOfRange { row: 3, col: 1 })
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_winning_move_keeps_winner_as_current() {
        let mut game = GameState::new();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.apply_move(r, c).unwrap();
        }
        let t = game.apply_move(0, 2).unwrap();
        assert_eq!(
            t,
            Transition::Won {
                placed: Coord::new(0, 2).unwrap(),
                winner: Player::X,
                line: Line::TopRow
            }
        );
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.apply_move(2, 2), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let mut game = GameState::new();
        for (r, c) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.apply_move(r, c).unwrap();
        }
        assert_eq!(game.apply_move(7, 7), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_cell_at_off_board() {
        assert_eq!(GameState::new().cell_at(0, 5), None);
    }
}
