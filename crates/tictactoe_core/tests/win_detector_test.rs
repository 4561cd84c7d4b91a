//! Tests for board evaluation.

use strum::IntoEnumIterator;
use tictactoe_core::{Board, Cell, GameOutcome, Line, Player, evaluate};

const E: Cell = Cell::Empty;
const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);

#[test]
fn test_top_row_win_reports_line_coords() {
    let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    let outcome = evaluate(&board);
    assert_eq!(outcome.winner(), Some(Player::X));

    let coords: Vec<(usize, usize)> = outcome
        .line()
        .expect("winning line")
        .coords()
        .iter()
        .map(|c| (c.row(), c.col()))
        .collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_full_board_draw() {
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(evaluate(&board), GameOutcome::Draw);
}

#[test]
fn test_in_progress_when_gap_and_no_line() {
    assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);

    let boards = [
        Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]),
        Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]),
        Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]),
    ];
    for board in boards {
        assert_eq!(evaluate(&board), GameOutcome::InProgress, "\n{board}");
    }
}

#[test]
fn test_every_line_detected_for_both_players() {
    for player in [Player::X, Player::O] {
        for line in Line::iter() {
            let mut rows = [[E; 3]; 3];
            for coord in line.coords() {
                rows[coord.row()][coord.col()] = Cell::Occupied(player);
            }
            let outcome = evaluate(&Board::from_rows(rows));
            assert_eq!(outcome, GameOutcome::Won { winner: player, line });
        }
    }
}

#[test]
fn test_simultaneous_lines_pick_first_in_order() {
    // Middle row and center column both complete for O.
    let board = Board::from_rows([[X, O, X], [O, O, O], [X, O, X]]);
    assert_eq!(
        evaluate(&board),
        GameOutcome::Won {
            winner: Player::O,
            line: Line::MiddleRow
        }
    );

    // Both diagonals complete for X, no row or column.
    let board = Board::from_rows([[X, O, X], [O, X, O], [X, O, X]]);
    assert_eq!(
        evaluate(&board),
        GameOutcome::Won {
            winner: Player::X,
            line: Line::MainDiagonal
        }
    );
}
