//! Tests for the application controller: input to moves, cues and flash.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tictactoe::{App, AudioNotifier, Cue, FlashSettings};
use tictactoe_core::{Cell, Coord, GameOutcome, Line, Player};

/// Records every cue it is asked to play.
#[derive(Clone, Default)]
struct RecordingNotifier {
    played: Rc<RefCell<Vec<Cue>>>,
}

impl AudioNotifier for RecordingNotifier {
    fn play(&self, cue: Cue) {
        self.played.borrow_mut().push(cue);
    }
}

fn new_app() -> (App, Rc<RefCell<Vec<Cue>>>) {
    let notifier = RecordingNotifier::default();
    let played = notifier.played.clone();
    let mut app = App::new(FlashSettings::default(), Box::new(notifier));
    app.resize(Rect::new(0, 0, 80, 24));
    (app, played)
}

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn click_event(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Center of a board cell on screen.
fn cell_center(app: &App, c: Coord) -> (u16, u16) {
    let rect = app.layout().board.cell_rect(c);
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn test_click_places_mark_and_plays_click() {
    let (mut app, played) = new_app();
    let now = Instant::now();
    let (x, y) = cell_center(&app, coord(1, 2));

    assert!(app.handle_event(click_event(x, y), now));
    assert_eq!(app.game().cell_at(1, 2), Some(Cell::Occupied(Player::X)));
    assert_eq!(app.game().current_player(), Player::O);
    assert_eq!(*played.borrow(), vec![Cue::Click]);
}

#[test]
fn test_rejected_click_plays_nothing() {
    let (mut app, played) = new_app();
    let now = Instant::now();
    let (x, y) = cell_center(&app, coord(0, 0));

    app.handle_event(click_event(x, y), now);
    assert!(!app.handle_event(click_event(x, y), now));
    assert_eq!(*played.borrow(), vec![Cue::Click]);
    assert_eq!(app.game().current_player(), Player::O);

    // Outside the grid, in the status bar.
    assert!(!app.handle_event(click_event(1, 1), now));
    assert_eq!(played.borrow().len(), 1);
}

#[test]
fn test_right_click_ignored() {
    let (mut app, played) = new_app();
    let (x, y) = cell_center(&app, coord(0, 0));
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
    assert!(!app.handle_event(event, Instant::now()));
    assert!(played.borrow().is_empty());
}

#[test]
fn test_win_plays_click_then_win_and_starts_flash() {
    let (mut app, played) = new_app();
    let t0 = Instant::now();
    for c in [coord(0, 0), coord(1, 0), coord(0, 1), coord(1, 1), coord(0, 2)] {
        assert!(app.play(c, t0).is_some());
    }

    assert_eq!(
        app.game().current_outcome(),
        GameOutcome::Won {
            winner: Player::X,
            line: Line::TopRow
        }
    );
    assert_eq!(
        *played.borrow(),
        vec![Cue::Click, Cue::Click, Cue::Click, Cue::Click, Cue::Click, Cue::Win]
    );
    assert!(app.flash().is_running());
    assert_eq!(app.flash().line(), Some(Line::TopRow));

    assert!(app.tick(t0 + Duration::from_millis(100)));
    assert_eq!(app.flash().alpha(), 0.3);
    assert!(app.tick(t0 + Duration::from_millis(2000)));
    assert!(!app.flash().is_running());
    assert_eq!(app.flash().alpha(), 1.0);

    // Board is frozen.
    assert!(app.play(coord(2, 2), t0).is_none());
    assert_eq!(played.borrow().len(), 6);
}

#[test]
fn test_draw_plays_click_then_draw() {
    let (mut app, played) = new_app();
    let now = Instant::now();
    for (r, c) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)] {
        app.play(coord(r, c), now);
    }
    assert_eq!(app.game().current_outcome(), GameOutcome::Draw);
    let played = played.borrow();
    assert_eq!(played.len(), 10);
    assert_eq!(played[8], Cue::Click);
    assert_eq!(played[9], Cue::Draw);
    assert!(!app.flash().is_running());
}

#[test]
fn test_reset_button_and_key() {
    let (mut app, _played) = new_app();
    let now = Instant::now();
    for c in [coord(0, 0), coord(1, 0), coord(0, 1), coord(1, 1), coord(0, 2)] {
        app.play(c, now);
    }
    assert!(app.flash().is_running());

    let button = app.layout().reset_button;
    assert!(app.handle_event(click_event(button.x + 1, button.y + 1), now));
    assert_eq!(app.game().current_outcome(), GameOutcome::InProgress);
    assert_eq!(app.game().current_player(), Player::X);
    assert!(!app.flash().is_running());
    assert_eq!(app.flash().line(), None);

    app.play(coord(2, 2), now);
    assert!(app.handle_event(key_event(KeyCode::Char('r')), now));
    assert!(app.game().history().is_empty());
}

#[test]
fn test_number_keys_place_row_major() {
    let (mut app, _played) = new_app();
    let now = Instant::now();
    assert!(app.handle_event(key_event(KeyCode::Char('5')), now));
    assert!(app.handle_event(key_event(KeyCode::Char('9')), now));
    assert!(!app.handle_event(key_event(KeyCode::Char('0')), now));
    assert_eq!(app.game().cell_at(1, 1), Some(Cell::Occupied(Player::X)));
    assert_eq!(app.game().cell_at(2, 2), Some(Cell::Occupied(Player::O)));
}

#[test]
fn test_quit_keys() {
    for event in [
        key_event(KeyCode::Char('q')),
        key_event(KeyCode::Esc),
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ] {
        let (mut app, _played) = new_app();
        app.handle_event(event, Instant::now());
        assert!(app.should_quit());
    }
}

#[test]
fn test_poll_timeout_shortens_while_flashing() {
    let (mut app, _played) = new_app();
    let t0 = Instant::now();
    assert_eq!(app.poll_timeout(t0), Duration::from_millis(250));
    for c in [coord(0, 0), coord(1, 0), coord(0, 1), coord(1, 1), coord(0, 2)] {
        app.play(c, t0);
    }
    assert!(app.poll_timeout(t0) <= Duration::from_millis(100));
}

#[test]
fn test_short_terminal_refuses_moves_it_cannot_show() {
    let (mut app, played) = new_app();
    app.resize(Rect::new(0, 0, 80, 14));
    let now = Instant::now();
    let (x, y) = cell_center(&app, coord(0, 0));

    assert!(!app.click(x, y, now));
    assert!(!app.handle_event(key_event(KeyCode::Char('1')), now));
    assert_eq!(app.game().cell_at(0, 0), Some(Cell::Empty));
    assert!(played.borrow().is_empty());
}
