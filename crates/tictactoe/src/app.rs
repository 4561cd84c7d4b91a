//! Application state and input handling.
//!
//! The controller feeds input to [`GameState`] and reacts to the returned
//! [`Transition`]: it asks the notifier for cues and starts or cancels the
//! flash. Rendering reads the result afterwards.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tictactoe_core::{Coord, GameState, Transition};
use tracing::{debug, info, instrument};

use crate::audio::{AudioNotifier, Cue};
use crate::config::FlashSettings;
use crate::flash::FlashAnimation;
use crate::layout::AppLayout;

/// How long the event loop waits for input when nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state.
pub struct App {
    game: GameState,
    flash: FlashAnimation,
    notifier: Box<dyn AudioNotifier>,
    layout: AppLayout,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(notifier))]
    pub fn new(flash: FlashSettings, notifier: Box<dyn AudioNotifier>) -> Self {
        Self {
            game: GameState::new(),
            flash: FlashAnimation::new(flash),
            notifier,
            layout: AppLayout::default(),
            should_quit: false,
        }
    }

    /// Recomputes the layout for a new terminal size.
    pub fn resize(&mut self, area: Rect) {
        let layout = AppLayout::compute(area);
        if layout != self.layout {
            debug!(?area, "Layout recomputed");
            self.layout = layout;
        }
    }

    /// Handles one terminal event. Returns true if the screen needs a redraw.
    #[instrument(skip(self, now))]
    pub fn handle_event(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            Event::Resize(width, height) => {
                self.resize(Rect::new(0, 0, width, height));
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                false
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                false
            }
            KeyCode::Char('r') => {
                self.reset();
                true
            }
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit @ 1..=9) if !self.layout.board.is_degenerate() => {
                    Coord::from_index(digit as usize - 1)
                        .map(|coord| self.play(coord, now).is_some())
                        .unwrap_or(false)
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        self.click(mouse.column, mouse.row, now)
    }

    /// Handles a left click at a terminal position.
    #[instrument(skip(self, now))]
    pub fn click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        if self.layout.on_reset_button(column, row) {
            self.reset();
            return true;
        }
        match self.layout.board.hit_test(column, row) {
            Some(coord) => self.play(coord, now).is_some(),
            None => false,
        }
    }

    /// Attempts a move. Rejected moves are logged and otherwise ignored.
    #[instrument(skip(self, now))]
    pub fn play(&mut self, coord: Coord, now: Instant) -> Option<Transition> {
        let transition = match self.game.apply_move_at(coord) {
            Ok(t) => t,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                return None;
            }
        };

        self.notifier.play(Cue::Click);
        match transition {
            Transition::Won { line, .. } => {
                self.notifier.play(Cue::Win);
                self.flash.start(line, now);
            }
            Transition::Drew { .. } => self.notifier.play(Cue::Draw),
            Transition::Continued { .. } => {}
        }
        Some(transition)
    }

    /// Starts a new game and stops any flash.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("New game");
        self.flash.cancel();
        self.game.reset();
    }

    /// Advances animations. Returns true if the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.flash.tick(now)
    }

    /// How long to wait for input before the next tick.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.flash.next_tick_in(now).unwrap_or(IDLE_POLL)
    }

    /// Requests the event loop to exit.
    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The winning-line flash.
    pub fn flash(&self) -> &FlashAnimation {
        &self.flash
    }

    /// Current layout.
    pub fn layout(&self) -> &AppLayout {
        &self.layout
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("game", &self.game)
            .field("flash", &self.flash)
            .field("layout", &self.layout)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}
