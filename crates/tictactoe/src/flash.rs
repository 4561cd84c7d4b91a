//! Flashing highlight for the winning line.
//!
//! Pure presentation state: the animation is handed the winning [`Line`] and
//! a start time, and everything after that is a function of the clock. It
//! never reads or writes the game.

use std::time::{Duration, Instant};
use tictactoe_core::Line;
use tracing::{debug, instrument};

use crate::config::FlashSettings;

/// Alpha of the highlight when not dimmed.
pub const FULL_ALPHA: f32 = 1.0;

/// Timed alpha flash over one line.
#[derive(Debug, Clone)]
pub struct FlashAnimation {
    settings: FlashSettings,
    line: Option<Line>,
    started_at: Option<Instant>,
    alpha: f32,
}

impl FlashAnimation {
    /// Creates an idle animation.
    #[instrument]
    pub fn new(settings: FlashSettings) -> Self {
        Self {
            settings,
            line: None,
            started_at: None,
            alpha: FULL_ALPHA,
        }
    }

    /// Starts flashing `line`, restarting any running flash.
    #[instrument(skip(self, now))]
    pub fn start(&mut self, line: Line, now: Instant) {
        debug!(%line, "Flash started");
        self.line = Some(line);
        self.started_at = Some(now);
        self.alpha = FULL_ALPHA;
    }

    /// Stops the flash and forgets the line.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        self.line = None;
        self.started_at = None;
        self.alpha = FULL_ALPHA;
    }

    /// Advances to `now`. Returns true if the alpha changed or the flash just
    /// ended, i.e. the highlight needs repainting.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.settings.duration() {
            debug!("Flash finished");
            self.started_at = None;
            self.alpha = FULL_ALPHA;
            return true;
        }
        let phase = elapsed.as_millis() / self.settings.interval().as_millis().max(1);
        let alpha = if phase % 2 == 0 {
            FULL_ALPHA
        } else {
            *self.settings.dim_alpha()
        };
        let changed = alpha != self.alpha;
        self.alpha = alpha;
        changed
    }

    /// Current highlight alpha.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Line the animation was started with, kept after the flash ends.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// True while the alpha is still alternating.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// How long the event loop may sleep before the next visible change.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        let started = self.started_at?;
        let interval = self.settings.interval();
        let elapsed = now.saturating_duration_since(started);
        let into_phase = Duration::from_nanos(
            (elapsed.as_nanos() % interval.as_nanos().max(1)) as u64,
        );
        Some(interval.saturating_sub(into_phase))
    }
}
