//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Core**: board, turns and win/draw detection live in [`tictactoe_core`]
//! - **Layout/UI**: ratatui rendering and mouse hit testing
//! - **Flash**: timed alpha animation over the winning line
//! - **Audio**: fire-and-forget sound cues for clicks, wins and draws
//! - **App**: the controller tying input to the game and the above
//! - **Terminal**: raw mode setup, restored on drop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod audio;
pub mod cli;
pub mod config;
pub mod flash;
pub mod layout;
pub mod status;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use audio::{AudioLoadFailure, AudioNotifier, Cue, SilentNotifier, SoundBank, notifier_for};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, FlashSettings};
pub use flash::FlashAnimation;
pub use layout::{AppLayout, BoardLayout};
pub use status::StatusLine;
pub use terminal::TerminalGuard;
