//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Two-player tic-tac-toe in the terminal. Click a cell to play.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with mouse input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory holding click.wav, win.wav and draw.wav
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Disable sound cues
    #[arg(long)]
    pub mute: bool,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
