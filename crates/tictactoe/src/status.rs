//! Status line text and colors.

use ratatui::style::Color;
use tictactoe_core::{GameOutcome, Player};

/// Teal used for X.
pub const X_COLOR: Color = Color::Rgb(0, 150, 136);
/// Coral used for O.
pub const O_COLOR: Color = Color::Rgb(244, 67, 54);
/// Gold used for wins and the winning line.
pub const WIN_COLOR: Color = Color::Rgb(255, 215, 0);
/// Blue used for draws.
pub const DRAW_COLOR: Color = Color::Rgb(30, 144, 255);
/// Alice-blue board background.
pub const BOARD_BACKGROUND: Color = Color::Rgb(240, 248, 255);

/// Color of a player's marks.
pub fn mark_color(player: Player) -> Color {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

/// Text and color shown above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Message.
    pub text: String,
    /// Foreground color.
    pub color: Color,
}

impl StatusLine {
    /// Status for the given outcome and player to move.
    pub fn for_game(outcome: GameOutcome, current: Player) -> Self {
        match outcome {
            GameOutcome::InProgress => Self {
                text: format!("Player {current}'s turn"),
                color: mark_color(current),
            },
            GameOutcome::Won { winner, .. } => Self {
                text: format!("Player {winner} wins!"),
                color: WIN_COLOR,
            },
            GameOutcome::Draw => Self {
                text: "It's a draw!".to_string(),
                color: DRAW_COLOR,
            },
        }
    }
}

/// Mixes `fg` over `bg` with the given alpha (0.0 - 1.0).
///
/// Terminals have no alpha channel, so translucency is approximated by
/// blending toward the background. Non-RGB colors are returned unchanged.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) = (fg, bg) else {
        return fg;
    };
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
    Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
}
