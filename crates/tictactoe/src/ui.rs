//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_core::{Cell, Coord, Line};

use crate::app::App;
use crate::layout::BoardLayout;
use crate::status::{BOARD_BACKGROUND, StatusLine, WIN_COLOR, blend, mark_color};

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();

    let game = app.game();
    let status = StatusLine::for_game(game.current_outcome(), game.current_player());
    let status_text = Paragraph::new(status.text)
        .style(Style::default().fg(status.color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
    frame.render_widget(status_text, layout.status);

    if layout.board.is_degenerate() {
        let hint = Paragraph::new("Terminal too small")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, layout.board_region);
    } else {
        frame.render_widget(
            Block::default().style(Style::default().bg(BOARD_BACKGROUND)),
            layout.board.grid_rect(),
        );
        let winning = game.current_outcome().line();
        for coord in Coord::ALL {
            draw_cell(frame, &layout.board, coord, game.board().get(coord), winning, app.flash().alpha());
        }
    }

    let reset = Paragraph::new("Reset Game")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(reset, layout.reset_button);
}

fn draw_cell(
    frame: &mut Frame,
    board: &BoardLayout,
    coord: Coord,
    cell: Cell,
    winning: Option<Line>,
    alpha: f32,
) {
    let area = board.cell_rect(coord);
    let on_line = winning.is_some_and(|line| line.contains(coord));

    let border_style = if on_line {
        Style::default().fg(WIN_COLOR).bg(BOARD_BACKGROUND)
    } else {
        Style::default().fg(Color::Black).bg(BOARD_BACKGROUND)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if on_line { BorderType::Thick } else { BorderType::Plain })
        .border_style(border_style)
        .style(Style::default().bg(BOARD_BACKGROUND));

    let text = match cell.mark() {
        Some(player) => {
            let color = if on_line {
                blend(WIN_COLOR, BOARD_BACKGROUND, alpha)
            } else {
                mark_color(player)
            };
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            centered(area, Span::styled(player.to_string(), style))
        }
        None => Vec::new(),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Pads a single span with blank lines so it sits mid-cell.
fn centered(area: Rect, span: Span<'static>) -> Vec<TextLine<'static>> {
    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![TextLine::default(); (inner_height.saturating_sub(1) / 2) as usize];
    lines.push(TextLine::from(span));
    lines
}
