//! Screen layout and hit testing.
//!
//! Both rendering and mouse handling derive their geometry from
//! [`AppLayout::compute`], so a click always lands on the cell that was drawn
//! under it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tictactoe_core::Coord;
use tracing::instrument;

/// Terminal cells are roughly twice as tall as wide; a board cell this many
/// columns per row looks square.
const CELL_ASPECT: u16 = 2;

/// Height of the status bar and the reset button bar.
const BAR_HEIGHT: u16 = 3;

/// Smallest cell height leaving a row for the mark inside the cell border.
const MIN_CELL_HEIGHT: u16 = 3;

/// Geometry of the 3x3 grid inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
    cell_width: u16,
    cell_height: u16,
}

impl BoardLayout {
    /// Fits the largest square-looking grid into `region`, centered.
    #[instrument]
    pub fn fit(region: Rect) -> Self {
        let cell_height = region.height.min(region.width / CELL_ASPECT) / 3;
        let cell_width = cell_height * CELL_ASPECT;
        let grid_width = cell_width * 3;
        let grid_height = cell_height * 3;
        Self {
            origin_x: region.x + (region.width - grid_width) / 2,
            origin_y: region.y + (region.height - grid_height) / 2,
            cell_width,
            cell_height,
        }
    }

    /// True if the cells are too small to show a mark inside their border.
    pub fn is_degenerate(&self) -> bool {
        self.cell_height < MIN_CELL_HEIGHT
    }

    /// Area covered by the whole grid.
    pub fn grid_rect(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.cell_width * 3,
            self.cell_height * 3,
        )
    }

    /// Area covered by one cell.
    pub fn cell_rect(&self, coord: Coord) -> Rect {
        Rect::new(
            self.origin_x + self.cell_width * coord.col() as u16,
            self.origin_y + self.cell_height * coord.row() as u16,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Maps a terminal position to the board cell under it.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Coord> {
        if self.is_degenerate() || column < self.origin_x || row < self.origin_y {
            return None;
        }
        let col = ((column - self.origin_x) / self.cell_width) as usize;
        let row = ((row - self.origin_y) / self.cell_height) as usize;
        Coord::new(row, col)
    }
}

/// Regions of the whole screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    /// Status line on top.
    pub status: Rect,
    /// Region the board is centered in.
    pub board_region: Rect,
    /// The grid itself.
    pub board: BoardLayout,
    /// Reset button at the bottom.
    pub reset_button: Rect,
}

impl AppLayout {
    /// Splits the terminal area into status bar, board and reset button.
    #[instrument]
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(BAR_HEIGHT),
            ])
            .split(area);
        Self {
            status: chunks[0],
            board_region: chunks[1],
            board: BoardLayout::fit(chunks[1]),
            reset_button: center_horizontally(chunks[2], 20),
        }
    }

    /// True if `(column, row)` falls on the reset button.
    pub fn on_reset_button(&self, column: u16, row: u16) -> bool {
        let button = self.reset_button;
        button.width > 0
            && column >= button.x
            && column < button.x + button.width
            && row >= button.y
            && row < button.y + button.height
    }
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
