use crate::game::{Column, ROWS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the row holding the restart control.
const RESTART_HEIGHT: u16 = 3;
const RESTART_WIDTH: u16 = 24;

/// Something on screen that reacts to a tap or to Enter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    Tile { row: usize, column: Column },
    Restart,
}

/// Screen rectangles for everything in the body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoardLayout {
    /// Indexed by row, then by `Column::index`.
    pub tiles: [[Rect; 2]; ROWS],
    pub restart: Rect,
}

impl BoardLayout {
    pub fn tile(&self, row: usize, column: Column) -> Rect {
        self.tiles[row][column.index()]
    }
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Four equal rows of two tiles, then the restart control centered below.
pub fn board_layout(body: Rect) -> BoardLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(RESTART_HEIGHT),
        ])
        .split(body);

    let tiles = std::array::from_fn(|row| {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        [columns[0], columns[1]]
    });

    BoardLayout {
        tiles,
        restart: centered_rect_by_size(rows[ROWS], RESTART_WIDTH, RESTART_HEIGHT),
    }
}

/// Which target, if any, sits under the cell at `x`/`y`.
pub fn hit_test(layout: &BoardLayout, x: u16, y: u16) -> Option<Target> {
    if contains(layout.restart, x, y) {
        return Some(Target::Restart);
    }
    (0..ROWS)
        .flat_map(|row| [Column::Russian, Column::English].map(|column| (row, column)))
        .find(|&(row, column)| contains(layout.tile(row, column), x, y))
        .map(|(row, column)| Target::Tile { row, column })
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && y >= rect.y
        && u32::from(x) < u32::from(rect.x) + u32::from(rect.width)
        && u32::from(y) < u32::from(rect.y) + u32::from(rect.height)
}
