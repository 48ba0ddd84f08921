use crate::game::{Board, Column, MatchController, ROWS};
use crate::ui::layout::Target;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// Keyboard focus movement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}

pub struct App {
    should_quit: bool,
    controller: MatchController,
    focus: Target,
    /// Column to return to when focus leaves the restart control.
    last_column: Column,
    size: Option<(u16, u16)>,
    show_round: bool,
    /// Raised by the controller's observer and by anything else visible.
    redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut controller: MatchController, show_round: bool) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&redraw);
        controller.subscribe(move |_| flag.set(true));
        Self {
            should_quit: false,
            controller,
            focus: Target::Tile {
                row: 0,
                column: Column::Russian,
            },
            last_column: Column::Russian,
            size: None,
            show_round,
            redraw,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn board(&self) -> Board {
        self.controller.board()
    }

    pub fn round(&self) -> u32 {
        self.controller.round()
    }

    pub fn show_round(&self) -> bool {
        self.show_round
    }

    pub fn focus(&self) -> Target {
        self.focus
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Returns whether a frame is due and lowers the flag.
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.redraw.set(true);
    }

    /// Remember the area of the frame just drawn, so clicks are hit-tested
    /// against what is actually on screen.
    pub fn on_frame_drawn(&mut self, area: Rect) {
        self.size = Some((area.width, area.height));
    }

    pub fn move_focus(&mut self, step: FocusMove) {
        let next = match (self.focus, step) {
            (Target::Tile { row, column }, FocusMove::Up) => Target::Tile {
                row: row.saturating_sub(1),
                column,
            },
            (Target::Tile { row, .. }, FocusMove::Down) if row + 1 >= ROWS => Target::Restart,
            (Target::Tile { row, column }, FocusMove::Down) => Target::Tile {
                row: row + 1,
                column,
            },
            (Target::Tile { row, column }, FocusMove::Left | FocusMove::Right) => Target::Tile {
                row,
                column: column.other(),
            },
            (Target::Restart, FocusMove::Up) => Target::Tile {
                row: ROWS - 1,
                column: self.last_column,
            },
            (Target::Restart, _) => Target::Restart,
        };
        self.set_focus(next);
    }

    /// Tap or restart, whichever has focus.
    pub fn activate(&mut self) {
        match self.focus {
            Target::Tile { row, column } => {
                self.controller.tap_slot(row, column);
            }
            Target::Restart => self.controller.restart(),
        }
    }

    /// Tap the tile at `row`/`column` and move focus there.
    pub fn tap(&mut self, row: usize, column: Column) {
        self.set_focus(Target::Tile { row, column });
        self.controller.tap_slot(row, column);
    }

    pub fn restart(&mut self) {
        self.controller.restart();
    }

    fn set_focus(&mut self, focus: Target) {
        if let Target::Tile { column, .. } = focus {
            self.last_column = column;
        }
        if focus != self.focus {
            self.focus = focus;
            self.redraw.set(true);
        }
    }
}
