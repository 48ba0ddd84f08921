use crate::ui::app::{App, FocusMove};
use crate::ui::layout::{board_layout, body_rect, hit_test, Target};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives here as a key.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up => app.move_focus(FocusMove::Up),
        KeyCode::Down => app.move_focus(FocusMove::Down),
        KeyCode::Left => app.move_focus(FocusMove::Left),
        KeyCode::Right => app.move_focus(FocusMove::Right),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

/// Left-button presses tap whatever is under the pointer.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some((cols, rows)) = app.size() else {
        return;
    };
    let layout = board_layout(body_rect(Rect::new(0, 0, cols, rows)));
    match hit_test(&layout, mouse.column, mouse.row) {
        Some(Target::Tile { row, column }) => app.tap(row, column),
        Some(Target::Restart) => app.restart(),
        None => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
