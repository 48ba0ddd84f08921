use crate::game::{Column, Tile, ROWS};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{board_layout, layout_regions, Target};
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, MATCHED_BG, MATCHED_TEXT, TILE_BORDER, TILE_TEXT,
};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

const RESTART_LABEL: &str = "Перезапустить";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.show_round().then(|| app.round()));
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let board = app.board();
    let layout = board_layout(body);
    for row in 0..ROWS {
        for column in [Column::Russian, Column::English] {
            // Empty slots draw nothing.
            let Some(tile) = board.tile(row, column) else {
                continue;
            };
            let focused = app.focus() == Target::Tile { row, column };
            let rect = layout.tile(row, column);
            frame.render_widget(tile_widget(tile, focused, rect.height), rect);
        }
    }

    let restart_focused = app.focus() == Target::Restart;
    frame.render_widget(
        centered_paragraph(RESTART_LABEL, layout.restart.height)
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .block(framed(restart_focused, Style::default().fg(ACCENT))),
        layout.restart,
    );

    let footer_widget = Footer::from_board(&board);
    frame.render_widget(footer_widget.widget(footer.width), footer);
}

fn tile_widget(tile: &Tile, focused: bool, height: u16) -> Paragraph<'static> {
    let text_style = if tile.matched {
        Style::default().fg(MATCHED_TEXT).bg(MATCHED_BG)
    } else {
        Style::default().fg(TILE_TEXT)
    };
    let border_style = if tile.armed {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TILE_BORDER)
    };
    centered_paragraph(tile.label, height)
        .style(text_style)
        .block(framed(focused, border_style))
}

fn framed(focused: bool, border_style: Style) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL);
    if focused {
        block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(FOCUS_BORDER).add_modifier(Modifier::BOLD))
    } else {
        block.border_style(border_style)
    }
}

/// One line of text, centered inside a bordered box of `height` rows.
fn centered_paragraph(text: &'static str, height: u16) -> Paragraph<'static> {
    let inner = height.saturating_sub(2);
    let pad = inner.saturating_sub(1) / 2;
    let mut lines: Vec<Line<'static>> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(text));
    Paragraph::new(lines).alignment(Alignment::Center)
}
