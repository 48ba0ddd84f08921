use crate::game::{Board, Column};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MATCHED_BG};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = "Arrows/Click: Select  Enter: Tap  R: Restart  Q: Quit";

/// Round progress on the left, key hints on the right.
pub struct Footer {
    matched: usize,
    shown: usize,
    armed: Option<&'static str>,
}

impl Footer {
    /// Counts only the pairs on screen: a Russian tile and its English twin.
    pub fn from_board(board: &Board) -> Self {
        let russian = || board.tiles().filter(|t| t.column == Column::Russian);
        Self {
            matched: russian().filter(|t| t.matched).count(),
            shown: russian().count(),
            armed: russian().find(|t| t.armed).map(|t| t.label),
        }
    }

    pub fn progress(&self) -> String {
        format!("Matched {}/{}", self.matched, self.shown)
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let done = self.shown > 0 && self.matched == self.shown;
        let progress_style = if done {
            Style::default().fg(MATCHED_BG).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.progress(), progress_style),
        ];
        if let Some(word) = self.armed {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("Armed: {word}"),
                Style::default().fg(ACCENT),
            ));
        }

        // Hints go right-aligned when there is room; chars, not bytes, for Cyrillic.
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let room = usize::from(width.saturating_sub(2)).saturating_sub(used);
        let hints_width = HINTS.chars().count() + 1;
        if room >= hints_width {
            spans.push(Span::raw(" ".repeat(room - hints_width)));
            spans.push(Span::styled(
                HINTS,
                text_style.add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MatchState, MatchedPair, VOCABULARY};

    fn board(matched: &[MatchedPair], armed: Option<&'static str>) -> Board {
        Board::from_state(&MatchState {
            shuffled: VOCABULARY.to_vec(),
            selected_russian: armed,
            matched: matched.to_vec(),
            round: 1,
        })
    }

    #[test]
    fn fresh_round_has_nothing_matched() {
        let footer = Footer::from_board(&board(&[], None));
        assert_eq!(footer.progress(), "Matched 0/4");
        assert_eq!(footer.armed, None);
    }

    #[test]
    fn counts_matched_pairs_and_armed_word() {
        let cat = MatchedPair {
            russian: "Кот",
            english: "Cat",
            id: 1,
        };
        let footer = Footer::from_board(&board(&[cat], Some("Дом")));
        assert_eq!(footer.progress(), "Matched 1/4");
        assert_eq!(footer.armed, Some("Дом"));
    }

    #[test]
    fn off_screen_matches_are_not_counted() {
        let monday = MatchedPair {
            russian: "Понедельник",
            english: "Monday",
            id: 12,
        };
        let footer = Footer::from_board(&board(&[monday], Some("Понедельник")));
        assert_eq!(footer.progress(), "Matched 0/4");
        assert_eq!(footer.armed, None);
    }

    #[test]
    fn short_board_counts_only_filled_slots() {
        let state = MatchState {
            shuffled: VOCABULARY[..2].to_vec(),
            ..MatchState::default()
        };
        let footer = Footer::from_board(&Board::from_state(&state));
        assert_eq!(footer.progress(), "Matched 0/2");
    }
}
