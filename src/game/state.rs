//! State for one round of the matching game.

use crate::game::vocabulary::WordPair;
use crate::mvi::UiState;
use serde::Serialize;

/// A confirmed Russian-English correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    pub russian: &'static str,
    pub english: &'static str,
    pub id: u32,
}

/// Everything the controller tracks for the current round.
///
/// Replaced wholesale on restart; nothing here outlives the process.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    /// Presentation order for this round. Only the first four are shown.
    pub shuffled: Vec<WordPair>,
    /// Russian word waiting for an English tap.
    pub selected_russian: Option<&'static str>,
    /// Confirmed pairs, in the order they were matched. No duplicates.
    pub matched: Vec<MatchedPair>,
    pub round: u32,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            shuffled: Vec::new(),
            selected_russian: None,
            matched: Vec::new(),
            round: 1,
        }
    }
}

impl UiState for MatchState {}

impl MatchState {
    /// True if a Russian word is armed.
    pub fn is_armed(&self) -> bool {
        self.selected_russian.is_some()
    }

    /// Joint check on both words of `word`, whichever column it is shown in.
    pub fn is_matched(&self, word: &WordPair) -> bool {
        self.matched
            .iter()
            .any(|pair| pair.russian == word.russian && pair.english == word.english)
    }

    /// Looks up the shuffled entry pairing `russian` with `english`.
    pub fn find_pair(&self, russian: &str, english: &str) -> Option<&WordPair> {
        self.shuffled
            .iter()
            .find(|pair| pair.russian == russian && pair.english == english)
    }
}
