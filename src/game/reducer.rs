//! Reducer for the matching game.

use crate::game::board::Column;
use crate::game::intent::MatchIntent;
use crate::game::state::{MatchState, MatchedPair};
use crate::mvi::Reducer;

/// Reducer for round state transitions.
///
/// Pure function. The controller draws shuffles before dispatch and
/// notifies observers after it.
pub struct MatchReducer;

impl Reducer for MatchReducer {
    type State = MatchState;
    type Intent = MatchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MatchIntent::Start { shuffled } => MatchState {
                shuffled,
                ..MatchState::default()
            },

            MatchIntent::Restart { shuffled } => MatchState {
                shuffled,
                selected_russian: None,
                matched: Vec::new(),
                round: state.round.saturating_add(1),
            },

            // Last tap wins, even over a pending selection or a matched tile.
            MatchIntent::TapTile {
                word,
                column: Column::Russian,
            } => MatchState {
                selected_russian: Some(word.russian),
                ..state
            },

            MatchIntent::TapTile {
                word,
                column: Column::English,
            } => {
                let Some(russian) = state.selected_russian else {
                    return state;
                };
                let Some(id) = state.find_pair(russian, word.english).map(|pair| pair.id) else {
                    // No match: the selection stays armed.
                    return state;
                };

                let mut matched = state.matched;
                let pair = MatchedPair {
                    russian,
                    english: word.english,
                    id,
                };
                if !matched
                    .iter()
                    .any(|m| m.russian == pair.russian && m.english == pair.english)
                {
                    matched.push(pair);
                }
                MatchState {
                    selected_russian: None,
                    matched,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{WordPair, VOCABULARY};

    fn cat() -> WordPair {
        VOCABULARY[0]
    }

    fn dog() -> WordPair {
        VOCABULARY[1]
    }

    fn started() -> MatchState {
        MatchReducer::reduce(
            MatchState::default(),
            MatchIntent::Start {
                shuffled: VOCABULARY[..4].to_vec(),
            },
        )
    }

    fn tap(state: MatchState, word: WordPair, column: Column) -> MatchState {
        MatchReducer::reduce(state, MatchIntent::TapTile { word, column })
    }

    #[test]
    fn start_resets_to_round_one() {
        let dirty = MatchState {
            selected_russian: Some("Кот"),
            round: 9,
            ..MatchState::default()
        };
        let state = MatchReducer::reduce(
            dirty,
            MatchIntent::Start {
                shuffled: VOCABULARY.to_vec(),
            },
        );
        assert_eq!(state.round, 1);
        assert_eq!(state.selected_russian, None);
        assert_eq!(state.shuffled.len(), 12);
    }

    #[test]
    fn russian_tap_arms_and_replaces() {
        let state = tap(started(), cat(), Column::Russian);
        assert_eq!(state.selected_russian, Some("Кот"));
        let state = tap(state, dog(), Column::Russian);
        assert_eq!(state.selected_russian, Some("Собака"));
    }

    #[test]
    fn english_tap_without_selection_is_noop() {
        let before = started();
        let after = tap(before.clone(), cat(), Column::English);
        assert_eq!(before, after);
    }

    #[test]
    fn matching_english_tap_records_pair() {
        let state = tap(started(), cat(), Column::Russian);
        let state = tap(state, cat(), Column::English);
        assert_eq!(
            state.matched,
            vec![MatchedPair {
                russian: "Кот",
                english: "Cat",
                id: 1
            }]
        );
        assert_eq!(state.selected_russian, None);
    }

    #[test]
    fn wrong_english_tap_keeps_selection_armed() {
        let armed = tap(started(), cat(), Column::Russian);
        let after = tap(armed.clone(), dog(), Column::English);
        assert_eq!(after, armed);
        assert_eq!(after.selected_russian, Some("Кот"));
    }

    #[test]
    fn rematch_clears_selection_without_duplicate() {
        let state = tap(started(), cat(), Column::Russian);
        let state = tap(state, cat(), Column::English);
        let state = tap(state, cat(), Column::Russian);
        let state = tap(state, cat(), Column::English);
        assert_eq!(state.matched.len(), 1);
        assert_eq!(state.selected_russian, None);
    }

    #[test]
    fn restart_at_max_round_stays_at_max() {
        let state = MatchState {
            round: u32::MAX,
            ..started()
        };
        let state = MatchReducer::reduce(
            state,
            MatchIntent::Restart {
                shuffled: VOCABULARY.to_vec(),
            },
        );
        assert_eq!(state.round, u32::MAX);
        assert!(state.matched.is_empty());
    }

    #[test]
    fn restart_clears_and_increments_round() {
        let state = tap(started(), cat(), Column::Russian);
        let state = tap(state, cat(), Column::English);
        let state = tap(state, dog(), Column::Russian);
        let state = MatchReducer::reduce(
            state,
            MatchIntent::Restart {
                shuffled: VOCABULARY.to_vec(),
            },
        );
        assert_eq!(state.round, 2);
        assert!(state.matched.is_empty());
        assert_eq!(state.selected_russian, None);
    }
}
