use crate::game::board::{slot_index, Board, Column};
use crate::game::intent::MatchIntent;
use crate::game::reducer::MatchReducer;
use crate::game::shuffle::shuffle;
use crate::game::state::MatchState;
use crate::game::vocabulary::{WordPair, VOCABULARY};
use crate::mvi::Reducer;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Listener = Box<dyn FnMut(&MatchState)>;

/// Owns the round state and is the only way to change it.
///
/// Every operation runs to completion on the caller's thread. Observers
/// registered with [`subscribe`](Self::subscribe) hear about each change
/// after it has been applied, and never about no-ops.
pub struct MatchController {
    vocabulary: Vec<WordPair>,
    state: MatchState,
    rng: StdRng,
    listeners: Vec<Listener>,
}

impl MatchController {
    /// Game over the built-in vocabulary. `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_vocabulary(VOCABULARY.to_vec(), rng)
    }

    /// Game over any word list, shuffled with `rng`.
    pub fn with_vocabulary(vocabulary: Vec<WordPair>, rng: StdRng) -> Self {
        let mut controller = Self {
            vocabulary,
            state: MatchState::default(),
            rng,
            listeners: Vec::new(),
        };
        let shuffled = controller.draw_shuffle();
        controller.state = MatchReducer::reduce(
            std::mem::take(&mut controller.state),
            MatchIntent::Start { shuffled },
        );
        controller
    }

    /// Resume from an existing state, e.g. a fixed layout.
    pub fn from_state(vocabulary: Vec<WordPair>, state: MatchState, rng: StdRng) -> Self {
        Self {
            vocabulary,
            state,
            rng,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn board(&self) -> Board {
        Board::from_state(&self.state)
    }

    /// Register an observer called after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&MatchState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Handle a tap on `word` shown in `column`. Returns true if state changed.
    pub fn on_tile_tapped(&mut self, word: &WordPair, column: Column) -> bool {
        let changed = self.dispatch(MatchIntent::TapTile {
            word: *word,
            column,
        });
        if !changed {
            tracing::trace!(word = column.label(word), ?column, "tap left state unchanged");
        } else if column == Column::English && !self.state.is_armed() {
            tracing::debug!(
                english = word.english,
                matched = self.state.matched.len(),
                "pair matched"
            );
        }
        changed
    }

    /// Tap whatever is displayed at `row`/`column`. Empty slots are ignored.
    pub fn tap_slot(&mut self, row: usize, column: Column) -> bool {
        let Some(word) = slot_index(row, column)
            .and_then(|idx| self.state.shuffled.get(idx))
            .copied()
        else {
            return false;
        };
        self.on_tile_tapped(&word, column)
    }

    /// Start a new round with a fresh shuffle.
    pub fn restart(&mut self) {
        let shuffled = self.draw_shuffle();
        self.dispatch(MatchIntent::Restart { shuffled });
        tracing::debug!(round = self.state.round, "round restarted");
    }

    /// Whether the pairing behind `word` has been confirmed this round.
    ///
    /// Both columns use the same joint check on Russian and English.
    pub fn is_tile_matched(&self, word: &WordPair) -> bool {
        self.state.is_matched(word)
    }

    fn draw_shuffle(&mut self) -> Vec<WordPair> {
        shuffle(&self.vocabulary, &mut self.rng)
    }

    fn dispatch(&mut self, intent: MatchIntent) -> bool {
        let next = MatchReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return false;
        }
        self.state = next;
        for listener in &mut self.listeners {
            listener(&self.state);
        }
        true
    }
}
