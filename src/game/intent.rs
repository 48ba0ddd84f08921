//! Intents for the matching game.

use crate::game::board::Column;
use crate::game::vocabulary::WordPair;
use crate::mvi::Intent;

/// Intents that can be dispatched to the match reducer.
///
/// Shuffles are drawn by the caller so the reducer stays pure.
#[derive(Debug, Clone)]
pub enum MatchIntent {
    /// First round of a fresh game.
    Start { shuffled: Vec<WordPair> },

    /// A tile in the given column was tapped.
    TapTile { word: WordPair, column: Column },

    /// Player asked for a new round.
    Restart { shuffled: Vec<WordPair> },
}

impl Intent for MatchIntent {}
