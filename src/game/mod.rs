//! Matching game core.
//!
//! The player arms a Russian word, then taps its English translation. The
//! core knows nothing about terminals; anything that can call
//! [`MatchController`] and read a [`Board`] can host it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Round state (shuffle, armed word, matches, round number)
//! - `intent.rs` - Start, TapTile, Restart
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Randomness, dispatch and change notification

mod board;
mod controller;
mod intent;
mod reducer;
mod shuffle;
mod state;
mod vocabulary;

pub use board::{slot_index, Board, Column, Tile, ROWS, SLOT_LAYOUT};
pub use controller::MatchController;
pub use intent::MatchIntent;
pub use reducer::MatchReducer;
pub use shuffle::shuffle;
pub use state::{MatchState, MatchedPair};
pub use vocabulary::{WordPair, VOCABULARY};
