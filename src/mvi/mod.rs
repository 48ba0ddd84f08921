//! Model-View-Intent (MVI) primitives.
//!
//! The game core is written as a unidirectional data flow so that any
//! rendering surface can drive it without owning its rules.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of everything the view needs
//! - **Intent**: A tap, a restart, a fresh round
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
