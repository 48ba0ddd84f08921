//! What the rendering surface draws: a fixed 4x2 grid of tiles.

use crate::game::state::MatchState;
use crate::game::vocabulary::WordPair;
use serde::Serialize;

/// Number of rows in the grid.
pub const ROWS: usize = 4;

/// Which side of the grid a tile sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Russian,
    English,
}

impl Column {
    pub fn index(self) -> usize {
        match self {
            Column::Russian => 0,
            Column::English => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Column::Russian => Column::English,
            Column::English => Column::Russian,
        }
    }

    /// The word a tile in this column displays.
    pub fn label(self, word: &WordPair) -> &'static str {
        match self {
            Column::Russian => word.russian,
            Column::English => word.english,
        }
    }
}

/// Shuffled index shown in each row as (russian, english).
///
/// Each of the first four shuffled words appears once per column, never
/// on the same row as itself.
pub const SLOT_LAYOUT: [[usize; 2]; ROWS] = [[0, 1], [2, 0], [3, 2], [1, 3]];

/// Shuffled index behind a grid cell, if the row exists.
pub fn slot_index(row: usize, column: Column) -> Option<usize> {
    SLOT_LAYOUT.get(row).map(|slots| slots[column.index()])
}

/// A drawable tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub word: WordPair,
    pub column: Column,
    pub label: &'static str,
    pub matched: bool,
    /// The Russian tile whose word is currently armed.
    pub armed: bool,
}

/// Snapshot of the grid for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub round: u32,
    /// `None` where the slot points past the shuffled list.
    pub rows: [[Option<Tile>; 2]; ROWS],
}

impl Board {
    pub fn from_state(state: &MatchState) -> Self {
        let tile = |row: usize, column: Column| -> Option<Tile> {
            let word = *state.shuffled.get(slot_index(row, column)?)?;
            Some(Tile {
                word,
                column,
                label: column.label(&word),
                matched: state.is_matched(&word),
                armed: column == Column::Russian && state.selected_russian == Some(word.russian),
            })
        };
        let rows = std::array::from_fn(|row| [tile(row, Column::Russian), tile(row, Column::English)]);
        Self {
            round: state.round,
            rows,
        }
    }

    pub fn tile(&self, row: usize, column: Column) -> Option<&Tile> {
        self.rows.get(row)?[column.index()].as_ref()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten().flatten()
    }
}
