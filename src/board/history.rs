use std::collections::HashMap;

use super::types::{CastlingRights, Color, Move, Square};

/// Scalar state captured before a move is made.
#[derive(Clone, Debug)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) ep_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) move_number: u32,
    pub(crate) turn: Color,
}

/// Occurrence counts keyed by the position part of a FEN string
/// (placement, side to move, castling, en passant).
#[derive(Clone, Debug, Default)]
pub(crate) struct PositionCounts {
    counts: HashMap<String, u32>,
}

impl PositionCounts {
    pub(crate) fn new() -> Self {
        PositionCounts {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, key: String) -> u32 {
        let entry = self.counts.entry(key).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }

    pub(crate) fn decrement(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(key);
            }
        }
    }
}
