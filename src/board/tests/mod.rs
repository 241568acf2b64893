//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Performance tests for move generation
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `status.rs` - Game status and SAN/PGN flows over whole games
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod make_unmake;

use crate::board::{Board, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn play_uci(board: &mut Board, moves: &[&str]) {
    for uci in moves {
        board
            .make_move_uci(uci)
            .unwrap_or_else(|e| panic!("{uci}: {e}"));
    }
}
