//! Small built-in opening book.
//!
//! Keys are the FEN placement field with `/` replaced by `_`; values are
//! candidate replies in UCI notation.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Move};

static BOOK: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: [(&str, &[&str]); 10] = [
        (
            "rnbqkbnr_pppppppp_8_8_8_8_PPPPPPPP_RNBQKBNR",
            &["e2e4", "d2d4", "g1f3", "c2c4"],
        ),
        (
            "rnbqkbnr_pppppppp_8_8_4P3_8_PPPP1PPP_RNBQKBNR",
            &["e7e5", "c7c5", "e7e6", "c7c6"],
        ),
        (
            "rnbqkbnr_pppppppp_8_8_3P4_8_PPP1PPPP_RNBQKBNR",
            &["d7d5", "g8f6"],
        ),
        (
            "rnbqkbnr_pppppppp_8_8_8_5N2_PPPPPPPP_RNBQKB1R",
            &["d7d5", "g8f6"],
        ),
        (
            "rnbqkbnr_pppppppp_8_8_2P5_8_PP1PPPPP_RNBQKBNR",
            &["e7e5", "g8f6", "c7c5"],
        ),
        (
            "rnbqkbnr_pppp1ppp_8_4p3_4P3_8_PPPP1PPP_RNBQKBNR",
            &["g1f3", "f1c4", "b1c3"],
        ),
        (
            "rnbqkbnr_pppp1ppp_8_4p3_4P3_5N2_PPPP1PPP_RNBQKB1R",
            &["b8c6", "g8f6"],
        ),
        (
            "r1bqkbnr_pppp1ppp_2n5_4p3_4P3_5N2_PPPP1PPP_RNBQKB1R",
            &["f1b5", "f1c4", "d2d4"],
        ),
        (
            "rnbqkbnr_pp1ppppp_8_2p5_4P3_8_PPPP1PPP_RNBQKBNR",
            &["g1f3", "b1c3"],
        ),
        (
            "rnbqkbnr_ppp1pppp_8_3p4_3P4_8_PPP1PPPP_RNBQKBNR",
            &["c2c4", "g1f3"],
        ),
    ];
    entries.into_iter().collect()
});

pub(crate) fn book_key(board: &Board) -> String {
    board.placement().replace('/', "_")
}

/// Candidate book moves for this position, legal ones only.
pub(crate) fn book_moves(board: &mut Board) -> Vec<Move> {
    let Some(candidates) = BOOK.get(book_key(board).as_str()) else {
        return Vec::new();
    };
    candidates
        .iter()
        .filter_map(|uci| board.parse_move(uci).ok())
        .collect()
}

/// Pick a random legal book move, if the position is in the book.
pub(crate) fn probe<R: Rng>(board: &mut Board, rng: &mut R) -> Option<Move> {
    book_moves(board).choose(rng).copied()
}
