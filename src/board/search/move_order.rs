//! Move ordering utilities for search.

use super::constants::{CAPTURE_SCORE, CHECK_SCORE, PROMOTION_SCORE};
use crate::board::{Board, Move};

/// Ordering key: MVV-LVA for captures, then promotions, then checks.
pub(crate) fn move_score(board: &mut Board, mv: Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured {
        score += CAPTURE_SCORE + victim.value() - mv.piece.value();
    }
    if let Some(promo) = mv.promotion {
        score += PROMOTION_SCORE + promo.value();
    }
    if score == 0 && board.apply(mv).is_check() {
        score = CHECK_SCORE;
    }
    score
}

/// Sort moves best-first. The sort is stable, so equal keys keep
/// generation order.
pub(crate) fn order_moves(board: &mut Board, moves: Vec<Move>) -> Vec<Move> {
    let mut scored: Vec<(i32, Move)> = moves
        .into_iter()
        .map(|mv| (move_score(board, mv), mv))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}
