use super::constants::MATE_SCORE;
use super::SearchContext;
use crate::board::{Board, Color, Move};

impl SearchContext {
    /// Plain fixed-depth minimax. Scores are from White's point of view.
    pub(crate) fn minimax(&mut self, board: &mut Board, depth: u32, ply: i32) -> i32 {
        self.nodes += 1;
        if self.deadline.expired() {
            return board.evaluate();
        }

        let moves = board.generate_moves();
        if moves.is_empty() {
            let score = if board.is_check() { -(MATE_SCORE - ply) } else { 0 };
            return score * board.turn().sign();
        }
        if depth == 0 {
            return board.evaluate();
        }

        let maximizing = board.turn() == Color::White;
        let scores = moves.into_iter().map(|mv| {
            let mut child = board.apply(mv);
            self.minimax(&mut child, depth - 1, ply + 1)
        });
        let best = if maximizing { scores.max() } else { scores.min() };
        best.unwrap_or(0)
    }

    /// Root of the minimax search. The root always maximizes White's score,
    /// whichever side is to move.
    pub(crate) fn minimax_root(&mut self, board: &mut Board, depth: u32) -> Option<(Move, i32)> {
        let depth = depth.max(1);
        let moves = board.generate_moves();
        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            let score = {
                let mut child = board.apply(mv);
                self.minimax(&mut child, depth - 1, 1)
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            if self.deadline.expired() {
                break;
            }
        }
        best
    }
}
