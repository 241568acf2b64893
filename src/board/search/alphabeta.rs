use super::constants::{INFINITY, MATE_SCORE};
use super::move_order::order_moves;
use super::SearchContext;
use crate::board::{Board, Move};

impl SearchContext {
    /// Negamax alpha-beta. Scores are relative to the side to move.
    pub(crate) fn alphabeta(
        &mut self,
        board: &mut Board,
        depth: u32,
        ply: i32,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if self.deadline.expired() {
            return board.eval_for_side();
        }

        let moves = board.generate_moves();
        if moves.is_empty() {
            return if board.is_check() { -(MATE_SCORE - ply) } else { 0 };
        }
        if depth == 0 {
            return if self.quiescence {
                self.quiesce(board, alpha, beta, 0)
            } else {
                board.eval_for_side()
            };
        }

        let mut best = -INFINITY;
        for mv in order_moves(board, moves) {
            let score = {
                let mut child = board.apply(mv);
                -self.alphabeta(&mut child, depth - 1, ply + 1, -beta, -alpha)
            };
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }

    /// Root of the alpha-beta search. The score is from the side to move's
    /// perspective.
    pub(crate) fn alphabeta_root(&mut self, board: &mut Board, depth: u32) -> Option<(Move, i32)> {
        let depth = depth.max(1);
        let moves = board.generate_moves();
        let mut alpha = -INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in order_moves(board, moves) {
            let score = {
                let mut child = board.apply(mv);
                -self.alphabeta(&mut child, depth - 1, 1, -INFINITY, -alpha)
            };
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            if score > alpha {
                alpha = score;
            }
            if self.deadline.expired() {
                break;
            }
        }
        best
    }
}
