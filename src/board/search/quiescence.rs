use super::constants::MAX_QSEARCH_DEPTH;
use super::move_order::order_moves;
use super::SearchContext;
use crate::board::Board;

impl SearchContext {
    /// Quiescence search: only captures until the position is quiet.
    /// Returns a score from the side to move's perspective.
    pub(crate) fn quiesce(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        qdepth: u32,
    ) -> i32 {
        self.nodes += 1;

        let stand_pat = board.eval_for_side();
        if qdepth >= MAX_QSEARCH_DEPTH || self.deadline.expired() {
            return stand_pat;
        }
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let moves = board.generate_captures();
        let moves = order_moves(board, moves);
        for mv in moves {
            let score = {
                let mut child = board.apply(mv);
                -self.quiesce(&mut child, -beta, -alpha, qdepth + 1)
            };
            if score >= beta {
                return score;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}
