use super::types::Move;
use super::Board;

impl Board {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let mut child = self.apply(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }

    /// Leaf counts below each root move.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let moves = self.generate_moves();
        moves
            .into_iter()
            .map(|mv| {
                let mut child = self.apply(mv);
                (mv, child.perft(depth - 1))
            })
            .collect()
    }
}
