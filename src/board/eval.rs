use super::pst::square_bonus;
use super::Board;

/// Centipawns per legal move available to the side to move.
pub const MOBILITY_WEIGHT: i32 = 2;

impl Board {
    /// Static evaluation in centipawns, positive when White is better.
    ///
    /// Material plus piece-square bonuses for every piece, and a small
    /// mobility term for the side to move.
    pub fn evaluate(&mut self) -> i32 {
        let mobility = self.generate_moves().len() as i32;
        self.material_and_placement() + MOBILITY_WEIGHT * mobility * self.turn.sign()
    }

    /// Evaluation from the point of view of the side to move.
    pub(crate) fn eval_for_side(&mut self) -> i32 {
        self.evaluate() * self.turn.sign()
    }

    pub(crate) fn material_and_placement(&self) -> i32 {
        self.pieces()
            .map(|(sq, color, piece)| {
                (piece.value() + square_bonus(piece, color, sq)) * color.sign()
            })
            .sum()
    }
}
