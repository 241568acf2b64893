//! Game outcome detection.

use super::types::{Color, Piece};
use super::Board;

/// Why a game ended in a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawReason {
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

/// State of the game in the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a legal reply.
    Check,
    /// The game is over; the payload is the winner.
    Checkmate(Color),
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate(_) | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }
}

impl Board {
    /// True if the side to move is in check.
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.is_in_check(self.turn)
    }

    pub fn is_checkmate(&mut self) -> bool {
        self.is_check() && self.generate_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.is_check() && self.generate_moves().is_empty()
    }

    /// Neither side can possibly mate: bare kings, a single minor piece, or
    /// only bishops that all stand on squares of one colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut total = 0;
        let mut minors = 0;
        let mut bishop_shades = [0usize; 2];

        for (sq, _, piece) in self.pieces() {
            total += 1;
            match piece {
                Piece::King => {}
                Piece::Knight => minors += 1,
                Piece::Bishop => {
                    minors += 1;
                    bishop_shades[usize::from(sq.is_light())] += 1;
                }
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
            }
        }

        if total <= 2 || (total == 3 && minors == 1) {
            return true;
        }
        let bishops = bishop_shades[0] + bishop_shades[1];
        bishops + 2 == total && (bishop_shades[0] == 0 || bishop_shades[1] == 0)
    }

    /// The current position has occurred at least three times.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Fifty moves by each side without a capture or pawn move.
    #[must_use]
    pub fn is_draw_by_fifty_moves(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub fn is_draw(&mut self) -> bool {
        self.is_draw_by_fifty_moves()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    pub fn is_game_over(&mut self) -> bool {
        self.status().is_over()
    }

    /// Classify the current position.
    pub fn status(&mut self) -> GameStatus {
        let in_check = self.is_check();
        let has_moves = !self.generate_moves().is_empty();

        match (in_check, has_moves) {
            (true, false) => return GameStatus::Checkmate(self.turn.opponent()),
            (false, false) => return GameStatus::Stalemate,
            _ => {}
        }

        if self.is_draw_by_fifty_moves() {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else if self.is_threefold_repetition() {
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }
}
