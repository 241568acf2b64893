//! Move type and move flags.

use std::fmt;

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

bitflags! {
    /// Kind of a move. Every flag except `NORMAL` may combine with others
    /// (a promotion that captures carries both `CAPTURE` and `PROMOTION`).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MoveFlags: u8 {
        const NORMAL = 1 << 0;
        const CAPTURE = 1 << 1;
        const BIG_PAWN = 1 << 2;
        const EP_CAPTURE = 1 << 3;
        const PROMOTION = 1 << 4;
        const KSIDE_CASTLE = 1 << 5;
        const QSIDE_CASTLE = 1 << 6;
    }
}

/// A fully described move.
///
/// Moves carry the moving piece and any captured piece so they can be
/// reverted and rendered without consulting the board again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub flags: MoveFlags,
}

impl Move {
    /// Build a move; `NORMAL` is set when no other flag applies.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        color: Color,
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<Piece>,
        mut flags: MoveFlags,
    ) -> Self {
        if captured.is_some() {
            flags |= MoveFlags::CAPTURE;
        }
        if promotion.is_some() {
            flags |= MoveFlags::PROMOTION;
        }
        if flags.is_empty() {
            flags = MoveFlags::NORMAL;
        }
        Move {
            color,
            from,
            to,
            piece,
            captured,
            promotion,
            flags,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Promotion piece, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub fn is_capture(self) -> bool {
        self.flags.intersects(MoveFlags::CAPTURE | MoveFlags::EP_CAPTURE)
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.flags.contains(MoveFlags::EP_CAPTURE)
    }

    /// Returns true if this move is a two-square pawn advance
    #[inline]
    #[must_use]
    pub fn is_big_pawn(self) -> bool {
        self.flags.contains(MoveFlags::BIG_PAWN)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub fn is_castling(self) -> bool {
        self.flags
            .intersects(MoveFlags::KSIDE_CASTLE | MoveFlags::QSIDE_CASTLE)
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub fn is_castle_kingside(self) -> bool {
        self.flags.contains(MoveFlags::KSIDE_CASTLE)
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub fn is_castle_queenside(self) -> bool {
        self.flags.contains(MoveFlags::QSIDE_CASTLE)
    }

    /// Returns true if this move promotes a pawn
    #[inline]
    #[must_use]
    pub fn is_promotion(self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    /// Returns true if this move is tactical (capture or promotion)
    #[inline]
    #[must_use]
    pub fn is_tactical(self) -> bool {
        self.is_capture() || self.is_promotion()
    }

    /// Square of the pawn removed by an en passant capture.
    #[inline]
    #[must_use]
    pub(crate) fn en_passant_victim(self) -> Square {
        Square::new(self.from.rank(), self.to.file()).unwrap_or(self.to)
    }

    /// Rook origin and destination for a castling move.
    #[must_use]
    pub(crate) fn castling_rook(self) -> Option<(Square, Square)> {
        let rank = self.from.rank();
        if self.is_castle_kingside() {
            Some((Square::new(rank, 7)?, Square::new(rank, 5)?))
        } else if self.is_castle_queenside() {
            Some((Square::new(rank, 0)?, Square::new(rank, 3)?))
        } else {
            None
        }
    }

    /// Long algebraic coordinates, e.g. `e2e4` or `e7e8q`.
    #[must_use]
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_flags_default_to_normal() {
        let mv = Move::new(
            Color::White,
            sq("g1"),
            sq("f3"),
            Piece::Knight,
            None,
            None,
            MoveFlags::empty(),
        );
        assert_eq!(mv.flags, MoveFlags::NORMAL);
        assert!(!mv.is_tactical());
        assert_eq!(mv.to_string(), "g1f3");
    }

    #[test]
    fn test_capture_promotion_combines_flags() {
        let mv = Move::new(
            Color::White,
            sq("g7"),
            sq("h8"),
            Piece::Pawn,
            Some(Piece::Rook),
            Some(Piece::Queen),
            MoveFlags::empty(),
        );
        assert!(mv.flags.contains(MoveFlags::CAPTURE | MoveFlags::PROMOTION));
        assert!(!mv.flags.contains(MoveFlags::NORMAL));
        assert_eq!(mv.to_string(), "g7h8q");
    }

    #[test]
    fn test_castling_rook_squares() {
        let mv = Move::new(
            Color::Black,
            Square::E8,
            Square::C8,
            Piece::King,
            None,
            None,
            MoveFlags::QSIDE_CASTLE,
        );
        assert_eq!(mv.castling_rook(), Some((Square::A8, Square::D8)));
    }

    #[test]
    fn test_en_passant_victim() {
        let mv = Move::new(
            Color::White,
            sq("e5"),
            sq("d6"),
            Piece::Pawn,
            Some(Piece::Pawn),
            None,
            MoveFlags::EP_CAPTURE,
        );
        assert_eq!(mv.en_passant_victim(), sq("d5"));
        assert!(mv.is_capture());
    }
}
