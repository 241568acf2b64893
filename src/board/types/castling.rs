//! Castling rights type.

use bitflags::bitflags;

use super::piece::Color;
use super::square::Square;

bitflags! {
    /// Castling availability for both sides.
    ///
    /// A right only records that neither the king nor the matching rook has
    /// moved. Empty and unattacked transit squares are checked during move
    /// generation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE = 1 << 0;
        const WHITE_QUEENSIDE = 1 << 1;
        const BLACK_KINGSIDE = 1 << 2;
        const BLACK_QUEENSIDE = 1 << 3;

        const WHITE = Self::WHITE_KINGSIDE.bits() | Self::WHITE_QUEENSIDE.bits();
        const BLACK = Self::BLACK_KINGSIDE.bits() | Self::BLACK_QUEENSIDE.bits();
    }
}

impl CastlingRights {
    /// The flag for a single right.
    #[inline]
    #[must_use]
    pub const fn flag(color: Color, kingside: bool) -> Self {
        match (color, kingside) {
            (Color::White, true) => Self::WHITE_KINGSIDE,
            (Color::White, false) => Self::WHITE_QUEENSIDE,
            (Color::Black, true) => Self::BLACK_KINGSIDE,
            (Color::Black, false) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Both rights of one color.
    #[inline]
    #[must_use]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE,
            Color::Black => Self::BLACK,
        }
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub fn has(self, color: Color, kingside: bool) -> bool {
        self.contains(Self::flag(color, kingside))
    }

    /// Drop the right tied to a rook's home corner, if `sq` is one.
    pub(crate) fn clear_rook_corner(&mut self, color: Color, sq: Square) {
        let (kingside_corner, queenside_corner) = match color {
            Color::White => (Square::H1, Square::A1),
            Color::Black => (Square::H8, Square::A8),
        };
        if sq == kingside_corner {
            self.remove(Self::flag(color, true));
        } else if sq == queenside_corner {
            self.remove(Self::flag(color, false));
        }
    }

    /// FEN castling field (`KQkq` subset or `-`).
    #[must_use]
    pub fn to_fen(self) -> String {
        let mut out = String::with_capacity(4);
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.contains(flag) {
                out.push(c);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }

    /// Parse a FEN castling field: `-` alone, or distinct letters from `KQkq`.
    #[must_use]
    pub fn from_fen(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(Self::empty());
        }
        if field.is_empty() {
            return None;
        }
        let mut rights = Self::empty();
        for c in field.chars() {
            let flag = match c {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => return None,
            };
            if rights.contains(flag) {
                return None;
            }
            rights |= flag;
        }
        Some(rights)
    }
}
