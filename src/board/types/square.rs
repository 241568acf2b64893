//! Square type on a 0x88 board.
//!
//! A square is stored as `rank * 16 + file`. The upper nibble holds the rank
//! and the lower nibble the file, so any index with a bit of `0x88` set lies
//! off the board and a single mask test detects it.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Mask of the bits that are never set for an on-board square.
pub(crate) const OFF_BOARD: usize = 0x88;

/// Number of addressable slots in a 0x88 board array.
pub(crate) const BOARD_SLOTS: usize = 128;

/// Returns true if the raw 0x88 index is one of the 64 real squares.
#[inline]
#[must_use]
pub(crate) const fn on_board(idx: usize) -> bool {
    idx < BOARD_SLOTS && idx & OFF_BOARD == 0
}

/// A square on the chess board (0x88 index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0x00);
    pub const B1: Square = Square(0x01);
    pub const C1: Square = Square(0x02);
    pub const D1: Square = Square(0x03);
    pub const E1: Square = Square(0x04);
    pub const F1: Square = Square(0x05);
    pub const G1: Square = Square(0x06);
    pub const H1: Square = Square(0x07);
    pub const A8: Square = Square(0x70);
    pub const B8: Square = Square(0x71);
    pub const C8: Square = Square(0x72);
    pub const D8: Square = Square(0x73);
    pub const E8: Square = Square(0x74);
    pub const F8: Square = Square(0x75);
    pub const G8: Square = Square(0x76);
    pub const H8: Square = Square(0x77);

    /// Create a square from rank and file (both 0-7), or `None` if out of range.
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 16 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a raw 0x88 index.
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if on_board(idx) {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Rank 0-7, where 0 is rank 1.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 4) as usize
    }

    /// File 0-7, where 0 is file a.
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 0x0F) as usize
    }

    /// The raw 0x88 index, usable directly into a 128-slot board array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Dense 0-63 index (a1=0, b1=1, ..., h8=63).
    #[inline]
    #[must_use]
    pub const fn dense_index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Flip the square vertically (a1 <-> a8).
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 0x70)
    }

    /// Step by a raw 0x88 offset, returning `None` when the step leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i16) -> Option<Self> {
        let target = self.0 as i16 + delta;
        if target < 0 || !on_board(target as usize) {
            None
        } else {
            Some(Square(target as u8))
        }
    }

    /// True for light squares (h1, a8, ...).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.rank() + self.file()) % 2 == 1
    }

    /// File letter `a`-`h`.
    #[must_use]
    pub fn file_char(self) -> char {
        (b'a' + self.file() as u8) as char
    }

    /// Rank digit `1`-`8`.
    #[must_use]
    pub fn rank_char(self) -> char {
        (b'1' + self.rank() as u8) as char
    }

    /// All 64 squares, a1 first, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SLOTS)
            .filter(|&idx| on_board(idx))
            .map(|idx| Square(idx as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((rank * 16 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => {
                Ok(Square(((r - b'1') * 16 + (f - b'a')) as u8))
            }
            _ => Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}
