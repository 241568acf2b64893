//! 0x88 attack and ray lookup tables.
//!
//! For any two on-board squares the difference `to - from` lies in
//! `-119..=119` and identifies the geometric relation between them uniquely.
//! `ATTACKS` records which piece types can ever reach across that difference
//! and `RAYS` the single step a slider takes to get there.

use once_cell::sync::Lazy;

use super::types::{Color, Piece, Square, BOARD_SLOTS};

/// Added to a square difference to index the tables.
const DIFF_OFFSET: i16 = 119;
const DIFF_SLOTS: usize = 239;

/// Raw 0x88 piece placement.
pub(crate) type Squares = [Option<(Color, Piece)>; BOARD_SLOTS];

#[inline]
fn slot(from: Square, to: Square) -> usize {
    (to.index() as i16 - from.index() as i16 + DIFF_OFFSET) as usize
}

pub(crate) static ATTACKS: Lazy<[u8; DIFF_SLOTS]> = Lazy::new(|| {
    let mut table = [0u8; DIFF_SLOTS];

    for diff in [15i16, 17, -15, -17] {
        table[(diff + DIFF_OFFSET) as usize] |= Piece::Pawn.mask();
    }

    for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King] {
        let reach = if piece.is_slider() { 7 } else { 1 };
        for &step in piece.offsets() {
            for distance in 1..=reach {
                table[(step * distance + DIFF_OFFSET) as usize] |= piece.mask();
            }
        }
    }
    table
});

pub(crate) static RAYS: Lazy<[i16; DIFF_SLOTS]> = Lazy::new(|| {
    let mut table = [0i16; DIFF_SLOTS];
    for &step in Piece::Queen.offsets() {
        for distance in 1..=7 {
            table[(step * distance + DIFF_OFFSET) as usize] = step;
        }
    }
    table
});

/// True if `piece` of `color` standing on `from` attacks `target`.
fn piece_attacks(
    squares: &Squares,
    from: Square,
    color: Color,
    piece: Piece,
    target: Square,
) -> bool {
    if from == target {
        return false;
    }
    let idx = slot(from, target);
    if ATTACKS[idx] & piece.mask() == 0 {
        return false;
    }

    match piece {
        Piece::Pawn => {
            let upward = target.index() > from.index();
            upward == (color == Color::White)
        }
        Piece::Knight | Piece::King => true,
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            let step = RAYS[idx];
            let mut cursor = from.index() as i16 + step;
            while cursor != target.index() as i16 {
                if squares[cursor as usize].is_some() {
                    return false;
                }
                cursor += step;
            }
            true
        }
    }
}

/// True if any piece of `by` attacks `target`.
pub(crate) fn square_attacked(squares: &Squares, target: Square, by: Color) -> bool {
    Square::all().any(|from| match squares[from.index()] {
        Some((color, piece)) if color == by => piece_attacks(squares, from, color, piece, target),
        _ => false,
    })
}

/// Squares of every piece of `by` attacking `target`.
pub(crate) fn square_attackers(squares: &Squares, target: Square, by: Color) -> Vec<Square> {
    Square::all()
        .filter(|&from| match squares[from.index()] {
            Some((color, piece)) if color == by => {
                piece_attacks(squares, from, color, piece, target)
            }
            _ => false,
        })
        .collect()
}
