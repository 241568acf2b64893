use std::fmt;

use super::history::{HistoryEntry, PositionCounts};
use super::types::{CastlingRights, Color, Piece, Square, BOARD_SLOTS};

/// Colour of a board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareColor {
    Light,
    Dark,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess position together with the moves that led to it.
///
/// Pieces live on a 128-slot 0x88 array. The history stack records enough
/// state to unmake every move back to the last `load`.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; BOARD_SLOTS],
    pub(crate) turn: Color,
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) ep_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) move_number: u32,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) position_counts: PositionCounts,
    pub(crate) headers: Vec<(String, String)>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            for (color, back, pawns) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(home), Some(pawn_sq)) =
                    (Square::new(back, file), Square::new(pawns, file))
                {
                    board.set_piece(home, color, piece);
                    board.set_piece(pawn_sq, color, Piece::Pawn);
                }
            }
        }
        board.castling = CastlingRights::all();
        board.record_position();
        board
    }

    /// An empty board with White to move.
    pub fn empty() -> Self {
        Board {
            squares: [None; BOARD_SLOTS],
            turn: Color::White,
            kings: [None; 2],
            castling: CastlingRights::empty(),
            ep_square: None,
            halfmove_clock: 0,
            move_number: 1,
            history: Vec::new(),
            position_counts: PositionCounts::new(),
            headers: Vec::new(),
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
    }

    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].take()
    }

    /// Piece and colour on a square.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.get(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Place a piece, replacing whatever stood there.
    ///
    /// Returns false (and leaves the board alone) when the piece is a king
    /// and that colour already has a king on another square.
    pub fn put(&mut self, color: Color, piece: Piece, sq: Square) -> bool {
        if piece == Piece::King {
            if let Some(existing) = self.kings[color.index()] {
                if existing != sq {
                    return false;
                }
            }
        }

        if let Some((old_color, Piece::King)) = self.get(sq) {
            self.kings[old_color.index()] = None;
        }
        self.set_piece(sq, color, piece);
        self.after_setup_change();
        true
    }

    /// Remove and return the piece on a square.
    pub fn remove(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let removed = self.take_piece(sq);
        if let Some((color, Piece::King)) = removed {
            self.kings[color.index()] = None;
        }
        if removed.is_some() {
            self.after_setup_change();
        }
        removed
    }

    /// Empty the board and forget history and headers.
    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    /// Return to the standard starting position.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Keep castling rights and the en passant target consistent with a
    /// placement edited by hand, and mark the game as set up. Before any move
    /// is played the edited position becomes the single counted occurrence.
    fn after_setup_change(&mut self) {
        for color in Color::BOTH {
            let back = color.back_rank();
            let king_home = Square::new(back, 4);
            if king_home.and_then(|sq| self.get(sq)) != Some((color, Piece::King)) {
                self.castling.remove(CastlingRights::for_color(color));
                continue;
            }
            for (kingside, file) in [(true, 7), (false, 0)] {
                let corner = Square::new(back, file);
                if corner.and_then(|sq| self.get(sq)) != Some((color, Piece::Rook)) {
                    self.castling.remove(CastlingRights::flag(color, kingside));
                }
            }
        }

        if let Some(ep) = self.ep_square {
            let push = self.turn.pawn_push();
            let victim = ep.offset(-push);
            let origin = ep.offset(push);
            let intact = self.is_empty(ep)
                && origin.map_or(false, |sq| self.is_empty(sq))
                && victim.and_then(|sq| self.get(sq))
                    == Some((self.turn.opponent(), Piece::Pawn));
            if !intact {
                self.ep_square = None;
            }
        }

        if self.history.is_empty() {
            self.position_counts = PositionCounts::new();
            self.record_position();
        }
        self.update_setup_headers();
    }

    /// Side to move.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// En passant target square recorded after a two-square pawn advance.
    #[must_use]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.ep_square
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full move number, starting at 1 and incremented after Black moves.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    #[must_use]
    pub fn square_color(&self, sq: Square) -> SquareColor {
        if sq.is_light() {
            SquareColor::Light
        } else {
            SquareColor::Dark
        }
    }

    /// Every occupied square, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.get(sq)
                .map(|(color, piece)| (sq, color, piece))
        })
    }

    /// Text diagram of the board, rank 8 at the top.
    #[must_use]
    pub fn ascii(&self) -> String {
        let mut out = String::from("   +------------------------+\n");
        for rank in (0..8).rev() {
            out.push(' ');
            out.push((b'1' + rank as u8) as char);
            out.push_str(" |");
            for file in 0..8 {
                let symbol = Square::new(rank, file)
                    .and_then(|sq| self.get(sq))
                    .map_or('.', |(color, piece)| piece.to_fen_char(color));
                out.push(' ');
                out.push(symbol);
                out.push(' ');
            }
            out.push_str("|\n");
        }
        out.push_str("   +------------------------+\n");
        out.push_str("     a  b  c  d  e  f  g  h");
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ascii())
    }
}
