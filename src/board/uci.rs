//! Coordinate move input (`e2e4`, `e7e8q`) and the combined move entry point.

use super::error::MoveParseError;
use super::movegen::MoveQuery;
use super::types::{Move, Piece, Square};
use super::Board;

/// The forms in which a caller may describe a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput<'a> {
    /// Long algebraic coordinates such as `e2e4` or `e7e8q`.
    Uci(&'a str),
    /// Standard algebraic notation, parsed permissively.
    San(&'a str),
    /// Origin and destination squares with an optional promotion piece.
    Coords {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
}

impl Board {
    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use chesskit::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if !uci.is_ascii() || uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: uci.chars().count(),
            });
        }

        let from: Square = uci[0..2]
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            })?;
        let to: Square = uci[2..4]
            .parse()
            .map_err(|_| MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            })?;

        let promotion = match uci[4..].chars().next() {
            Some(c) => match Piece::from_char(c) {
                Some(piece) if !matches!(piece, Piece::Pawn | Piece::King) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
            None => None,
        };

        self.find_coordinate_move(from, to, promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }

    /// Parse a UCI move and play it in one call.
    ///
    /// # Example
    /// ```
    /// use chesskit::board::Board;
    ///
    /// let mut board = Board::new();
    /// board.make_move_uci("e2e4").unwrap();
    /// board.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.play(mv);
        Ok(mv)
    }

    /// Play a move given in any accepted form.
    ///
    /// Returns `None` and leaves the board untouched when the input does not
    /// describe a legal move.
    pub fn try_move(&mut self, input: MoveInput<'_>) -> Option<Move> {
        let mv = match input {
            MoveInput::Uci(text) => self.parse_move(text).ok()?,
            MoveInput::San(text) => self.parse_san(text, false).ok()?,
            MoveInput::Coords {
                from,
                to,
                promotion,
            } => self.find_coordinate_move(from, to, promotion)?,
        };
        self.play(mv);
        Some(mv)
    }

    /// The legal move between two squares. A missing promotion piece on a
    /// promoting move does not match.
    fn find_coordinate_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Option<Move> {
        self.moves(&MoveQuery::from_square(from))
            .into_iter()
            .find(|mv| mv.to == to && mv.promotion == promotion)
    }
}
