//! Standard Algebraic Notation (SAN) support.
//!
//! SAN is the standard human-readable chess notation used in scoresheets,
//! books, and GUIs. Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#"
//!
//! # Examples
//! ```
//! use chesskit::board::Board;
//!
//! let mut board = Board::new();
//! let mv = board.parse_san("e4", true).unwrap();
//! assert_eq!(board.move_to_san(mv), "e4");
//! ```

use super::error::SanError;
use super::movegen::MoveQuery;
use super::types::{Move, Piece, Square};
use super::Board;

/// Pieces of a SAN token once decorations are removed.
#[derive(Debug, Default)]
struct SanParts {
    piece: Option<Piece>,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    to: Option<Square>,
    promotion: Option<Piece>,
}

/// SAN with promotion `=` and trailing check or annotation marks removed.
fn strip_san(san: &str) -> String {
    san.trim()
        .trim_end_matches(['+', '#', '!', '?'])
        .replace('=', "")
}

impl Board {
    /// Format a move in Standard Algebraic Notation.
    ///
    /// Returns notation like "e4", "Nf3", "Bxc6+", "O-O-O", "e8=Q#"
    #[must_use]
    pub fn move_to_san(&mut self, mv: Move) -> String {
        let legal = self.generate_moves();
        self.san_among(mv, &legal)
    }

    /// SAN for a move given the legal moves of the current position.
    fn san_among(&mut self, mv: Move, legal: &[Move]) -> String {
        let mut san = String::new();

        if mv.is_castle_kingside() {
            san.push_str("O-O");
        } else if mv.is_castle_queenside() {
            san.push_str("O-O-O");
        } else if mv.piece == Piece::Pawn {
            if mv.is_capture() {
                san.push(mv.from.file_char());
                san.push('x');
            }
            san.push_str(&mv.to.to_string());
            if let Some(promo) = mv.promotion {
                san.push('=');
                san.push(promo.to_char().to_ascii_uppercase());
            }
        } else {
            san.push(mv.piece.to_char().to_ascii_uppercase());
            san.push_str(&disambiguator(mv, legal));
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to.to_string());
        }

        let mut after = self.apply(mv);
        let them = after.turn();
        if after.is_in_check(them) {
            if after.generate_moves().is_empty() {
                san.push('#');
            } else {
                san.push('+');
            }
        }
        san
    }

    /// SAN strings for the moves matching a query.
    pub fn moves_san(&mut self, query: &MoveQuery) -> Vec<String> {
        let legal = self.generate_moves();
        self.moves(query)
            .into_iter()
            .map(|mv| self.san_among(mv, &legal))
            .collect()
    }

    /// SAN of every move since the last load, replayed from the start.
    pub fn history_san(&mut self) -> Vec<String> {
        let mut undone = Vec::with_capacity(self.history.len());
        while let Some(mv) = self.unmake_move() {
            undone.push(mv);
        }

        let mut sans = Vec::with_capacity(undone.len());
        while let Some(mv) = undone.pop() {
            sans.push(self.move_to_san(mv));
            self.make_move(mv);
        }
        sans
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Strict parsing only accepts SAN exactly as [`Board::move_to_san`]
    /// produces it (check marks and annotations aside). Permissive parsing
    /// also accepts missing or extra disambiguation, a missing `x`, long
    /// coordinates such as `Ng1f3` or `e2-e4`, `0-0` castling and a missing
    /// promotion piece (taken as a queen). The board is never modified.
    pub fn parse_san(&mut self, san: &str, strict: bool) -> Result<Move, SanError> {
        let cleaned = strip_san(san);
        if cleaned.is_empty() {
            return Err(SanError::Empty);
        }

        let legal = self.generate_moves();
        for &mv in &legal {
            if strip_san(&self.san_among(mv, &legal)) == cleaned {
                return Ok(mv);
            }
        }

        if strict {
            return Err(SanError::NoMatchingMove {
                san: san.to_string(),
            });
        }
        self.match_permissive(&cleaned, san, &legal)
    }

    fn match_permissive(&self, cleaned: &str, san: &str, legal: &[Move]) -> Result<Move, SanError> {
        let castle = cleaned.replace('0', "O");
        if castle == "O-O" || castle == "O-O-O" {
            let kingside = castle == "O-O";
            return legal
                .iter()
                .find(|mv| {
                    (kingside && mv.is_castle_kingside()) || (!kingside && mv.is_castle_queenside())
                })
                .copied()
                .ok_or_else(|| SanError::NoMatchingMove {
                    san: san.to_string(),
                });
        }

        let parts = split_san(cleaned).ok_or_else(|| SanError::Unparseable {
            san: san.to_string(),
        })?;
        let full_origin = parts.from_file.is_some() && parts.from_rank.is_some();

        let candidates: Vec<Move> = legal
            .iter()
            .copied()
            .filter(|mv| Some(mv.to) == parts.to)
            .filter(|mv| match parts.piece {
                Some(piece) => mv.piece == piece,
                None => full_origin || mv.piece == Piece::Pawn,
            })
            .filter(|mv| parts.from_file.map_or(true, |f| mv.from.file() == f))
            .filter(|mv| parts.from_rank.map_or(true, |r| mv.from.rank() == r))
            .filter(|mv| match parts.promotion {
                Some(_) => mv.promotion == parts.promotion,
                None => mv.promotion.map_or(true, |p| p == Piece::Queen),
            })
            .collect();

        match candidates.as_slice() {
            [] => Err(SanError::NoMatchingMove {
                san: san.to_string(),
            }),
            [only] => Ok(*only),
            _ => Err(SanError::AmbiguousMove {
                san: san.to_string(),
            }),
        }
    }

    /// Parse a SAN move permissively and play it.
    pub fn make_move_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san, false)?;
        self.play(mv);
        Ok(mv)
    }
}

/// Origin qualifier for a piece move: nothing, a file letter, a rank digit,
/// or the full square.
fn disambiguator(mv: Move, legal: &[Move]) -> String {
    let rivals: Vec<&Move> = legal
        .iter()
        .filter(|other| other.piece == mv.piece && other.to == mv.to && other.from != mv.from)
        .collect();
    if rivals.is_empty() {
        return String::new();
    }

    let same_rank = rivals.iter().any(|other| other.from.rank() == mv.from.rank());
    let same_file = rivals.iter().any(|other| other.from.file() == mv.from.file());

    if same_rank && same_file {
        mv.from.to_string()
    } else if same_file {
        mv.from.rank_char().to_string()
    } else {
        mv.from.file_char().to_string()
    }
}

/// Split a decoration-free SAN token into its components.
fn split_san(cleaned: &str) -> Option<SanParts> {
    let mut chars: Vec<char> = cleaned
        .chars()
        .filter(|c| !matches!(c, 'x' | 'X' | '-' | ':'))
        .collect();
    let mut parts = SanParts::default();

    if let Some(&first) = chars.first() {
        if first.is_ascii_uppercase() {
            parts.piece = Some(Piece::from_char(first)?);
            chars.remove(0);
        }
    }

    let n = chars.len();
    if n >= 3 && chars[n - 1].is_ascii_alphabetic() && chars[n - 2].is_ascii_digit() {
        let promo = Piece::from_char(chars[n - 1])?;
        if matches!(promo, Piece::Pawn | Piece::King) {
            return None;
        }
        parts.promotion = Some(promo);
        chars.pop();
    }

    if chars.len() < 2 {
        return None;
    }
    let dest: String = chars.split_off(chars.len() - 2).into_iter().collect();
    parts.to = Some(dest.parse().ok()?);

    let mut rest = chars.into_iter().peekable();
    if let Some(&c) = rest.peek() {
        if ('a'..='h').contains(&c) {
            parts.from_file = Some(c as usize - 'a' as usize);
            rest.next();
        }
    }
    if let Some(&c) = rest.peek() {
        if ('1'..='8').contains(&c) {
            parts.from_rank = Some(c as usize - '1' as usize);
            rest.next();
        }
    }
    if rest.next().is_some() {
        return None;
    }
    Some(parts)
}
