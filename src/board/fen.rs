use std::str::FromStr;

use log::debug;

use super::attack_tables::square_attacked;
use super::error::FenError;
use super::types::{CastlingRights, Color, Piece, Square};
use super::Board;

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plain decimal digits only; `u32::from_str` would also take a leading `+`.
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Check a FEN string without building a position.
///
/// Criteria are tested in a fixed order and the first failure is returned.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let tokens: Vec<&str> = fen.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(FenError::FieldCount {
            found: tokens.len(),
        });
    }

    match parse_counter(tokens[5]) {
        Some(n) if n > 0 => {}
        _ => {
            return Err(FenError::MoveNumber {
                found: tokens[5].to_string(),
            })
        }
    }

    if parse_counter(tokens[4]).is_none() {
        return Err(FenError::HalfmoveClock {
            found: tokens[4].to_string(),
        });
    }

    let ep = tokens[3];
    let ep_ok = ep == "-" || matches!(ep.as_bytes(), [b'a'..=b'h', b'3' | b'6']);
    if !ep_ok {
        return Err(FenError::EnPassantSquare {
            found: ep.to_string(),
        });
    }

    if CastlingRights::from_fen(tokens[2]).is_none() {
        return Err(FenError::CastlingField {
            found: tokens[2].to_string(),
        });
    }

    if tokens[1] != "w" && tokens[1] != "b" {
        return Err(FenError::SideToMove {
            found: tokens[1].to_string(),
        });
    }

    let rows: Vec<&str> = tokens[0].split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RankCount { found: rows.len() });
    }

    for (i, row) in rows.iter().enumerate() {
        let rank = 8 - i;
        let mut squares = 0;
        let mut previous_was_digit = false;
        for c in row.chars() {
            if let Some(n) = c.to_digit(10) {
                if previous_was_digit {
                    return Err(FenError::ConsecutiveDigits { rank });
                }
                squares += n as usize;
                previous_was_digit = true;
            } else {
                if Piece::from_char(c).is_none() {
                    return Err(FenError::InvalidPiece { char: c });
                }
                squares += 1;
                previous_was_digit = false;
            }
        }
        if squares != 8 {
            return Err(FenError::RankSum { rank, squares });
        }
    }

    let ep_rank = ep.as_bytes().get(1).copied();
    if (ep_rank == Some(b'3') && tokens[1] == "w") || (ep_rank == Some(b'6') && tokens[1] == "b")
    {
        return Err(FenError::EnPassantMismatch {
            square: ep.to_string(),
            turn: tokens[1].chars().next().unwrap_or('w'),
        });
    }

    for (king, color) in [('K', 'w'), ('k', 'b')] {
        let found = tokens[0].chars().filter(|&c| c == king).count();
        if found != 1 {
            return Err(FenError::KingCount { color, found });
        }
    }

    if [rows[0], rows[7]]
        .iter()
        .any(|row| row.chars().any(|c| c == 'p' || c == 'P'))
    {
        return Err(FenError::PawnOnBackRank);
    }

    Ok(())
}

impl Board {
    /// Replace the position with the one described by `fen`.
    ///
    /// On error the board is left exactly as it was. History and headers are
    /// discarded on success.
    pub fn load(&mut self, fen: &str) -> Result<(), FenError> {
        validate_fen(fen)?;
        *self = Board::from_validated_fen(fen);
        debug!("loaded position {}", fen.trim());
        Ok(())
    }

    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        validate_fen(fen)?;
        Ok(Board::from_validated_fen(fen))
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    fn from_validated_fen(fen: &str) -> Self {
        let tokens: Vec<&str> = fen.split_whitespace().collect();
        let mut board = Board::empty();

        for (i, row) in tokens[0].split('/').enumerate() {
            let rank = 7 - i;
            let mut file = 0;
            for c in row.chars() {
                if let Some(n) = c.to_digit(10) {
                    file += n as usize;
                    continue;
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if let (Some(piece), Some(sq)) = (Piece::from_char(c), Square::new(rank, file)) {
                    board.set_piece(sq, color, piece);
                }
                file += 1;
            }
        }

        board.turn = if tokens[1] == "b" {
            Color::Black
        } else {
            Color::White
        };
        board.castling = CastlingRights::from_fen(tokens[2]).unwrap_or_default();
        board.ep_square = tokens[3].parse().ok();
        board.halfmove_clock = parse_counter(tokens[4]).unwrap_or(0);
        board.move_number = parse_counter(tokens[5]).unwrap_or(1);

        board.record_position();
        board.update_setup_headers();
        board
    }

    /// Serialize the position as FEN.
    ///
    /// The en passant field names the target square only when a pawn of the
    /// side to move could actually capture onto it.
    #[must_use]
    pub fn fen(&self) -> String {
        format!(
            "{} {} {}",
            self.position_key(),
            self.halfmove_clock,
            self.move_number
        )
    }

    /// The first four FEN fields, identifying a position for repetition.
    pub(crate) fn position_key(&self) -> String {
        let ep = self
            .capturable_en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {}",
            self.placement(),
            self.turn.to_char(),
            self.castling.to_fen(),
            ep
        )
    }

    /// The piece placement field.
    pub(crate) fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match Square::new(rank, file).and_then(|sq| self.get(sq)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// The en passant target if some pawn can legally capture onto it.
    fn capturable_en_passant(&self) -> Option<Square> {
        let ep = self.ep_square?;
        let us = self.turn;
        let victim = ep.offset(-us.pawn_push())?;

        for side in [-1, 1] {
            let Some(from) = victim.offset(side) else {
                continue;
            };
            if self.get(from) != Some((us, Piece::Pawn)) {
                continue;
            }
            let mut scratch = self.squares;
            scratch[from.index()] = None;
            scratch[victim.index()] = None;
            scratch[ep.index()] = Some((us, Piece::Pawn));
            let safe = match self.kings[us.index()] {
                Some(king) => !square_attacked(&scratch, king, us.opponent()),
                None => true,
            };
            if safe {
                return Some(ep);
            }
        }
        None
    }

    pub(crate) fn record_position(&mut self) {
        let key = self.position_key();
        self.position_counts.increment(key);
    }

    /// How often the current position has occurred in the game record.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.position_counts.get(&self.position_key())
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        for fen in [
            START_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "4k3/8/8/8/8/8/8/4K3 b - - 37 81",
        ] {
            assert_eq!(Board::from_fen(fen).fen(), fen);
        }
    }

    #[test]
    fn test_new_matches_start_fen() {
        assert_eq!(Board::new().fen(), START_FEN);
    }

    #[test]
    fn test_en_passant_hidden_without_capturer() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        board.play(mv);
        assert_eq!(board.en_passant_square(), Some("e3".parse().unwrap()));
        assert_eq!(
            board.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn test_en_passant_hidden_when_capture_exposes_king() {
        // Capturing on d6 would open the fifth rank to the rook on h5.
        let board = Board::from_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1");
        assert_eq!(board.fen(), "8/8/8/K2pP2r/8/8/8/7k w - - 0 1");
    }

    #[test]
    fn test_validate_each_criterion() {
        let cases: [(&str, fn(&FenError) -> bool); 13] = [
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
                |e| matches!(e, FenError::FieldCount { found: 4 }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",
                |e| matches!(e, FenError::MoveNumber { .. }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
                |e| matches!(e, FenError::HalfmoveClock { .. }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
                |e| matches!(e, FenError::EnPassantSquare { .. }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
                |e| matches!(e, FenError::CastlingField { .. }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
                |e| matches!(e, FenError::SideToMove { .. }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                |e| matches!(e, FenError::RankCount { found: 7 }),
            ),
            (
                "rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                |e| matches!(e, FenError::ConsecutiveDigits { rank: 6 }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
                |e| matches!(e, FenError::InvalidPiece { char: 'X' }),
            ),
            (
                "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                |e| matches!(e, FenError::RankSum { rank: 7, squares: 7 }),
            ),
            (
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1",
                |e| matches!(e, FenError::EnPassantMismatch { .. }),
            ),
            (
                "rnbqqbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                |e| matches!(e, FenError::KingCount { color: 'b', found: 0 }),
            ),
            (
                "rnbqkbnp/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
                |e| matches!(e, FenError::PawnOnBackRank),
            ),
        ];

        for (fen, expected) in cases {
            let err = validate_fen(fen).unwrap_err();
            assert!(expected(&err), "{fen}: unexpected {err:?}");
        }
    }

    #[test]
    fn test_counters_and_castling_field_are_strict() {
        let placement = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";
        assert!(matches!(
            validate_fen(&format!("{placement} KQkq - +5 1")),
            Err(FenError::HalfmoveClock { .. })
        ));
        assert!(matches!(
            validate_fen(&format!("{placement} KQkq - 0 +1")),
            Err(FenError::MoveNumber { .. })
        ));
        for castling in ["-K", "KK", "KQ-kq"] {
            assert!(
                matches!(
                    validate_fen(&format!("{placement} {castling} - 0 1")),
                    Err(FenError::CastlingField { .. })
                ),
                "{castling}"
            );
        }
        assert!(validate_fen(&format!("{placement} kqKQ - 12 40")).is_ok());
    }

    #[test]
    fn test_load_failure_leaves_board_untouched() {
        let mut board = Board::new();
        let mv = board.parse_move("g1f3").unwrap();
        board.play(mv);
        let before = board.fen();
        assert!(board.load("not a fen").is_err());
        assert_eq!(board.fen(), before);
        assert_eq!(board.ply_count(), 1);
    }

    #[test]
    fn test_load_resets_history() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        board.play(mv);
        board.load("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(board.ply_count(), 0);
        assert_eq!(board.repetition_count(), 1);
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board.fen(), START_FEN);
        assert!("8/8/8/8/8/8/8/8 w - - 0 1".parse::<Board>().is_err());
    }
}
