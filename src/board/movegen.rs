use super::attack_tables::{square_attacked, square_attackers};
use super::types::{CastlingRights, Color, Move, MoveFlags, Piece, Square, PROMOTION_PIECES};
use super::Board;

/// Restricts move generation to a subset of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveQuery {
    /// Only moves starting on this square.
    pub square: Option<Square>,
    /// Only moves of this piece type.
    pub piece: Option<Piece>,
    /// Drop moves that leave the mover's king attacked.
    pub legal: bool,
}

impl Default for MoveQuery {
    fn default() -> Self {
        MoveQuery {
            square: None,
            piece: None,
            legal: true,
        }
    }
}

impl MoveQuery {
    /// Legal moves from one square.
    #[must_use]
    pub fn from_square(square: Square) -> Self {
        MoveQuery {
            square: Some(square),
            ..Self::default()
        }
    }

    /// Legal moves of one piece type.
    #[must_use]
    pub fn for_piece(piece: Piece) -> Self {
        MoveQuery {
            piece: Some(piece),
            ..Self::default()
        }
    }
}

impl Board {
    /// True if any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        square_attacked(&self.squares, square, by)
    }

    /// Squares of all pieces of `by` that attack `square`.
    #[must_use]
    pub fn attackers(&self, square: Square, by: Color) -> Vec<Square> {
        square_attackers(&self.squares, square, by)
    }

    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        match self.kings[color.index()] {
            Some(king) => self.is_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// All legal moves for the side to move.
    pub fn generate_moves(&mut self) -> Vec<Move> {
        self.moves(&MoveQuery::default())
    }

    /// Moves matching a query.
    pub fn moves(&mut self, query: &MoveQuery) -> Vec<Move> {
        let pseudo = self.generate_pseudo_moves(query.square, query.piece);
        if !query.legal {
            return pseudo;
        }

        let us = self.turn;
        pseudo
            .into_iter()
            .filter(|&mv| {
                let after = self.apply(mv);
                !after.is_in_check(us)
            })
            .collect()
    }

    /// Legal captures, including capturing promotions and en passant.
    pub(crate) fn generate_captures(&mut self) -> Vec<Move> {
        let mut moves = self.generate_moves();
        moves.retain(|mv| mv.is_capture());
        moves
    }

    /// True if `mv` is one of the legal moves in this position.
    pub fn is_legal_move(&mut self, mv: Move) -> bool {
        if self.get(mv.from) != Some((self.turn, mv.piece)) {
            return false;
        }
        self.moves(&MoveQuery::from_square(mv.from)).contains(&mv)
    }

    pub(crate) fn generate_pseudo_moves(
        &self,
        only_square: Option<Square>,
        only_piece: Option<Piece>,
    ) -> Vec<Move> {
        let us = self.turn;
        let mut moves = Vec::with_capacity(48);

        let origins: Vec<Square> = match only_square {
            Some(sq) => vec![sq],
            None => Square::all().collect(),
        };

        for from in origins {
            let piece = match self.get(from) {
                Some((color, piece)) if color == us => piece,
                _ => continue,
            };
            if only_piece.map_or(false, |wanted| wanted != piece) {
                continue;
            }

            match piece {
                Piece::Pawn => self.push_pawn_moves(from, us, &mut moves),
                _ => {
                    self.push_piece_moves(from, us, piece, &mut moves);
                    if piece == Piece::King {
                        self.push_castling_moves(from, us, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn push_pawn_moves(&self, from: Square, us: Color, moves: &mut Vec<Move>) {
        let push = us.pawn_push();

        if let Some(one) = from.offset(push) {
            if self.is_empty(one) {
                push_pawn_move(moves, us, from, one, None);
                if from.rank() == us.pawn_start_rank() {
                    if let Some(two) = one.offset(push) {
                        if self.is_empty(two) {
                            moves.push(Move::new(
                                us,
                                from,
                                two,
                                Piece::Pawn,
                                None,
                                None,
                                MoveFlags::BIG_PAWN,
                            ));
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            let Some(target) = from.offset(push + side) else {
                continue;
            };
            match self.get(target) {
                Some((color, victim)) if color != us => {
                    push_pawn_move(moves, us, from, target, Some(victim));
                }
                None if self.ep_square == Some(target) => {
                    moves.push(Move::new(
                        us,
                        from,
                        target,
                        Piece::Pawn,
                        Some(Piece::Pawn),
                        None,
                        MoveFlags::EP_CAPTURE,
                    ));
                }
                _ => {}
            }
        }
    }

    fn push_piece_moves(&self, from: Square, us: Color, piece: Piece, moves: &mut Vec<Move>) {
        for &step in piece.offsets() {
            let mut cursor = from;
            while let Some(to) = cursor.offset(step) {
                match self.get(to) {
                    None => {
                        moves.push(Move::new(us, from, to, piece, None, None, MoveFlags::empty()));
                    }
                    Some((color, victim)) => {
                        if color != us {
                            moves.push(Move::new(
                                us,
                                from,
                                to,
                                piece,
                                Some(victim),
                                None,
                                MoveFlags::empty(),
                            ));
                        }
                        break;
                    }
                }
                if !piece.is_slider() {
                    break;
                }
                cursor = to;
            }
        }
    }

    fn push_castling_moves(&self, from: Square, us: Color, moves: &mut Vec<Move>) {
        let back = us.back_rank();
        if Square::new(back, 4) != Some(from)
            || !self.castling.intersects(CastlingRights::for_color(us))
        {
            return;
        }
        let them = us.opponent();
        if self.is_attacked(from, them) {
            return;
        }

        // (kingside, rook file, files that must be empty, king path files, flag)
        let sides: [(bool, usize, &[usize], [usize; 2], MoveFlags); 2] = [
            (true, 7, &[5, 6], [5, 6], MoveFlags::KSIDE_CASTLE),
            (false, 0, &[1, 2, 3], [3, 2], MoveFlags::QSIDE_CASTLE),
        ];

        for (kingside, rook_file, between, path, flag) in sides {
            if !self.castling.has(us, kingside) {
                continue;
            }
            let rook_home = Square::new(back, rook_file);
            if rook_home.and_then(|sq| self.get(sq)) != Some((us, Piece::Rook)) {
                continue;
            }
            let clear = between
                .iter()
                .filter_map(|&file| Square::new(back, file))
                .all(|sq| self.is_empty(sq));
            if !clear {
                continue;
            }
            let safe = path
                .iter()
                .filter_map(|&file| Square::new(back, file))
                .all(|sq| !self.is_attacked(sq, them));
            if !safe {
                continue;
            }
            if let Some(to) = Square::new(back, path[1]) {
                moves.push(Move::new(us, from, to, Piece::King, None, None, flag));
            }
        }
    }
}

/// Push a pawn move, expanding it into the four promotions on the last rank.
fn push_pawn_move(
    moves: &mut Vec<Move>,
    us: Color,
    from: Square,
    to: Square,
    captured: Option<Piece>,
) {
    if to.rank() == us.pawn_promotion_rank() {
        for promo in PROMOTION_PIECES {
            moves.push(Move::new(
                us,
                from,
                to,
                Piece::Pawn,
                captured,
                Some(promo),
                MoveFlags::empty(),
            ));
        }
    } else {
        moves.push(Move::new(
            us,
            from,
            to,
            Piece::Pawn,
            captured,
            None,
            MoveFlags::empty(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_start_position_moves() {
        let mut board = Board::new();
        let moves = board.generate_moves();
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|m| m.is_big_pawn()).count(), 8);
    }

    #[test]
    fn test_query_single_square() {
        let mut board = Board::new();
        let knight = board.moves(&MoveQuery::from_square(Square::G1));
        assert_eq!(knight.len(), 2);
        assert!(board.moves(&MoveQuery::from_square(sq("e4"))).is_empty());
        let pawns = board.moves(&MoveQuery::for_piece(Piece::Pawn));
        assert_eq!(pawns.len(), 16);
    }

    #[test]
    fn test_promotions_expand_to_four() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1");
        let moves = board.moves(&MoveQuery::from_square(sq("a7")));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.is_promotion()));
    }

    #[test]
    fn test_castling_blocked_by_attack() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles = board
            .generate_moves()
            .into_iter()
            .filter(|m| m.is_castling())
            .count();
        assert_eq!(castles, 2);

        // Black rook on f8 covers f1, so only the queenside is available.
        let mut board = Board::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
        let castles: Vec<Move> = board
            .generate_moves()
            .into_iter()
            .filter(|m| m.is_castling())
            .collect();
        assert_eq!(castles.len(), 1);
        assert!(castles[0].is_castle_queenside());
    }

    #[test]
    fn test_queenside_castle_ignores_attacked_b_file() {
        let mut board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(board.generate_moves().iter().any(|m| m.is_castle_queenside()));
    }

    #[test]
    fn test_en_passant_generated() {
        let mut board =
            Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
        let ep: Vec<Move> = board
            .generate_moves()
            .into_iter()
            .filter(|m| m.is_en_passant())
            .collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to, sq("f6"));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut board = Board::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        assert!(board.moves(&MoveQuery::from_square(sq("e2"))).is_empty());
        let pseudo = board.moves(&MoveQuery {
            square: Some(sq("e2")),
            legal: false,
            ..MoveQuery::default()
        });
        assert_eq!(pseudo.len(), 6);
    }

    #[test]
    fn test_attackers_and_check() {
        let board = Board::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1");
        assert!(board.is_in_check(Color::White));
        assert_eq!(board.attackers(Square::E1, Color::Black), vec![sq("d2")]);
        assert!(!board.is_attacked(Square::A1, Color::Black));
    }
}
