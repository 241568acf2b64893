//! Edge case tests for special chess positions and moves.

use super::sq;
use crate::board::{Board, Color, FenError, MoveQuery, Piece, Square};

#[test]
fn test_stalemate_position() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!board.is_checkmate());
    assert!(board.is_stalemate());
    assert!(board.generate_moves().is_empty());
}

#[test]
fn test_all_underpromotions_available() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let moves = board.moves(&MoveQuery::from_square(sq("a7")));
    let mut promos: Vec<Piece> = moves.iter().filter_map(|m| m.promotion).collect();
    promos.sort_by_key(|p| p.value());
    assert_eq!(
        promos,
        vec![Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
    );

    board.make_move_uci("a7a8n").unwrap();
    assert_eq!(board.piece_on(sq("a8")), Some(Piece::Knight));
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut board = Board::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = board.generate_moves();

    let ep_move = moves.iter().find(|m| m.is_en_passant());
    assert!(ep_move.is_some(), "En passant should be available");

    let mv = *ep_move.unwrap();
    board.make_move(mv);

    assert!(
        board.piece_on(sq("d5")).is_none(),
        "Captured pawn should be removed"
    );
    assert_eq!(
        board.piece_on(sq("d6")),
        Some(Piece::Pawn),
        "Capturing pawn should be on d6"
    );

    board.unmake_move();
    assert_eq!(
        board.get(sq("d5")),
        Some((Color::Black, Piece::Pawn)),
        "Black pawn should be restored"
    );
    assert_eq!(
        board.get(sq("e5")),
        Some((Color::White, Piece::Pawn)),
        "White pawn should be back on e5"
    );
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Taking on d6 would open the fifth rank to the rook.
    let mut board = Board::from_fen("8/8/8/r2pP2K/8/8/8/4k3 w - d6 0 1");
    assert!(!board.generate_moves().iter().any(|m| m.is_en_passant()));
    assert!(!board.fen().contains(" d6 "));
}

#[test]
fn test_castling_blocked_by_check() {
    let mut board = Board::from_fen("r3k2r/8/8/8/4Q3/8/8/R3K2R b KQkq - 0 1");
    let moves = board.generate_moves();

    let castling_move = moves.iter().find(|m| m.is_castling());
    assert!(
        castling_move.is_none(),
        "Castling should not be available when in check"
    );
}

#[test]
fn test_castling_through_attacked_square() {
    // The f8 rook covers f1, so only queenside castling is legal.
    let mut board = Board::from_fen("r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let moves = board.generate_moves();
    let castles: Vec<String> = moves
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.to_uci())
        .collect();
    assert_eq!(castles, vec!["e1c1".to_string()]);
}

#[test]
fn test_queenside_castling_allows_attacked_b_file() {
    let mut board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(board.generate_moves().iter().any(|m| m.is_castle_queenside()));
}

#[test]
fn test_double_check_only_king_can_move() {
    let mut board = Board::from_fen("4k3/8/8/1b6/8/8/3r4/3K4 w - - 0 1");
    let moves = board.generate_moves();
    assert!(!moves.is_empty());

    for mv in moves.iter() {
        assert_eq!(
            mv.from,
            sq("d1"),
            "Only king should be able to move in double check"
        );
    }
}

#[test]
fn test_checkmate_back_rank() {
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    board.make_move_uci("a1a8").unwrap();
    assert!(board.is_checkmate());
    assert!(board.is_game_over());
}

#[test]
fn test_fen_parsing_errors() {
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Err(FenError::FieldCount { found: 1 })
    ));
    assert!(
        Board::try_from_fen("rnbxkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err()
    );
    assert!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err()
    );
    assert!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XYZ - 0 1").is_err()
    );
}

#[test]
fn test_square_parsing() {
    use std::str::FromStr;

    assert_eq!(Square::from_str("a1").unwrap(), Square::A1);
    assert_eq!(Square::from_str("h8").unwrap(), Square::H8);
    assert_eq!(Square::from_str("e4").unwrap(), Square::new(3, 4).unwrap());

    assert!(Square::from_str("i1").is_err());
    assert!(Square::from_str("a9").is_err());
    assert!(Square::from_str("").is_err());
    assert!(Square::from_str("a").is_err());
}

#[test]
fn test_board_from_str() {
    let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        .parse()
        .unwrap();
    assert_eq!(board.turn(), Color::White);

    let result: Result<Board, _> = "invalid fen".parse();
    assert!(result.is_err());
}

#[test]
fn test_put_and_remove_keep_setup_consistent() {
    let mut board = Board::empty();
    assert!(board.put(Color::White, Piece::King, sq("e1")));
    assert!(!board.put(Color::White, Piece::King, sq("d1")));
    assert!(board.put(Color::Black, Piece::King, sq("e8")));
    assert_eq!(board.king_square(Color::White), Some(sq("e1")));

    assert_eq!(board.remove(sq("e1")), Some((Color::White, Piece::King)));
    assert_eq!(board.king_square(Color::White), None);
    assert!(board.put(Color::White, Piece::King, sq("d1")));
}
