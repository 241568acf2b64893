//! Make/unmake move tests.

use super::{play_uci, sq};
use crate::board::{Board, CastlingRights, Color, Move, Piece};
use rand::prelude::*;

fn find_move(board: &mut Board, uci: &str) -> Move {
    board.parse_move(uci).expect("expected move not found")
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original_fen = board.fen();
    let mv = find_move(&mut board, "e5f6");
    assert!(mv.is_en_passant());

    board.make_move(mv);
    assert_eq!(board.get(sq("f5")), None);
    assert_eq!(board.get(sq("f6")), Some((Color::White, Piece::Pawn)));

    assert_eq!(board.unmake_move(), Some(mv));
    assert_eq!(board.fen(), original_fen);
    assert_eq!(board.en_passant_square(), Some(sq("f6")));
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original_fen = board.fen();
    let mv = find_move(&mut board, "a7a8q");
    board.make_move(mv);
    assert_eq!(board.get(sq("a8")), Some((Color::White, Piece::Queen)));
    board.unmake_move();
    assert_eq!(board.fen(), original_fen);
    assert_eq!(board.get(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_castling_make_unmake() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original_fen = board.fen();

    let mv = find_move(&mut board, "e1g1");
    assert!(mv.is_castle_kingside());
    board.make_move(mv);
    assert_eq!(board.get(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.get(sq("h1")), None);
    assert_eq!(board.king_square(Color::White), Some(sq("g1")));
    assert_eq!(
        board.castling_rights(),
        CastlingRights::BLACK_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
    );

    board.unmake_move();
    assert_eq!(board.fen(), original_fen);
    assert_eq!(board.king_square(Color::White), Some(sq("e1")));
}

#[test]
fn test_rook_capture_clears_castling_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play_uci(&mut board, &["a1a8"]);
    assert!(!board.castling_rights().contains(CastlingRights::BLACK_QUEENSIDE));
    assert!(!board.castling_rights().contains(CastlingRights::WHITE_QUEENSIDE));
    assert!(board.castling_rights().contains(CastlingRights::BLACK_KINGSIDE));
}

#[test]
fn test_guard_unmakes_on_drop() {
    let mut board = Board::new();
    let before = board.fen();
    let mv = find_move(&mut board, "e2e4");
    {
        let guard = board.apply(mv);
        assert_eq!(guard.mv(), mv);
        assert_eq!(guard.turn(), Color::Black);
        assert_eq!(guard.en_passant_square(), Some(sq("e3")));
    }
    assert_eq!(board.fen(), before);
    assert_eq!(board.ply_count(), 0);
}

#[test]
fn test_nested_guards() {
    let mut board = Board::new();
    let before = board.fen();
    let e4 = find_move(&mut board, "e2e4");
    {
        let mut after_e4 = board.apply(e4);
        let e5 = after_e4.parse_move("e7e5").unwrap();
        let after_e5 = after_e4.apply(e5);
        assert_eq!(after_e5.ply_count(), 2);
        assert_eq!(after_e5.move_number(), 2);
    }
    assert_eq!(board.fen(), before);
}

#[test]
fn test_unmake_on_empty_history() {
    let mut board = Board::new();
    assert_eq!(board.unmake_move(), None);
    assert_eq!(board.undo(), None);
}

#[test]
fn test_move_number_and_clock() {
    let mut board = Board::new();
    play_uci(&mut board, &["g1f3"]);
    assert_eq!(board.move_number(), 1);
    assert_eq!(board.halfmove_clock(), 1);
    play_uci(&mut board, &["d7d5"]);
    assert_eq!(board.move_number(), 2);
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut board = Board::new();
    let initial_moves = board.generate_moves();
    let mut initial_list: Vec<String> = initial_moves.iter().map(|m| m.to_string()).collect();
    initial_list.sort();

    for mv in initial_moves.iter() {
        board.make_move(*mv);
        board.unmake_move();
    }

    let after_moves = board.generate_moves();
    let mut after_list: Vec<String> = after_moves.iter().map(|m| m.to_string()).collect();
    after_list.sort();

    assert_eq!(initial_list, after_list);
}

#[test]
fn test_random_playout_round_trip_state() {
    let mut board = Board::new();
    let initial_fen = board.fen();
    let initial_rep = board.repetition_count();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut fens = Vec::new();

    for _ in 0..200 {
        let moves = board.generate_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        fens.push(board.fen());
        board.play(mv);
    }

    while let Some(fen) = fens.pop() {
        board.undo();
        assert_eq!(board.fen(), fen);
    }

    assert_eq!(board.fen(), initial_fen);
    assert_eq!(board.repetition_count(), initial_rep);
    assert_eq!(board.ply_count(), 0);
}
