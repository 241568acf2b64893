//! Let the engine play itself from the starting position and print the game.
//!
//! usage: selfplay [difficulty] [plies]
use std::env;

use chesskit::board::{Ai, AiConfig, Board, Color, GameStatus, MoveInput, PgnOptions};

const DEFAULT_PLIES: usize = 80;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let difficulty = args.first().and_then(|d| d.parse().ok()).unwrap_or(3);
    let plies = args
        .get(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PLIES);

    let mut board = Board::new();
    let mut ai = Ai::new(AiConfig {
        difficulty,
        ..AiConfig::default()
    });

    board.set_header("Event", "Self-play");
    board.set_header("White", &format!("chesskit level {}", ai.config().difficulty));
    board.set_header("Black", &format!("chesskit level {}", ai.config().difficulty));

    for _ in 0..plies {
        if board.is_game_over() {
            break;
        }
        let Some(best) = ai.get_best_move(&mut board) else {
            break;
        };
        let input = MoveInput::Coords {
            from: best.from,
            to: best.to,
            promotion: best.promotion,
        };
        if board.try_move(input).is_none() {
            eprintln!("engine produced an illegal move");
            break;
        }
        let stats = ai.get_stats();
        let san = board.history_san().pop().unwrap_or_default();
        eprintln!(
            "{:>3}. {} ({} nodes, {:?})",
            board.ply_count(),
            san,
            stats.nodes_searched,
            stats.time_elapsed
        );
    }

    let result = match board.status() {
        GameStatus::Checkmate(Color::White) => "1-0",
        GameStatus::Checkmate(Color::Black) => "0-1",
        status if status.is_over() => "1/2-1/2",
        _ => "*",
    };
    board.set_header("Result", result);

    println!("{}", board.ascii());
    println!("{}", board.pgn(&PgnOptions { max_width: 72, ..PgnOptions::default() }));
}

