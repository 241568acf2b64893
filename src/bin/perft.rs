//! Perft divide for move generation debugging.
//!
//! usage: perft <depth> [fen]
use std::env;
use std::process;
use std::time::Instant;

use chesskit::board::{Board, START_FEN};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(depth) = args.first().and_then(|d| d.parse::<usize>().ok()) else {
        eprintln!("usage: perft <depth> [fen]");
        process::exit(2);
    };
    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        START_FEN.to_string()
    };

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("invalid fen: {e}");
            process::exit(1);
        }
    };

    let start = Instant::now();
    let mut total = 0;
    for (mv, nodes) in board.perft_divide(depth) {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    if depth == 0 {
        total = 1;
    }
    let elapsed = start.elapsed();

    println!();
    println!("Nodes searched: {total}");
    println!(
        "Time: {:.3}s ({:.0} nps)",
        elapsed.as_secs_f64(),
        total as f64 / elapsed.as_secs_f64().max(1e-9)
    );
}
