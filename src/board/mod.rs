//! Chess board representation and game logic.
//!
//! Uses a 0x88 mailbox board with make/unmake history for move generation,
//! notation, game status and search.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chesskit::board::{Board, Color, Piece};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod perft;
mod pgn;
pub mod prelude;
mod pst;
mod san;
mod search;
mod state;
mod status;
mod types;
mod uci;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, PgnError, SanError, SquareError};
pub use eval::MOBILITY_WEIGHT;
pub use fen::{validate_fen, START_FEN};
pub use make_unmake::MoveGuard;
pub use movegen::MoveQuery;
pub use pgn::PgnOptions;
pub use state::{Board, SquareColor};
pub use status::{DrawReason, GameStatus};
pub use types::{CastlingRights, Color, Move, MoveFlags, Piece, Square};
pub use uci::MoveInput;

// Public API - search and configuration
pub use search::constants::{BOOK_PLY_LIMIT, MATE_SCORE, MATE_THRESHOLD, MAX_QSEARCH_DEPTH};
pub use search::{Ai, AiConfig, BestMove, Deadline, SearchStats, Strategy};
