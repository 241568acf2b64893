//! Chess rules, notation and a small search engine.
//!
//! ```
//! use chesskit::{Ai, AiConfig, Board};
//!
//! let mut board = Board::new();
//! board.make_move_san("e4").unwrap();
//! let mut ai = Ai::new(AiConfig { difficulty: 1, seed: Some(3), ..AiConfig::default() });
//! assert!(ai.get_best_move(&mut board).is_some());
//! ```

pub mod board;

pub use board::{Ai, AiConfig, Board, Color, GameStatus, Move, Piece, Square, Strategy};
