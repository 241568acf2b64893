//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chesskit::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

pub use super::{
    Ai, AiConfig, Board, CastlingRights, Color, FenError, GameStatus, Move, MoveInput,
    MoveParseError, MoveQuery, Piece, PgnOptions, SanError, Square, SquareError, Strategy,
};
