//! Error types for chess board operations.

use std::fmt;

/// Error type for FEN validation failures.
///
/// Each variant names the single criterion the FEN string failed. Checks run
/// in a fixed order and the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six space-separated fields
    FieldCount { found: usize },
    /// Move number is not a positive integer
    MoveNumber { found: String },
    /// Halfmove clock is not a non-negative integer
    HalfmoveClock { found: String },
    /// En passant field is neither `-` nor a square on rank 3 or 6
    EnPassantSquare { found: String },
    /// Castling field contains characters other than `KQkq-`
    CastlingField { found: String },
    /// Side to move is not `w` or `b`
    SideToMove { found: String },
    /// Piece placement does not have eight ranks
    RankCount { found: usize },
    /// Two digits follow each other inside a rank
    ConsecutiveDigits { rank: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// A rank does not describe exactly eight squares
    RankSum { rank: usize, squares: usize },
    /// En passant square is on the wrong rank for the side to move
    EnPassantMismatch { square: String, turn: char },
    /// A side has no king or more than one
    KingCount { color: char, found: usize },
    /// A pawn stands on the first or eighth rank
    PawnOnBackRank,
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::FieldCount { found } => {
                write!(f, "FEN must contain six space-delimited fields, found {found}")
            }
            FenError::MoveNumber { found } => {
                write!(f, "Move number must be a positive integer, found '{found}'")
            }
            FenError::HalfmoveClock { found } => {
                write!(
                    f,
                    "Halfmove clock must be a non-negative integer, found '{found}'"
                )
            }
            FenError::EnPassantSquare { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::CastlingField { found } => {
                write!(f, "Invalid castling availability '{found}'")
            }
            FenError::SideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::RankCount { found } => {
                write!(f, "Piece placement must contain 8 ranks, found {found}")
            }
            FenError::ConsecutiveDigits { rank } => {
                write!(f, "Consecutive digits in rank {rank} of piece placement")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::RankSum { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            FenError::EnPassantMismatch { square, turn } => {
                write!(
                    f,
                    "En passant square '{square}' is illegal with side to move '{turn}'"
                )
            }
            FenError::KingCount { color, found } => {
                write!(f, "Expected exactly one king for '{color}', found {found}")
            }
            FenError::PawnOnBackRank => {
                write!(f, "Pawns cannot stand on the first or eighth rank")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// The text does not have the shape of a SAN move
    Unparseable { san: String },
    /// Ambiguous move (multiple pieces can reach the target)
    AmbiguousMove { san: String },
    /// No matching legal move found
    NoMatchingMove { san: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::Unparseable { san } => {
                write!(f, "Cannot parse '{san}' as a move")
            }
            SanError::AmbiguousMove { san } => {
                write!(f, "Ambiguous move '{san}'")
            }
            SanError::NoMatchingMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
        }
    }
}

impl std::error::Error for SanError {}

/// Error type for PGN loading failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PgnError {
    /// A header line is not of the form `[Key "Value"]`
    InvalidHeader { line: String },
    /// The `FEN` header does not describe a valid position
    InvalidFen(FenError),
    /// A move in the movetext could not be played
    IllegalMove { ply: usize, error: SanError },
}

impl fmt::Display for PgnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PgnError::InvalidHeader { line } => write!(f, "Invalid PGN header '{line}'"),
            PgnError::InvalidFen(e) => write!(f, "Invalid FEN header: {e}"),
            PgnError::IllegalMove { ply, error } => {
                write!(f, "Cannot play move at ply {ply}: {error}")
            }
        }
    }
}

impl std::error::Error for PgnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PgnError::InvalidFen(e) => Some(e),
            PgnError::IllegalMove { error, .. } => Some(error),
            PgnError::InvalidHeader { .. } => None,
        }
    }
}

impl From<FenError> for PgnError {
    fn from(e: FenError) -> Self {
        PgnError::InvalidFen(e)
    }
}
