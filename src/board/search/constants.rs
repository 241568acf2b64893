//! Search constants and parameters.

// ============================================================================
// SCORES
// ============================================================================

/// Score of delivering mate at the root; mates further away score less.
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores with absolute value >= this are considered checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Bound wider than any reachable score.
pub(crate) const INFINITY: i32 = MATE_SCORE + 1;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Maximum quiescence search depth to prevent explosion
pub const MAX_QSEARCH_DEPTH: u32 = 8;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Difficulty at and above which the engine never plays a deliberate mistake.
pub(crate) const MISTAKE_FREE_DIFFICULTY: u8 = 5;

/// Chance of a random move per difficulty level below `MISTAKE_FREE_DIFFICULTY`.
pub(crate) const MISTAKE_STEP: f64 = 0.1;

/// The opening book is consulted while fewer plies than this have been played.
pub const BOOK_PLY_LIMIT: usize = 10;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Ordered: captures > promotions > checks > quiet

/// Base for captures; victim value minus attacker value is added.
pub const CAPTURE_SCORE: i32 = 100_000;

/// Base for promotions; the promoted piece value is added.
pub const PROMOTION_SCORE: i32 = 50_000;

/// Quiet moves that give check.
pub const CHECK_SCORE: i32 = 10_000;
