//! Move search.
//!
//! Features:
//! - Random, plain minimax and negamax alpha-beta strategies
//! - Quiescence search with stand-pat
//! - Move ordering (MVV-LVA, promotions, checks)
//! - Difficulty levels with deliberate mistakes at the low end
//! - Built-in opening book
//! - Cooperative time limit via a deadline checked at every node

mod alphabeta;
mod book;
pub mod constants;
mod minimax;
mod move_order;
mod quiescence;

use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Move, Piece, Square};
use constants::{
    BOOK_PLY_LIMIT, DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY, MISTAKE_FREE_DIFFICULTY,
    MISTAKE_STEP,
};

/// Search algorithm used by [`Ai`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Uniformly random legal move.
    Random,
    /// Fixed-depth minimax, maximizing White's score at the root.
    Minimax,
    /// Negamax with alpha-beta pruning and quiescence search.
    #[default]
    AlphaBeta,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiConfig {
    pub strategy: Strategy,
    /// 1 (weakest) to 10 (strongest)
    pub difficulty: u8,
    /// Wall-clock budget per move; `None` searches to full depth.
    pub max_time: Option<Duration>,
    pub use_book: bool,
    /// Extend leaf nodes with a capture-only search.
    pub quiescence: bool,
    /// Seed for the move-choice rng; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            difficulty: DEFAULT_DIFFICULTY,
            max_time: Some(Duration::from_secs(5)),
            use_book: true,
            quiescence: true,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Search depth in plies for the configured difficulty.
    pub fn depth(&self) -> u32 {
        u32::from(self.difficulty).div_ceil(2)
    }

    /// Chance of playing a random move instead of searching.
    pub fn mistake_probability(&self) -> f64 {
        let levels = MISTAKE_FREE_DIFFICULTY.saturating_sub(self.difficulty);
        f64::from(levels) * MISTAKE_STEP
    }
}

/// Statistics for the most recent `get_best_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
    pub depth: u32,
    pub difficulty: u8,
}

/// A chosen move in coordinate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl From<Move> for BestMove {
    fn from(mv: Move) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
            promotion: mv.promotion,
        }
    }
}

/// Point in time after which the search stops expanding nodes.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub fn none() -> Self {
        Self { at: None }
    }

    pub fn after(budget: Option<Duration>) -> Self {
        Self {
            at: budget.map(|d| Instant::now() + d),
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.at.is_some_and(|at| Instant::now() >= at)
    }
}

/// Per-search state shared by the recursive routines.
pub(crate) struct SearchContext {
    pub(crate) deadline: Deadline,
    pub(crate) quiescence: bool,
    pub(crate) nodes: u64,
}

impl SearchContext {
    pub(crate) fn new(deadline: Deadline, quiescence: bool) -> Self {
        Self {
            deadline,
            quiescence,
            nodes: 0,
        }
    }
}

/// Chess-playing opponent.
///
/// # Example
/// ```
/// use chesskit::board::{Ai, AiConfig, Board};
///
/// let mut board = Board::new();
/// let mut ai = Ai::new(AiConfig { difficulty: 2, seed: Some(1), ..AiConfig::default() });
/// let best = ai.get_best_move(&mut board).unwrap();
/// assert!(board.try_move(chesskit::board::MoveInput::Coords {
///     from: best.from,
///     to: best.to,
///     promotion: best.promotion,
/// }).is_some());
/// ```
pub struct Ai {
    config: AiConfig,
    rng: StdRng,
    stats: SearchStats,
}

impl Default for Ai {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl Ai {
    pub fn new(config: AiConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let difficulty = config.difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
        Self {
            config: AiConfig {
                difficulty,
                ..config
            },
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Mutable access to the settings. Difficulty is re-clamped on the next
    /// search.
    pub fn config_mut(&mut self) -> &mut AiConfig {
        &mut self.config
    }

    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.config.difficulty = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.strategy = strategy;
    }

    pub fn set_max_time(&mut self, max_time: Option<Duration>) {
        self.config.max_time = max_time;
    }

    pub fn get_stats(&self) -> SearchStats {
        self.stats
    }

    /// Choose a move for the side to move. Returns `None` when there are no
    /// legal moves. The board is left as it was found.
    pub fn get_best_move(&mut self, board: &mut Board) -> Option<BestMove> {
        let start = Instant::now();
        self.set_difficulty(self.config.difficulty);
        let depth = self.config.depth();
        self.stats = SearchStats {
            depth,
            difficulty: self.config.difficulty,
            ..SearchStats::default()
        };

        let legal = board.generate_moves();
        if legal.is_empty() {
            return None;
        }

        let chosen = self.choose(board, &legal, depth);
        self.stats.time_elapsed = start.elapsed();
        debug!(
            "best move {} ({:?}, depth {}, {} nodes, {:?})",
            chosen, self.config.strategy, depth, self.stats.nodes_searched, self.stats.time_elapsed
        );
        Some(chosen.into())
    }

    fn choose(&mut self, board: &mut Board, legal: &[Move], depth: u32) -> Move {
        let random = |rng: &mut StdRng| *legal.choose(rng).unwrap_or(&legal[0]);

        if self.config.strategy == Strategy::Random {
            return random(&mut self.rng);
        }

        if self.config.use_book && board.ply_count() < BOOK_PLY_LIMIT {
            if let Some(mv) = book::probe(board, &mut self.rng) {
                trace!("book move {mv}");
                return mv;
            }
        }

        let p = self.config.mistake_probability();
        if p > 0.0 && self.rng.gen_bool(p) {
            let mv = random(&mut self.rng);
            trace!("difficulty {}: playing random move {mv}", self.config.difficulty);
            return mv;
        }

        match self.search_root(board, depth) {
            Some((mv, _)) => mv,
            None => random(&mut self.rng),
        }
    }

    /// Search the position to `depth` plies with the configured strategy,
    /// ignoring the book and mistake rolls.
    ///
    /// Alpha-beta scores are from the side to move's perspective; minimax
    /// scores are always from White's.
    pub fn search_root(&mut self, board: &mut Board, depth: u32) -> Option<(Move, i32)> {
        let mut ctx = SearchContext::new(
            Deadline::after(self.config.max_time),
            self.config.quiescence,
        );
        let result = match self.config.strategy {
            Strategy::Random => {
                let moves = board.generate_moves();
                let mv = *moves.choose(&mut self.rng)?;
                let score = -board.apply(mv).eval_for_side();
                Some((mv, score))
            }
            Strategy::Minimax => ctx.minimax_root(board, depth),
            Strategy::AlphaBeta => ctx.alphabeta_root(board, depth),
        };
        self.stats.nodes_searched += ctx.nodes;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(strategy: Strategy, difficulty: u8) -> Ai {
        Ai::new(AiConfig {
            strategy,
            difficulty,
            max_time: None,
            use_book: false,
            seed: Some(42),
            ..AiConfig::default()
        })
    }

    #[test]
    fn test_depth_from_difficulty() {
        let depths: Vec<u32> = (1..=10)
            .map(|d| AiConfig { difficulty: d, ..AiConfig::default() }.depth())
            .collect();
        assert_eq!(depths, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn test_mistake_probability() {
        let p = |d| AiConfig { difficulty: d, ..AiConfig::default() }.mistake_probability();
        assert!((p(1) - 0.4).abs() < 1e-9);
        assert!((p(4) - 0.1).abs() < 1e-9);
        assert_eq!(p(5), 0.0);
        assert_eq!(p(10), 0.0);
    }

    #[test]
    fn test_difficulty_clamped() {
        let mut ai = seeded(Strategy::AlphaBeta, 0);
        assert_eq!(ai.config().difficulty, 1);
        ai.set_difficulty(42);
        assert_eq!(ai.config().difficulty, 10);
    }

    #[test]
    fn test_no_move_when_mated() {
        let mut board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        let mut ai = seeded(Strategy::AlphaBeta, 5);
        assert!(ai.get_best_move(&mut board).is_none());
    }

    #[test]
    fn test_stats_recorded() {
        let mut board = Board::new();
        let mut ai = seeded(Strategy::AlphaBeta, 6);
        ai.get_best_move(&mut board).unwrap();
        let stats = ai.get_stats();
        assert_eq!(stats.depth, 3);
        assert_eq!(stats.difficulty, 6);
        assert!(stats.nodes_searched > 20);
    }

    #[test]
    fn test_board_untouched_by_search() {
        let mut board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let before = board.fen();
        let mut ai = seeded(Strategy::AlphaBeta, 4);
        ai.get_best_move(&mut board).unwrap();
        assert_eq!(board.fen(), before);
        assert_eq!(board.ply_count(), 0);
    }

    #[test]
    fn test_expired_deadline_still_returns_move() {
        let mut board = Board::new();
        let mut ai = seeded(Strategy::AlphaBeta, 10);
        ai.set_max_time(Some(Duration::ZERO));
        assert!(ai.get_best_move(&mut board).is_some());
    }
}
