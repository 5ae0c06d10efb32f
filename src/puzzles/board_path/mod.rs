//! Snakes & Ladders: fewest dice throws to reach the last square.
//!
//! The board is an implicit graph over squares `1..=N*N`. Forward edges are
//! computed from the die (`pos + 1 ..= pos + 6`) and only the sparse ladder
//! and snake overrides are stored, in a [`TeleportMap`].
//!
//! Two strategies compute the answer and must always agree:
//!
//! - [`ThrowsStrategy::Bfs`]: breadth-first search
//! - [`ThrowsStrategy::Dp`]: relaxation to a fixed point
//!
//! # Example
//! ```
//! use puzzle_solvers::puzzles::board_path::{minimum_throws, Ladder, ThrowsStrategy};
//!
//! let result = minimum_throws(20, &[Ladder { start: 2, end: 15 }], &[], ThrowsStrategy::Bfs).unwrap();
//! assert_eq!(result.throws, Some(2));
//! ```

pub mod board;
pub mod solvers;

pub use board::{check_layout, square_coords, Board, Ladder, Snake, TeleportMap, MIN_BOARD_SIZE};
pub use solvers::{min_throws_bfs, min_throws_dp, DIE_FACES};

use serde::{Deserialize, Serialize};

use crate::solver::{timed, Algorithm, SolverConfig, SolverError};

/// Minimum-throws strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowsStrategy {
    /// Breadth-first search.
    Bfs,
    /// Repeated relaxation until nothing improves.
    Dp,
}

impl Algorithm for ThrowsStrategy {
    fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dp => "Dynamic Programming",
        }
    }

    fn complexity(&self) -> &'static str {
        match self {
            Self::Bfs => "O(V + E)",
            Self::Dp => "O(V * E)",
        }
    }
}

/// Answer from one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowsResult {
    /// Fewest throws to reach the last square, `None` if it is unreachable.
    pub throws: Option<u32>,
    /// Wall-clock time in milliseconds.
    pub time_taken_ms: f64,
    /// Strategy that produced the answer.
    pub algorithm: ThrowsStrategy,
}

/// Both strategies run on the same board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowsComparison {
    /// Breadth-first search result.
    pub bfs: ThrowsResult,
    /// Relaxation result.
    pub dp: ThrowsResult,
    /// Whether both found the same throw count.
    pub agree: bool,
}

/// Fewest throws on a board of `total` squares.
///
/// The layout is checked with [`check_layout`] first, so `total` need not be
/// a perfect square.
pub fn minimum_throws(
    total: u32,
    ladders: &[Ladder],
    snakes: &[Snake],
    strategy: ThrowsStrategy,
) -> Result<ThrowsResult, SolverError> {
    check_layout(total, ladders, snakes)?;
    let teleports = TeleportMap::new(ladders, snakes);

    let (throws, time_taken_ms) = timed(|| match strategy {
        ThrowsStrategy::Bfs => min_throws_bfs(total, &teleports),
        ThrowsStrategy::Dp => min_throws_dp(total, &teleports),
    });
    log::debug!(
        "{} on {} squares: {:?} throws in {:.3}ms",
        strategy.name(),
        total,
        throws,
        time_taken_ms
    );

    Ok(ThrowsResult {
        throws,
        time_taken_ms,
        algorithm: strategy,
    })
}

/// Generate an `N x N` board using the budget and seed from `config`.
pub fn generate_board(size: u32, config: &SolverConfig) -> Result<Board, SolverError> {
    let mut rng = config.rng();
    Board::generate(size, config.board_attempts, &mut rng)
}

/// Run both strategies on `board` and compare them.
///
/// A disagreement means one of the solvers is wrong; it is logged at error
/// level and reported through [`ThrowsComparison::agree`].
pub fn cross_check(board: &Board) -> Result<ThrowsComparison, SolverError> {
    let bfs = minimum_throws(board.total, &board.ladders, &board.snakes, ThrowsStrategy::Bfs)?;
    let dp = minimum_throws(board.total, &board.ladders, &board.snakes, ThrowsStrategy::Dp)?;
    let agree = bfs.throws == dp.throws;
    if !agree {
        log::error!(
            "minimum throws mismatch on {}x{} board: BFS {:?}, DP {:?}",
            board.size,
            board.size,
            bfs.throws,
            dp.throws
        );
    }
    Ok(ThrowsComparison { bfs, dp, agree })
}
