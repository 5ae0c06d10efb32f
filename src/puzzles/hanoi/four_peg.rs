//! Four-peg Tower of Hanoi: Frame–Stewart counts and a naive generator.

use rustc_hash::FxHashMap;

use super::three_peg::three_peg_count;
use super::{check_disks, Move};
use crate::solver::SolverError;

/// Memoized Frame–Stewart move counts for one puzzle instance.
///
/// The memo lives in the session, not in a global, so independent rounds
/// never share entries. Create a new session (or call [`reset`]) per round.
///
/// [`reset`]: FrameStewart::reset
///
/// # Example
/// ```
/// use puzzle_solvers::puzzles::hanoi::FrameStewart;
///
/// let mut fs = FrameStewart::new();
/// assert_eq!(fs.moves(10, 4).unwrap(), 49);
/// ```
#[derive(Debug, Default, Clone)]
pub struct FrameStewart {
    memo: FxHashMap<(u32, usize), u64>,
}

impl FrameStewart {
    /// Create a session with an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum moves for `disks` disks on `pegs` pegs.
    ///
    /// `f(n, m) = min over 1 <= k < n of 2 * f(k, m) + f(n - k, m - 1)`,
    /// with `f(0, _) = 0`, `f(1, _) = 1` and `f(n, 3) = 2^n - 1`.
    pub fn moves(&mut self, disks: u32, pegs: usize) -> Result<u64, SolverError> {
        if pegs < 3 {
            return Err(SolverError::InvalidPegCount(pegs));
        }
        Ok(self.count(disks, pegs))
    }

    fn count(&mut self, n: u32, m: usize) -> u64 {
        match (n, m) {
            (0, _) => return 0,
            (1, _) => return 1,
            (_, 3) => return three_peg_count(n),
            _ => {}
        }
        if let Some(&cached) = self.memo.get(&(n, m)) {
            return cached;
        }

        let mut best = u64::MAX;
        for k in 1..n {
            let candidate = self
                .count(k, m)
                .saturating_mul(2)
                .saturating_add(self.count(n - k, m - 1));
            best = best.min(candidate);
        }

        self.memo.insert((n, m), best);
        best
    }

    /// Number of memoized `(disks, pegs)` entries.
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Forget every memoized entry.
    pub fn reset(&mut self) {
        self.memo.clear();
    }
}

/// Four-peg baseline that never touches `aux2`.
///
/// This is the 3-peg recursion with a spare peg left idle, so it needs
/// `2^n - 1` moves rather than the Frame–Stewart optimum. It exists only as
/// a comparison baseline.
pub fn solve_four_peg_naive(
    disks: u32,
    source: char,
    dest: char,
    aux1: char,
    aux2: char,
) -> Result<Vec<Move>, SolverError> {
    check_disks(disks)?;
    let mut moves = Vec::with_capacity(three_peg_count(disks) as usize);
    naive(disks, source, dest, aux1, aux2, &mut moves);
    Ok(moves)
}

fn naive(n: u32, source: char, dest: char, aux1: char, aux2: char, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    naive(n - 1, source, aux1, dest, aux2, moves);
    moves.push(Move {
        disk: n,
        from: source,
        to: dest,
    });
    naive(n - 1, aux1, dest, source, aux2, moves);
}
