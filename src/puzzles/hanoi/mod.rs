//! Tower of Hanoi solvers.
//!
//! - [`solve_recursive`] / [`solve_iterative`]: the optimal 3-peg sequence
//! - [`FrameStewart`]: memoized optimal move counts for 4 or more pegs
//! - [`solve_four_peg_naive`]: a deliberately sub-optimal 4-peg baseline
//! - [`Towers`] / [`verify_sequence`]: peg state used to check sequences
//!
//! Pegs are identified by `char` labels (`'A'`, `'B'`, ...) and disks by
//! size, `1` being the smallest.

pub mod four_peg;
pub mod three_peg;
pub mod towers;

pub use four_peg::{solve_four_peg_naive, FrameStewart};
pub use three_peg::{solve_iterative, solve_recursive, three_peg_count};
pub use towers::{verify_sequence, MoveError, Towers};

use serde::{Deserialize, Serialize};

use crate::solver::{timed, Algorithm, SolverError};

/// Largest disk count for which full move lists are generated.
pub const MAX_DISKS: u32 = 20;

/// A single disk move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Disk size, 1 being the smallest.
    pub disk: u32,
    /// Source peg label.
    pub from: char,
    /// Destination peg label.
    pub to: char,
}

/// The Hanoi algorithms that can be compared in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HanoiAlgorithm {
    /// Divide and conquer over 3 pegs.
    Recursive,
    /// Loop over fixed peg pairs, 3 pegs.
    Iterative,
    /// Memoized optimal count, 4 pegs.
    FrameStewart,
    /// 3-peg recursion on 4 pegs, one peg idle.
    FourPegNaive,
}

impl Algorithm for HanoiAlgorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::Recursive => "3-Peg Recursive",
            Self::Iterative => "3-Peg Iterative",
            Self::FrameStewart => "4-Peg Frame-Stewart",
            Self::FourPegNaive => "4-Peg Naive",
        }
    }

    fn complexity(&self) -> &'static str {
        match self {
            Self::Recursive | Self::Iterative | Self::FourPegNaive => "O(2^n)",
            Self::FrameStewart => "O(n^2)",
        }
    }
}

/// Outcome of one algorithm in [`compare_solvers`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRun {
    /// Which algorithm ran.
    pub algorithm: HanoiAlgorithm,
    /// Number of moves produced (or counted).
    pub moves: u64,
    /// Wall-clock time in milliseconds.
    pub time_taken_ms: f64,
}

/// Minimum number of moves for `disks` disks on `pegs` pegs.
///
/// Returns `Ok(None)` for more than four pegs, which this game does not
/// support. Fewer than three pegs is an error. Each call uses a fresh
/// Frame–Stewart memo.
pub fn optimal_move_count(disks: u32, pegs: usize) -> Result<Option<u64>, SolverError> {
    match pegs {
        0..=2 => Err(SolverError::InvalidPegCount(pegs)),
        3 => Ok(Some(three_peg_count(disks))),
        4 => FrameStewart::new().moves(disks, 4).map(Some),
        _ => Ok(None),
    }
}

/// Generate a full move list from `source` to `dest`.
///
/// One auxiliary peg selects the optimal 3-peg solution; two select the
/// naive 4-peg baseline. Other peg counts are rejected.
pub fn generate_move_sequence(
    disks: u32,
    source: char,
    dest: char,
    auxiliaries: &[char],
) -> Result<Vec<Move>, SolverError> {
    check_round(disks, source, dest, auxiliaries)?;

    match auxiliaries {
        [aux] => solve_recursive(disks, source, dest, *aux),
        [aux1, aux2] => solve_four_peg_naive(disks, source, dest, *aux1, *aux2),
        _ => Err(SolverError::InvalidPegCount(auxiliaries.len() + 2)),
    }
}

/// Run every algorithm that applies to the peg count and time each one.
///
/// With 3 pegs the recursive and iterative generators run; with 4 the
/// Frame–Stewart count and the naive generator run. More than four pegs
/// yields an empty list.
pub fn compare_solvers(
    disks: u32,
    source: char,
    dest: char,
    auxiliaries: &[char],
) -> Result<Vec<AlgorithmRun>, SolverError> {
    check_round(disks, source, dest, auxiliaries)?;

    let runs = match *auxiliaries {
        [aux] => vec![
            run(HanoiAlgorithm::Recursive, || {
                solve_recursive(disks, source, dest, aux).map(|m| m.len() as u64)
            })?,
            run(HanoiAlgorithm::Iterative, || {
                solve_iterative(disks, source, dest, aux).map(|m| m.len() as u64)
            })?,
        ],
        [aux1, aux2] => {
            // Fresh memo per round
            let mut session = FrameStewart::new();
            let (optimal, time_taken_ms) = timed(|| session.moves(disks, 4));
            let frame_stewart = AlgorithmRun {
                algorithm: HanoiAlgorithm::FrameStewart,
                moves: optimal?,
                time_taken_ms,
            };
            vec![
                frame_stewart,
                run(HanoiAlgorithm::FourPegNaive, || {
                    solve_four_peg_naive(disks, source, dest, aux1, aux2).map(|m| m.len() as u64)
                })?,
            ]
        }
        _ => Vec::new(),
    };

    for r in &runs {
        log::debug!(
            "{} disks: {} made {} moves in {:.3}ms",
            disks,
            r.algorithm.name(),
            r.moves,
            r.time_taken_ms
        );
    }
    Ok(runs)
}

fn run<F>(algorithm: HanoiAlgorithm, f: F) -> Result<AlgorithmRun, SolverError>
where
    F: FnOnce() -> Result<u64, SolverError>,
{
    let (moves, time_taken_ms) = timed(f);
    Ok(AlgorithmRun {
        algorithm,
        moves: moves?,
        time_taken_ms,
    })
}

fn check_disks(disks: u32) -> Result<(), SolverError> {
    if disks > MAX_DISKS {
        return Err(SolverError::TooManyDisks(disks));
    }
    Ok(())
}

/// Disk limit, at least three pegs, and distinct labels.
fn check_round(
    disks: u32,
    source: char,
    dest: char,
    auxiliaries: &[char],
) -> Result<(), SolverError> {
    check_disks(disks)?;
    let mut labels = vec![source, dest];
    labels.extend_from_slice(auxiliaries);
    Towers::new(&labels, source, 0).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_move_count() {
        assert_eq!(optimal_move_count(5, 3).unwrap(), Some(31));
        assert_eq!(optimal_move_count(10, 3).unwrap(), Some(1023));
        assert_eq!(optimal_move_count(5, 4).unwrap(), Some(13));
        assert_eq!(optimal_move_count(10, 4).unwrap(), Some(49));
    }

    #[test]
    fn test_optimal_move_count_unsupported_and_invalid() {
        assert_eq!(optimal_move_count(5, 5).unwrap(), None);
        assert_eq!(optimal_move_count(5, 2), Err(SolverError::InvalidPegCount(2)));
    }

    #[test]
    fn test_generate_move_sequence_dispatch() {
        let three = generate_move_sequence(4, 'A', 'C', &['B']).unwrap();
        assert_eq!(three.len(), 15);

        let four = generate_move_sequence(4, 'A', 'D', &['B', 'C']).unwrap();
        assert_eq!(four.len(), 15);
        assert!(four.iter().all(|m| m.to != 'C'));
    }

    #[test]
    fn test_generate_move_sequence_rejects_bad_input() {
        assert_eq!(
            generate_move_sequence(3, 'A', 'C', &[]),
            Err(SolverError::InvalidPegCount(2))
        );
        assert_eq!(
            generate_move_sequence(3, 'A', 'A', &['B']),
            Err(SolverError::InvalidPegLabel('A'))
        );
        assert_eq!(
            generate_move_sequence(MAX_DISKS + 1, 'A', 'C', &['B']),
            Err(SolverError::TooManyDisks(MAX_DISKS + 1))
        );
        assert_eq!(
            generate_move_sequence(3, 'A', 'E', &['B', 'C', 'D']),
            Err(SolverError::InvalidPegCount(5))
        );
    }

    #[test]
    fn test_generate_zero_disks_is_empty() {
        assert!(generate_move_sequence(0, 'A', 'C', &['B']).unwrap().is_empty());
    }

    #[test]
    fn test_compare_solvers_three_pegs() {
        let runs = compare_solvers(6, 'A', 'C', &['B']).unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].algorithm, HanoiAlgorithm::Recursive);
        assert_eq!(runs[1].algorithm, HanoiAlgorithm::Iterative);
        assert!(runs.iter().all(|r| r.moves == 63 && r.time_taken_ms >= 0.0));
    }

    #[test]
    fn test_compare_solvers_four_pegs() {
        let runs = compare_solvers(5, 'A', 'D', &['B', 'C']).unwrap();

        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].algorithm, HanoiAlgorithm::FrameStewart);
        assert_eq!(runs[0].moves, 13);
        assert_eq!(runs[1].algorithm, HanoiAlgorithm::FourPegNaive);
        assert!(runs[1].moves >= runs[0].moves);
    }

    #[test]
    fn test_compare_solvers_many_pegs_is_empty() {
        assert!(compare_solvers(5, 'A', 'E', &['B', 'C', 'D']).unwrap().is_empty());
    }
}
