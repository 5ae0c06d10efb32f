//! Eight Queens: every placement of 8 non-attacking queens.
//!
//! The search is plain row-by-row backtracking. The parallel solver splits
//! it into [`BOARD_SIZE`] partitions by fixing the column of the queen in
//! row 0, hands the partitions round-robin to a dedicated rayon pool and
//! merges the results in partition order, so both solvers return the same
//! 92 boards in the same order.

pub mod board;

pub use board::{is_safe, is_valid_solution, QueensBoard};

use std::panic::{self, RefUnwindSafe};

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::solver::{timed, Algorithm, SolverError};

/// Board side length, and so the number of first-row partitions.
pub const BOARD_SIZE: usize = 8;

/// Number of solutions on the standard board.
pub const SOLUTION_COUNT: usize = 92;

/// How the search was run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueensMode {
    /// One thread, all partitions in order.
    Sequential,
    /// Partitions spread over a worker pool.
    Parallel,
}

impl Algorithm for QueensMode {
    fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "Sequential Backtracking",
            Self::Parallel => "Parallel Backtracking",
        }
    }

    fn complexity(&self) -> &'static str {
        "O(N!)"
    }
}

/// Result of one full search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueensRun {
    /// Serialized boards, see [`QueensBoard::serialize`].
    pub solutions: Vec<String>,
    /// Wall-clock time in milliseconds.
    pub time_taken_ms: f64,
    /// Number of distinct solutions.
    pub count: usize,
    /// How the search was run.
    pub mode: QueensMode,
    /// Threads used.
    pub workers: usize,
}

/// Every solution whose row-0 queen sits in column `first_col`.
pub fn solve_partition(first_col: usize) -> Vec<String> {
    let mut found = Vec::new();
    if first_col < BOARD_SIZE {
        let mut placed = Vec::with_capacity(BOARD_SIZE);
        placed.push(first_col);
        backtrack(&mut placed, &mut found);
    }
    found
}

fn backtrack(placed: &mut Vec<usize>, found: &mut Vec<String>) {
    if placed.len() == BOARD_SIZE {
        let mut cols = [0; BOARD_SIZE];
        cols.copy_from_slice(placed);
        found.push(QueensBoard::from_columns(cols).serialize());
        return;
    }
    for col in 0..BOARD_SIZE {
        if is_safe(placed, col) {
            placed.push(col);
            backtrack(placed, found);
            placed.pop();
        }
    }
}

/// Single-threaded search over all partitions.
pub fn solve_sequential() -> QueensRun {
    let (solutions, time_taken_ms) =
        timed(|| (0..BOARD_SIZE).flat_map(solve_partition).collect::<Vec<_>>());
    log::debug!(
        "sequential queens: {} solutions in {:.3}ms",
        solutions.len(),
        time_taken_ms
    );

    QueensRun {
        count: solutions.len(),
        solutions,
        time_taken_ms,
        mode: QueensMode::Sequential,
        workers: 1,
    }
}

/// Search with `worker_count` threads, `1..=8`.
///
/// Worker `w` searches partitions `w`, `w + worker_count`, ... The call
/// blocks until every worker has reported. A panicking worker fails the
/// whole run with [`SolverError::WorkerFailed`].
pub fn solve_parallel(worker_count: usize) -> Result<QueensRun, SolverError> {
    let (solutions, time_taken_ms) = timed(|| run_partitions(worker_count, solve_partition));
    let solutions = solutions?;
    log::debug!(
        "parallel queens ({} workers): {} solutions in {:.3}ms",
        worker_count,
        solutions.len(),
        time_taken_ms
    );

    Ok(QueensRun {
        count: solutions.len(),
        solutions,
        time_taken_ms,
        mode: QueensMode::Parallel,
        workers: worker_count,
    })
}

fn run_partitions<F>(worker_count: usize, search: F) -> Result<Vec<String>, SolverError>
where
    F: Fn(usize) -> Vec<String> + Sync + RefUnwindSafe,
{
    if worker_count == 0 || worker_count > BOARD_SIZE {
        return Err(SolverError::InvalidWorkerCount(worker_count));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .build()
        .map_err(|e| SolverError::ThreadPool(e.to_string()))?;

    let reports: Vec<Vec<(usize, Vec<String>)>> = pool.install(|| {
        (0..worker_count)
            .into_par_iter()
            .map(|worker| {
                (worker..BOARD_SIZE)
                    .step_by(worker_count)
                    .map(|partition| {
                        panic::catch_unwind(|| search(partition))
                            .map(|found| (partition, found))
                            .map_err(|payload| SolverError::WorkerFailed {
                                partition,
                                reason: panic_reason(payload.as_ref()),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    let mut partitions: Vec<(usize, Vec<String>)> = reports.into_iter().flatten().collect();
    partitions.sort_by_key(|(partition, _)| *partition);

    let mut seen = FxHashSet::default();
    let mut solutions = Vec::new();
    for (_, found) in partitions {
        for board in found {
            if seen.insert(board.clone()) {
                solutions.push(board);
            }
        }
    }
    Ok(solutions)
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_finds_92() {
        let run = solve_sequential();
        assert_eq!(run.count, SOLUTION_COUNT);
        assert_eq!(run.solutions.len(), SOLUTION_COUNT);
        assert_eq!(run.mode, QueensMode::Sequential);

        let distinct: FxHashSet<&String> = run.solutions.iter().collect();
        assert_eq!(distinct.len(), SOLUTION_COUNT);
        assert!(run.solutions.iter().all(|s| is_valid_solution(s)));
        assert_eq!(run.solutions[0], "[0,4,7,5,2,6,1,3]");
    }

    #[test]
    fn test_partitions_cover_every_solution() {
        let total: usize = (0..BOARD_SIZE).map(|c| solve_partition(c).len()).sum();
        assert_eq!(total, SOLUTION_COUNT);
        assert_eq!(solve_partition(0).len(), 4);
        assert!(solve_partition(BOARD_SIZE).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential_for_any_worker_count() {
        let sequential = solve_sequential();
        for workers in 1..=BOARD_SIZE {
            let run = solve_parallel(workers).unwrap();
            assert_eq!(run.count, SOLUTION_COUNT, "{} workers", workers);
            assert_eq!(run.solutions, sequential.solutions, "{} workers", workers);
            assert_eq!(run.workers, workers);
        }
    }

    #[test]
    fn test_parallel_rejects_bad_worker_counts() {
        assert_eq!(solve_parallel(0), Err(SolverError::InvalidWorkerCount(0)));
        assert_eq!(solve_parallel(9), Err(SolverError::InvalidWorkerCount(9)));
    }

    #[test]
    fn test_worker_panic_fails_the_run() {
        let result = run_partitions(4, |partition| {
            if partition == 5 {
                panic!("partition 5 exploded");
            }
            solve_partition(partition)
        });

        assert_eq!(
            result,
            Err(SolverError::WorkerFailed {
                partition: 5,
                reason: "partition 5 exploded".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_reports_are_merged() {
        let result = run_partitions(2, |_| vec!["[0,4,7,5,2,6,1,3]".to_string()]).unwrap();
        assert_eq!(result, vec!["[0,4,7,5,2,6,1,3]".to_string()]);
    }
}
