//! Traveling Salesman round trips over a fixed distance matrix.
//!
//! A round starts at a home city, visits every target city exactly once and
//! returns home. Three interchangeable strategies compute the tour:
//!
//! | Strategy | Exact | Complexity |
//! |----------|-------|------------|
//! | [`TspStrategy::BruteForce`] | yes | `O(n!)` |
//! | [`TspStrategy::NearestNeighbor`] | no | `O(n^2)` |
//! | [`TspStrategy::DynamicProgramming`] | yes, up to the Held–Karp limit | `O(n^2 * 2^n)` |
//!
//! Cities are indices into the matrix and are reported as letters
//! (`0 -> 'A'`).
//!
//! # Example
//! ```
//! use puzzle_solvers::puzzles::tsp::{self, DistanceMatrix, TspStrategy};
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0.0, 60.0, 70.0, 80.0],
//!     vec![60.0, 0.0, 50.0, 90.0],
//!     vec![70.0, 50.0, 0.0, 65.0],
//!     vec![80.0, 90.0, 65.0, 0.0],
//! ]).unwrap();
//!
//! let solution = tsp::solve(&matrix, 0, &[1], TspStrategy::BruteForce).unwrap();
//! assert_eq!(solution.path, vec!['A', 'B', 'A']);
//! assert_eq!(solution.distance, 120.0);
//! ```

pub mod matrix;
pub mod strategies;
pub mod validate;

pub use matrix::{city_index, city_label, DistanceMatrix};
pub use strategies::HELD_KARP_MAX_TARGETS;
pub use validate::{validate_path, PathValidation, PathViolation, DISTANCE_TOLERANCE};

use serde::{Deserialize, Serialize};

use crate::solver::{timed, Algorithm, SolverConfig, SolverError};

/// Round-trip search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TspStrategy {
    /// Every ordering of the targets.
    BruteForce,
    /// Greedy closest-next-city heuristic.
    NearestNeighbor,
    /// Held–Karp bitmask dynamic programming.
    DynamicProgramming,
}

impl TspStrategy {
    /// Every strategy, in display order.
    pub const ALL: [TspStrategy; 3] = [
        TspStrategy::BruteForce,
        TspStrategy::NearestNeighbor,
        TspStrategy::DynamicProgramming,
    ];
}

impl Algorithm for TspStrategy {
    fn name(&self) -> &'static str {
        match self {
            Self::BruteForce => "Brute Force",
            Self::NearestNeighbor => "Nearest Neighbor",
            Self::DynamicProgramming => "Dynamic Programming",
        }
    }

    fn complexity(&self) -> &'static str {
        match self {
            Self::BruteForce => "O(n!)",
            Self::NearestNeighbor => "O(n^2)",
            Self::DynamicProgramming => "O(n^2 * 2^n)",
        }
    }
}

/// A computed round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TspSolution {
    /// City letters from home through every target and back home.
    pub path: Vec<char>,
    /// Total length of `path`.
    pub distance: f64,
    /// Wall-clock time in milliseconds.
    pub time_taken_ms: f64,
    /// Complexity label with the instance size, e.g. `"O(n!) where n=3"`.
    pub complexity: String,
    /// Strategy that actually produced the tour.
    ///
    /// Differs from the requested one when dynamic programming fell back to
    /// nearest neighbor.
    pub algorithm: TspStrategy,
}

/// TSP solver with a configurable Held–Karp size limit.
#[derive(Debug, Clone, Copy)]
pub struct TspSolver {
    held_karp_limit: usize,
}

impl Default for TspSolver {
    fn default() -> Self {
        Self {
            held_karp_limit: SolverConfig::default().held_karp_limit,
        }
    }
}

impl TspSolver {
    /// Solver using the limit from `config`, capped at
    /// [`HELD_KARP_MAX_TARGETS`].
    pub fn from_config(config: &SolverConfig) -> Self {
        Self {
            held_karp_limit: config.held_karp_limit.min(HELD_KARP_MAX_TARGETS),
        }
    }

    /// Compute a round trip from `home` through `targets`.
    ///
    /// Fails on an out-of-range home or target index, an empty, duplicated
    /// or home-containing target list.
    pub fn solve(
        &self,
        matrix: &DistanceMatrix,
        home: usize,
        targets: &[usize],
        strategy: TspStrategy,
    ) -> Result<TspSolution, SolverError> {
        check_round(matrix, home, targets)?;

        let algorithm = match strategy {
            TspStrategy::DynamicProgramming if targets.len() > self.held_karp_limit => {
                log::warn!(
                    "{} targets exceed the Held-Karp limit of {}, using nearest neighbor",
                    targets.len(),
                    self.held_karp_limit
                );
                TspStrategy::NearestNeighbor
            }
            other => other,
        };

        let ((tour, distance), time_taken_ms) = timed(|| match algorithm {
            TspStrategy::BruteForce => strategies::brute_force(matrix, home, targets),
            TspStrategy::NearestNeighbor => strategies::nearest_neighbor(matrix, home, targets),
            TspStrategy::DynamicProgramming => strategies::held_karp(matrix, home, targets),
        });
        log::debug!(
            "{} over {} targets: {} in {:.3}ms",
            algorithm.name(),
            targets.len(),
            distance,
            time_taken_ms
        );

        Ok(TspSolution {
            path: tour.into_iter().map(city_label).collect(),
            distance,
            time_taken_ms,
            complexity: format!("{} where n={}", algorithm.complexity(), targets.len()),
            algorithm,
        })
    }

    /// Run every strategy on the same round.
    pub fn solve_all(
        &self,
        matrix: &DistanceMatrix,
        home: usize,
        targets: &[usize],
    ) -> Result<Vec<TspSolution>, SolverError> {
        TspStrategy::ALL
            .iter()
            .map(|&s| self.solve(matrix, home, targets, s))
            .collect()
    }
}

/// Solve with the default Held–Karp limit.
pub fn solve(
    matrix: &DistanceMatrix,
    home: usize,
    targets: &[usize],
    strategy: TspStrategy,
) -> Result<TspSolution, SolverError> {
    TspSolver::default().solve(matrix, home, targets, strategy)
}

fn check_round(matrix: &DistanceMatrix, home: usize, targets: &[usize]) -> Result<(), SolverError> {
    let size = matrix.size();
    if home >= size {
        return Err(SolverError::HomeOutOfRange { home, size });
    }
    if targets.is_empty() {
        return Err(SolverError::NoTargets);
    }
    for (i, &target) in targets.iter().enumerate() {
        if target >= size {
            return Err(SolverError::TargetOutOfRange { target, size });
        }
        if target == home {
            return Err(SolverError::HomeInTargets(home));
        }
        if targets[..i].contains(&target) {
            return Err(SolverError::DuplicateTarget(target));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ValueRange;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn test_matrix() -> DistanceMatrix {
        DistanceMatrix::new(vec![
            vec![0.0, 60.0, 70.0, 80.0],
            vec![60.0, 0.0, 50.0, 90.0],
            vec![70.0, 50.0, 0.0, 65.0],
            vec![80.0, 90.0, 65.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_single_target_round_trip() {
        for strategy in TspStrategy::ALL {
            let solution = solve(&test_matrix(), 0, &[1], strategy).unwrap();
            assert_eq!(solution.path, vec!['A', 'B', 'A']);
            assert_eq!(solution.distance, 120.0);
            assert!(solution.time_taken_ms >= 0.0);
        }
    }

    #[test]
    fn test_complexity_labels() {
        let m = test_matrix();
        let bf = solve(&m, 0, &[1, 2], TspStrategy::BruteForce).unwrap();
        let nn = solve(&m, 0, &[1, 2], TspStrategy::NearestNeighbor).unwrap();
        let dp = solve(&m, 0, &[1, 2], TspStrategy::DynamicProgramming).unwrap();

        assert_eq!(bf.complexity, "O(n!) where n=2");
        assert!(nn.complexity.contains("O(n^2)"));
        assert!(dp.complexity.contains("O(n^2 * 2^n)"));
        assert_eq!(bf.path.len(), 4);
    }

    #[test]
    fn test_invalid_inputs_fail() {
        let m = test_matrix();
        assert_eq!(
            solve(&m, 4, &[1], TspStrategy::BruteForce),
            Err(SolverError::HomeOutOfRange { home: 4, size: 4 })
        );
        assert_eq!(
            solve(&m, 0, &[], TspStrategy::NearestNeighbor),
            Err(SolverError::NoTargets)
        );
        assert_eq!(
            solve(&m, 0, &[1, 7], TspStrategy::DynamicProgramming),
            Err(SolverError::TargetOutOfRange { target: 7, size: 4 })
        );
        assert_eq!(
            solve(&m, 0, &[1, 1], TspStrategy::BruteForce),
            Err(SolverError::DuplicateTarget(1))
        );
        assert_eq!(
            solve(&m, 0, &[0, 1], TspStrategy::BruteForce),
            Err(SolverError::HomeInTargets(0))
        );
    }

    #[test]
    fn test_dynamic_programming_falls_back_above_limit() {
        let solver = TspSolver::from_config(&SolverConfig::default().with_held_karp_limit(2));
        let solution = solver
            .solve(&test_matrix(), 0, &[1, 2, 3], TspStrategy::DynamicProgramming)
            .unwrap();

        assert_eq!(solution.algorithm, TspStrategy::NearestNeighbor);
        assert_eq!(solution.path.len(), 5);
    }

    #[test]
    fn test_unvalidated_limit_is_capped() {
        let solver = TspSolver::from_config(&SolverConfig::default().with_held_karp_limit(64));
        let mut rng = StdRng::seed_from_u64(5);
        let m = DistanceMatrix::random(65, ValueRange::new(50, 100), &mut rng);
        let targets: Vec<usize> = (1..65).collect();

        let solution = solver
            .solve(&m, 0, &targets, TspStrategy::DynamicProgramming)
            .unwrap();
        assert_eq!(solution.algorithm, TspStrategy::NearestNeighbor);
        assert_eq!(solution.path.len(), 66);
    }

    #[test]
    fn test_strategies_agree_on_random_rounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let solver = TspSolver::default();

        for _ in 0..5 {
            let m = DistanceMatrix::random(10, ValueRange::new(50, 100), &mut rng);
            let mut cities: Vec<usize> = (0..10).collect();
            cities.shuffle(&mut rng);
            let home = cities[0];
            let targets = &cities[1..7];

            let all = solver.solve_all(&m, home, targets).unwrap();
            let (bf, nn, dp) = (&all[0], &all[1], &all[2]);

            assert!(bf.distance <= nn.distance + 1e-9);
            assert!((bf.distance - dp.distance).abs() < DISTANCE_TOLERANCE);
            for s in &all {
                assert_eq!(s.path.len(), targets.len() + 2);
            }

            // The computed optimum validates as correct
            let labels: Vec<char> = targets.iter().map(|&t| city_label(t)).collect();
            let v = validate_path(&dp.path, city_label(home), &labels, &m, bf.distance);
            assert!(v.is_correct, "{}", v.message);
        }
    }
}
